//! Filter on the name search box.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::DeveloperRecord;

/// Keeps records whose normalized name contains the normalized query.
///
/// A blank query passes every record through.
pub struct NameQueryFilter;

impl Filter for NameQueryFilter {
    fn name(&self) -> &str {
        "NameQueryFilter"
    }

    fn apply<'a>(
        &self,
        records: Vec<&'a DeveloperRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a DeveloperRecord> {
        let query = criteria.normalized_query();
        if query.is_empty() {
            return records;
        }

        records
            .into_iter()
            .filter(|record| record.normalized_name().contains(query.as_str()))
            .collect()
    }
}
