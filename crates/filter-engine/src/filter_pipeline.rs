//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{LanguageFilter, NameQueryFilter};
use crate::traits::Filter;
use data_loader::DeveloperRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(NameQueryFilter)
///     .add_filter(LanguageFilter);
///
/// let visible = pipeline.apply(store.records(), &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The directory pipeline: name search first, then languages.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(NameQueryFilter)
            .add_filter(LanguageFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the stages, in order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with every record, in source order
    /// 2. For each filter in order, log the input count, apply it and log
    ///    the output count
    /// 3. Return what survived every stage
    pub fn apply<'a>(
        &self,
        records: &'a [DeveloperRecord],
        criteria: &FilterCriteria,
    ) -> Vec<&'a DeveloperRecord> {
        let mut current: Vec<&DeveloperRecord> = records.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Language;
    use data_loader::DevStore;

    fn create_test_store() -> DevStore {
        DevStore::from_json(
            r#"[
                {"id": 1, "name": "André", "picture": "", "programmingLanguages": [{"language": "Java", "knowledge": 1}]},
                {"id": 2, "name": "Ana", "picture": "", "programmingLanguages": [{"language": "Python", "knowledge": 1}]}
            ]"#,
            "test",
        )
        .unwrap()
    }

    #[test]
    fn test_empty_pipeline() {
        let store = create_test_store();
        let pipeline = FilterPipeline::new();

        let mut criteria = FilterCriteria::default();
        criteria.accepted_languages.clear();

        let filtered = pipeline.apply(store.records(), &criteria);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let store = create_test_store();
        let pipeline = FilterPipeline::new().add_filter(NameQueryFilter);

        let mut criteria = FilterCriteria::default();
        criteria.set_name_query("andr");

        let filtered = pipeline.apply(store.records(), &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_standard_pipeline_stages() {
        let store = create_test_store();
        let pipeline = FilterPipeline::standard();
        assert_eq!(pipeline.filter_names(), vec!["NameQueryFilter", "LanguageFilter"]);

        let mut criteria = FilterCriteria::default();
        criteria.set_name_query("an");
        criteria.toggle_language(Language::Java);

        let filtered = pipeline.apply(store.records(), &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ana");
    }
}
