//! Filter on the language checkboxes and the AND/OR radio.

use crate::criteria::{Combinator, FilterCriteria};
use crate::traits::Filter;
use data_loader::DeveloperRecord;

/// Keeps records whose known languages satisfy the accepted set.
///
/// ## Algorithm
/// - `Or`: at least one accepted language is known (non-empty intersection)
/// - `And`: every accepted language is known (accepted ⊆ known)
///
/// With no language accepted, `Or` keeps nothing and `And` keeps everything.
/// Both follow directly from the set definitions and are intentional.
pub struct LanguageFilter;

impl LanguageFilter {
    /// Decide a single record
    pub fn accepts(record: &DeveloperRecord, criteria: &FilterCriteria) -> bool {
        let mut accepted = criteria.accepted_languages.iter();
        match criteria.combinator {
            Combinator::Or => accepted.any(|language| record.knows(language.as_str())),
            Combinator::And => accepted.all(|language| record.knows(language.as_str())),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply<'a>(
        &self,
        records: Vec<&'a DeveloperRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a DeveloperRecord> {
        records
            .into_iter()
            .filter(|record| Self::accepts(record, criteria))
            .collect()
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
                {"id": 1, "name": "Java Dev", "picture": "", "programmingLanguages": [{"language": "Java", "knowledge": 5}]},
                {"id": 2, "name": "Python Dev", "picture": "", "programmingLanguages": [{"language": "Python", "knowledge": 4}]},
                {"id": 3, "name": "Polyglot", "picture": "", "programmingLanguages": [
                    {"language": "Python", "knowledge": 3},
                    {"language": "JavaScript", "knowledge": 3},
                    {"language": "Java", "knowledge": 3}
                ]},
                {"id": 4, "name": "Rustacean", "picture": "", "programmingLanguages": [{"language": "Rust", "knowledge": 5}]}
            ]"#,
            "test",
        )
        .unwrap()
    }

    fn run(store: &DevStore, criteria: &FilterCriteria) -> Vec<u32> {
        LanguageFilter
            .apply(store.records().iter().collect(), criteria)
            .iter()
            .map(|record| record.id)
            .collect()
    }

    fn criteria_with(languages: &[Language], combinator: Combinator) -> FilterCriteria {
        FilterCriteria {
            accepted_languages: languages.iter().copied().collect(),
            combinator,
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn test_or_needs_one_shared_language() {
        let store = create_test_store();
        let criteria = criteria_with(&[Language::Java, Language::Python], Combinator::Or);
        assert_eq!(run(&store, &criteria), vec![1, 2, 3]);
    }

    #[test]
    fn test_and_needs_every_language() {
        let store = create_test_store();
        let criteria = criteria_with(&[Language::Java, Language::Python], Combinator::And);
        assert_eq!(run(&store, &criteria), vec![3]);
    }

    #[test]
    fn test_empty_selection_asymmetry() {
        let store = create_test_store();

        let or = criteria_with(&[], Combinator::Or);
        assert!(run(&store, &or).is_empty());

        let and = criteria_with(&[], Combinator::And);
        assert_eq!(run(&store, &and), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_defaults_hide_developers_without_listed_languages() {
        let store = create_test_store();
        assert_eq!(run(&store, &FilterCriteria::default()), vec![1, 2, 3]);
    }
}
