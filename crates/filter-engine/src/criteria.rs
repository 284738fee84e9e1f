//! Filter criteria: what the user has currently asked to see.

use data_loader::normalize_search_text;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Languages offered as checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    JavaScript,
    Python,
}

impl Language {
    /// Every checkbox, in display order
    pub const ALL: [Language; 3] = [Language::Java, Language::JavaScript, Language::Python];

    /// Lowercase name, as found in `DeveloperRecord::known_languages`
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown language '{}' (expected java, javascript or python)", s))
    }
}

/// How accepted languages are combined when matching a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Record must know every accepted language
    And,
    /// Record must know at least one accepted language
    #[default]
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => f.write_str("AND"),
            Combinator::Or => f.write_str("OR"),
        }
    }
}

/// The active filter configuration.
///
/// Defaults to an empty query, all three languages accepted and `Or`.
/// Only the methods below mutate it, and each one leaves it well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub name_query: String,
    pub accepted_languages: BTreeSet<Language>,
    pub combinator: Combinator,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            name_query: String::new(),
            accepted_languages: Language::ALL.into_iter().collect(),
            combinator: Combinator::default(),
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query in the same form as `DeveloperRecord::normalized_name`.
    ///
    /// Empty when the query is blank, which disables the name filter.
    /// Beyond trim + lowercase this also drops accents and inner spaces,
    /// so "é" matches "e" and "ana maria" matches "Ana Maria".
    pub fn normalized_query(&self) -> String {
        normalize_search_text(self.name_query.trim())
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
    }

    /// Flip one checkbox
    pub fn toggle_language(&mut self, language: Language) {
        if !self.accepted_languages.remove(&language) {
            self.accepted_languages.insert(language);
        }
    }

    pub fn select_combinator(&mut self, combinator: Combinator) {
        self.combinator = combinator;
    }

    pub fn accepts(&self, language: Language) -> bool {
        self.accepted_languages.contains(&language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let criteria = FilterCriteria::default();
        assert!(criteria.name_query.is_empty());
        assert_eq!(criteria.combinator, Combinator::Or);
        for language in Language::ALL {
            assert!(criteria.accepts(language));
        }
    }

    #[test]
    fn test_toggle_language() {
        let mut criteria = FilterCriteria::new();

        criteria.toggle_language(Language::Java);
        assert!(!criteria.accepts(Language::Java));
        assert_eq!(criteria.accepted_languages.len(), 2);

        criteria.toggle_language(Language::Java);
        assert!(criteria.accepts(Language::Java));
        assert_eq!(criteria.accepted_languages.len(), 3);
    }

    #[test]
    fn test_normalized_query() {
        let mut criteria = FilterCriteria::new();
        criteria.set_name_query("  André ");
        assert_eq!(criteria.normalized_query(), "andre");

        criteria.set_name_query("   ");
        assert_eq!(criteria.normalized_query(), "");

        criteria.set_name_query("Ana Maria");
        assert_eq!(criteria.normalized_query(), "anamaria");

        criteria.set_name_query("é");
        assert_eq!(criteria.normalized_query(), "e");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("java".parse::<Language>().unwrap(), Language::Java);
        assert_eq!("JavaScript".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!(" python ".parse::<Language>().unwrap(), Language::Python);
        assert!("rust".parse::<Language>().is_err());
    }

    #[test]
    fn test_criteria_serialization() {
        let json = serde_json::to_value(FilterCriteria::default()).unwrap();
        assert_eq!(json["combinator"], "or");
        assert_eq!(json["acceptedLanguages"], serde_json::json!(["java", "javascript", "python"]));
        assert_eq!(json["nameQuery"], "");
    }
}
