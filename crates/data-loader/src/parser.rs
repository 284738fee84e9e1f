//! Parser for the `/devs` JSON payload.
//!
//! Turns the raw JSON array into `DeveloperRecord`s and computes the two
//! search fields every record carries:
//! - `normalized_name`: lowercase, NFD-decomposed with combining accents
//!   dropped, whitespace removed ("André Luís" -> "andreluis")
//! - `known_languages`: lowercase language names, sorted

use crate::error::{DataLoadError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, which NFD splits accents into
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Normalize text for name search.
///
/// Used both for record names at load time and for user queries, so the
/// two sides are always compared in the same form.
pub fn normalize_search_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !c.is_whitespace())
        .collect()
}

/// Lowercase the language names of a record into a sorted set
pub fn known_languages_from(languages: &[ProgrammingLanguage]) -> BTreeSet<String> {
    languages
        .iter()
        .map(|entry| entry.language.trim().to_lowercase())
        .collect()
}

/// Parse a JSON array of developers.
///
/// `origin` is only used in error messages (a URL or a file path).
pub fn parse_devs(json: &str, origin: &str) -> Result<Vec<DeveloperRecord>> {
    let raw: Vec<RawDeveloper> =
        serde_json::from_str(json).map_err(|source| DataLoadError::Json {
            origin: origin.to_string(),
            source,
        })?;

    build_records(raw)
}

/// Compute derived fields for every raw developer.
///
/// Runs on Rayon's pool; `collect` keeps the source order.
pub fn build_records(raw: Vec<RawDeveloper>) -> Result<Vec<DeveloperRecord>> {
    raw.into_par_iter()
        .enumerate()
        .map(|(position, dev)| build_record(position, dev))
        .collect()
}

/// Read a wire id as a `DevId`: non-negative integers and numeric strings
fn wire_id(value: &serde_json::Value) -> Option<DevId> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|id| DevId::try_from(id).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn build_record(position: usize, mut dev: RawDeveloper) -> Result<DeveloperRecord> {
    let before = dev.programming_languages.len();
    dev.programming_languages
        .retain(|entry| !entry.language.trim().is_empty());
    if dev.programming_languages.len() != before {
        tracing::warn!(
            "Developer '{}' has {} blank language name(s), skipping them",
            dev.name,
            before - dev.programming_languages.len()
        );
    }

    if dev.programming_languages.is_empty() {
        tracing::warn!("Developer '{}' lists no programming languages", dev.name);
    }

    let id = match dev.id.as_ref().and_then(wire_id) {
        Some(id) => id,
        None => {
            if let Some(other) = &dev.id {
                tracing::debug!("Developer '{}' has non-numeric id {}, using position", dev.name, other);
            }
            DevId::try_from(position + 1).map_err(|_| DataLoadError::InvalidValue {
                field: "id".to_string(),
                value: (position + 1).to_string(),
            })?
        }
    };

    Ok(DeveloperRecord {
        id,
        normalized_name: normalize_search_text(&dev.name),
        known_languages: known_languages_from(&dev.programming_languages),
        name: dev.name,
        picture: dev.picture,
        programming_languages: dev.programming_languages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 7,
            "name": "André Luís",
            "picture": "https://example.com/andre.png",
            "programmingLanguages": [
                {"language": "Python", "knowledge": 3},
                {"language": "Java", "knowledge": 5}
            ]
        },
        {
            "name": "  João da Silva ",
            "picture": "https://example.com/joao.png",
            "programmingLanguages": [{"language": "JavaScript", "knowledge": 4.5}]
        }
    ]"#;

    #[test]
    fn test_normalize_strips_accents_case_and_spaces() {
        assert_eq!(normalize_search_text("André"), "andre");
        assert_eq!(normalize_search_text("  João da Silva "), "joaodasilva");
        assert_eq!(normalize_search_text("MÜLLER\tçağ"), "mullercag");
        assert_eq!(normalize_search_text(""), "");
    }

    #[test]
    fn test_known_languages_are_lowercase_and_sorted() {
        let languages = vec![
            ProgrammingLanguage { language: "Python".to_string(), knowledge: 1.0 },
            ProgrammingLanguage { language: "Java".to_string(), knowledge: 2.0 },
            ProgrammingLanguage { language: "JavaScript".to_string(), knowledge: 3.0 },
        ];

        let known: Vec<_> = known_languages_from(&languages).into_iter().collect();
        assert_eq!(known, vec!["java", "javascript", "python"]);
    }

    #[test]
    fn test_parse_devs() {
        let records = parse_devs(SAMPLE, "sample").unwrap();
        assert_eq!(records.len(), 2);

        let andre = &records[0];
        assert_eq!(andre.id, 7);
        assert_eq!(andre.normalized_name(), "andreluis");
        assert!(andre.knows("java"));
        assert!(andre.knows("python"));
        assert_eq!(andre.known_languages().iter().collect::<Vec<_>>(), vec!["java", "python"]);
        assert_eq!(andre.programming_languages[0].language, "Python");

        // No id on the wire: falls back to 1-based position
        let joao = &records[1];
        assert_eq!(joao.id, 2);
        assert_eq!(joao.name, "  João da Silva ");
        assert_eq!(joao.normalized_name(), "joaodasilva");
        assert_eq!(joao.programming_languages[0].knowledge, 4.5);
    }

    #[test]
    fn test_parse_keeps_source_order() {
        let json: String = format!(
            "[{}]",
            (0..200)
                .map(|i| format!(r#"{{"name": "Dev {i}", "picture": "", "programmingLanguages": []}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );

        let records = parse_devs(&json, "generated").unwrap();
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.name, format!("Dev {i}"));
            assert_eq!(record.id as usize, i + 1);
        }
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_devs(r#"{"name": "not an array"}"#, "bad.json").unwrap_err();
        assert!(matches!(err, DataLoadError::Json { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_blank_language_names_are_skipped() {
        let json = r#"[
            {"name": "André", "picture": "", "programmingLanguages": [{"language": "Java", "knowledge": 2}]},
            {"name": "Ana", "picture": "", "programmingLanguages": [{"language": ""}, {"language": " Python "}]}
        ]"#;

        let records = parse_devs(json, "blank").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].knows("java"));

        let ana = &records[1];
        assert_eq!(ana.programming_languages.len(), 1);
        assert_eq!(ana.programming_languages[0].knowledge, 0.0);
        assert_eq!(ana.known_languages().iter().collect::<Vec<_>>(), vec!["python"]);
    }

    #[test]
    fn test_parse_string_and_odd_ids() {
        let json = r#"[
            {"id": "a1b2", "name": "Ana", "picture": "", "programmingLanguages": []},
            {"id": "42", "name": "Bia", "picture": "", "programmingLanguages": []},
            {"id": -5, "name": "Caio", "picture": "", "programmingLanguages": []},
            {"id": null, "name": "Davi", "picture": "", "programmingLanguages": []},
            {"id": 9, "name": "Eva", "picture": "", "programmingLanguages": []}
        ]"#;

        let records = parse_devs(json, "ids").unwrap();
        let ids: Vec<DevId> = records.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![1, 42, 3, 4, 9]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_devs("[]", "empty").unwrap().is_empty());
    }
}
