//! Core domain types for the developer directory.
//!
//! - `RawDeveloper` is exactly what the `/devs` endpoint sends
//! - `DeveloperRecord` is the loaded record, carrying the search fields
//!   derived from the raw one
//! - `DevStore` owns the full, read-only record list

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a developer record
pub type DevId = u32;

// =============================================================================
// Wire Types
// =============================================================================

/// One entry of a developer's `programmingLanguages` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgrammingLanguage {
    pub language: String,
    /// Self-assessed knowledge level, as sent by the endpoint
    #[serde(default)]
    pub knowledge: f32,
}

/// A developer exactly as the endpoint returns it.
///
/// json-server style endpoints add an `id`, as a number or a string. Any
/// JSON value is accepted here; when it is missing or not a `DevId` the
/// loader falls back to the 1-based position in the array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeveloper {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub name: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub programming_languages: Vec<ProgrammingLanguage>,
}

// =============================================================================
// DeveloperRecord
// =============================================================================

/// A loaded developer profile.
///
/// `normalized_name` and `known_languages` are computed once by the parser
/// and are private, so nothing can change them after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperRecord {
    pub id: DevId,
    pub name: String,
    pub picture: String,
    pub programming_languages: Vec<ProgrammingLanguage>,
    #[serde(skip)]
    pub(crate) normalized_name: String,
    #[serde(skip)]
    pub(crate) known_languages: BTreeSet<String>,
}

impl DeveloperRecord {
    /// Lowercase, accent-free, whitespace-free form of `name`
    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    /// Lowercase language names this developer knows, ascending
    pub fn known_languages(&self) -> &BTreeSet<String> {
        &self.known_languages
    }

    /// Whether the developer lists `language` (expects lowercase)
    pub fn knows(&self, language: &str) -> bool {
        self.known_languages.contains(language)
    }
}

// =============================================================================
// DevStore - the immutable record list
// =============================================================================

/// Full list of developers, in the order the data source returned them.
///
/// Built once at startup and never mutated afterwards; there are no
/// `insert` methods on purpose. An empty store is what a failed load
/// leaves behind.
#[derive(Debug, Clone, Default)]
pub struct DevStore {
    pub(crate) records: Vec<DeveloperRecord>,
}

impl DevStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in source order
    pub fn records(&self) -> &[DeveloperRecord] {
        &self.records
    }

    /// Get a record by its id
    pub fn get(&self, id: DevId) -> Option<&DeveloperRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
