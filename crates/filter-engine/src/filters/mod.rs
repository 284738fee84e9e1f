//! Filter implementations for the developer pipeline.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline.

pub mod language;
pub mod name_query;

// Re-export for convenience
pub use language::LanguageFilter;
pub use name_query::NameQueryFilter;
