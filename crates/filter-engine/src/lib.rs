//! Filtering engine for the developer directory.
//!
//! This crate provides:
//! - FilterCriteria, the active query / language / combinator selection
//! - FilterEvent, the typed UI events that mutate the criteria
//! - Filter trait and implementations for name and language matching
//! - FilterPipeline for composing filters
//! - DevFilterEngine, which ties the record store and criteria together
//!
//! ## Architecture
//! Records are processed in stages:
//! 1. NameQueryFilter keeps names containing the search text
//! 2. LanguageFilter keeps records whose languages satisfy the AND/OR rule
//! 3. The survivors go to a Renderer, in their original order
//!
//! ## Example Usage
//! ```ignore
//! use filter_engine::{DevFilterEngine, FilterEvent, Language};
//!
//! let mut engine = DevFilterEngine::new(store);
//! let visible = engine.dispatch(FilterEvent::LanguageToggled(Language::Java));
//! ```

pub mod criteria;
pub mod engine;
pub mod events;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use criteria::{Combinator, FilterCriteria, Language};
pub use engine::{DevFilterEngine, recompute};
pub use events::FilterEvent;
pub use filter_pipeline::FilterPipeline;
pub use traits::{Filter, Renderer};
