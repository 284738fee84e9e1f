//! Core traits for the filtering pipeline.
//!
//! - `Filter` is one predicate stage of the `FilterPipeline`
//! - `Renderer` is whatever displays the visible records

use crate::criteria::FilterCriteria;
use data_loader::DeveloperRecord;

/// Core trait for filtering developer records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec of borrowed records and return the
///   survivors, so chaining stages never clones a record
/// - Implementations must keep the relative order of their input
/// - Filters are stateless; everything they look at comes from the criteria
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records still visible after earlier stages
    /// * `criteria` - The active filter criteria
    fn apply<'a>(
        &self,
        records: Vec<&'a DeveloperRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a DeveloperRecord>;
}

/// Consumer of the engine's output.
///
/// Receives the visible records unchanged and in order, plus the size of
/// the full directory for "N of M" style headers.
pub trait Renderer {
    fn render(&mut self, visible: &[&DeveloperRecord], total: usize) -> anyhow::Result<()>;
}
