//! # DevFilterEngine
//!
//! Owns the immutable developer list and the one mutable `FilterCriteria`,
//! and recomputes the visible subset whenever an event changes the criteria.
//!
//! There is no other state: the visible list is always derived from
//! `(store, criteria)` by `recompute`, so it cannot drift out of sync.

use crate::criteria::FilterCriteria;
use crate::events::FilterEvent;
use crate::filter_pipeline::FilterPipeline;
use crate::traits::Renderer;
use data_loader::{DevStore, DeveloperRecord};

/// Filter `all_records` by `criteria`.
///
/// Pure function: name filter, then language filter. The result is a
/// subset of `all_records` in their original relative order.
pub fn recompute<'a>(
    all_records: &'a [DeveloperRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a DeveloperRecord> {
    FilterPipeline::standard().apply(all_records, criteria)
}

/// Stateful front of the filter logic, driven by `FilterEvent`s.
pub struct DevFilterEngine {
    store: DevStore,
    criteria: FilterCriteria,
    pipeline: FilterPipeline,
    loading: bool,
}

impl DevFilterEngine {
    /// Engine over a loaded store, with default criteria
    pub fn new(store: DevStore) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            pipeline: FilterPipeline::standard(),
            loading: false,
        }
    }

    /// Engine whose data has not arrived yet; shows nothing until
    /// `finish_loading` is called.
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::new(DevStore::new())
        }
    }

    /// Install the store once the startup load completes.
    ///
    /// The record list is set exactly once; later calls are ignored.
    pub fn finish_loading(&mut self, store: DevStore) {
        if !self.loading {
            tracing::warn!("Developer list already loaded, ignoring second load");
            return;
        }
        self.store = store;
        self.loading = false;
        tracing::debug!("Engine ready with {} developers", self.store.len());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn store(&self) -> &DevStore {
        &self.store
    }

    /// Apply a UI event and return the new visible records
    pub fn dispatch(&mut self, event: FilterEvent) -> Vec<&DeveloperRecord> {
        tracing::debug!("Dispatching {:?}", event);
        event.apply_to(&mut self.criteria);
        self.visible()
    }

    /// Records matching the current criteria, in source order
    pub fn visible(&self) -> Vec<&DeveloperRecord> {
        self.pipeline.apply(self.store.records(), &self.criteria)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    pub fn total_count(&self) -> usize {
        self.store.len()
    }

    /// Hand the visible records to `renderer`
    pub fn render(&self, renderer: &mut impl Renderer) -> anyhow::Result<()> {
        renderer.render(&self.visible(), self.total_count())
    }
}
