//! Typed UI events.
//!
//! Whatever front end drives the engine (the terminal loop in `cli`, or
//! anything else) translates its widgets into these three variants.

use crate::criteria::{Combinator, FilterCriteria, Language};

/// A user interaction that changes the filter criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Text input changed; carries the full new text
    NameQueryChanged(String),
    /// A language checkbox was clicked
    LanguageToggled(Language),
    /// A combinator radio button was selected
    CombinatorSelected(Combinator),
}

impl FilterEvent {
    /// Apply this event to `criteria`. Never fails.
    pub fn apply_to(self, criteria: &mut FilterCriteria) {
        match self {
            FilterEvent::NameQueryChanged(query) => criteria.set_name_query(query),
            FilterEvent::LanguageToggled(language) => criteria.toggle_language(language),
            FilterEvent::CombinatorSelected(combinator) => criteria.select_combinator(combinator),
        }
    }
}
