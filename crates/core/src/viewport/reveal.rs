use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::Section;

/// One visibility-observer callback for a section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub section: Section,
    pub intersecting: bool,
    #[serde(default)]
    pub ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    Revealed,
    Unchanged,
}

/// Tracks which sections are observed and which have been revealed.
///
/// Reveals are one-shot: a revealed section never goes back to hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    observed: BTreeSet<Section>,
    revealed: BTreeSet<Section>,
}

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a section. Returns false if it was already observed.
    pub fn observe(&mut self, section: Section) -> bool {
        self.observed.insert(section)
    }

    /// Mark a section revealed without waiting for the observer.
    pub fn reveal_now(&mut self, section: Section) -> RevealTransition {
        if self.revealed.insert(section) {
            RevealTransition::Revealed
        } else {
            RevealTransition::Unchanged
        }
    }

    pub fn apply(&mut self, entry: VisibilityEntry) -> RevealTransition {
        if !entry.intersecting || !self.observed.contains(&entry.section) {
            return RevealTransition::Unchanged;
        }
        self.reveal_now(entry.section)
    }

    #[must_use]
    pub fn is_observed(&self, section: Section) -> bool {
        self.observed.contains(&section)
    }

    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    /// Stop observing everything. Revealed sections stay revealed.
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }
}
