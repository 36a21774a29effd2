use crate::model::Section;

/// Derived scroll view state. Only `ViewportTracker` constructs changed copies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    progress_ratio: f64,
    active_section: Section,
}

impl ScrollState {
    pub(super) fn new(progress_ratio: f64, active_section: Section) -> Self {
        Self {
            progress_ratio,
            active_section,
        }
    }

    /// Scrolled fraction of the document, in `[0, 1]`.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        self.progress_ratio
    }

    /// Progress as a percentage, for CSS widths.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.progress_ratio * 100.0
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}
