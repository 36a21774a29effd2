use portfolio_core::model::Section;
use portfolio_core::viewport::ScrollState;

use crate::platform::UiScroller;

/// One navigation bar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntryVm {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

impl NavEntryVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

#[must_use]
pub fn map_nav_entries(state: &ScrollState) -> Vec<NavEntryVm> {
    Section::ALL
        .into_iter()
        .map(|section| NavEntryVm {
            section,
            label: section.nav_label(),
            active: state.is_active(section),
        })
        .collect()
}

/// Issue exactly one smooth-scroll command for `section`.
pub fn navigate_to(scroller: &dyn UiScroller, section: Section) {
    tracing::debug!(%section, "navigate");
    scroller.scroll_to_section(section);
}
