use std::time::Duration;

use crate::model::Section;

use super::geometry::{Viewport, active_section_at, progress_ratio};
use super::reveal::{RevealSet, RevealTransition, VisibilityEntry};
use super::state::ScrollState;
use super::title::TitleCycle;

/// Tunables for the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Distance from the viewport top, in px, of the line that selects the
    /// active section.
    pub active_line_px: f64,
    /// Fraction of a section that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub title_interval: Duration,
    pub title_count: usize,
}

impl TrackerConfig {
    pub const DEFAULT_ACTIVE_LINE_PX: f64 = 100.0;
    pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
    pub const DEFAULT_TITLE_INTERVAL: Duration = Duration::from_secs(3);

    #[must_use]
    pub fn with_title_count(mut self, title_count: usize) -> Self {
        self.title_count = title_count;
        self
    }

    #[must_use]
    pub fn with_title_interval(mut self, title_interval: Duration) -> Self {
        self.title_interval = title_interval;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            active_line_px: Self::DEFAULT_ACTIVE_LINE_PX,
            reveal_threshold: Self::DEFAULT_REVEAL_THRESHOLD,
            title_interval: Self::DEFAULT_TITLE_INTERVAL,
            title_count: 0,
        }
    }
}

/// Sole owner and writer of `ScrollState`.
///
/// Starts active; after `teardown` every input is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportTracker {
    config: TrackerConfig,
    state: ScrollState,
    reveals: RevealSet,
    title: TitleCycle,
    active: bool,
}

impl ViewportTracker {
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
            reveals: RevealSet::new(),
            title: TitleCycle::new(config.title_count),
            active: true,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.reveals.is_revealed(section)
    }

    #[must_use]
    pub fn title_index(&self) -> usize {
        self.title.index()
    }

    /// Re-derive progress and active section from the current layout.
    ///
    /// Keeps the previous active section when no section spans the active
    /// line. Returns whether the state changed.
    pub fn recompute_on_scroll(&mut self, viewport: &dyn Viewport) -> bool {
        if !self.active {
            return false;
        }
        let progress = progress_ratio(viewport.scroll_metrics());
        let active_section = active_section_at(viewport, self.config.active_line_px)
            .unwrap_or(self.state.active_section());

        let next = ScrollState::new(progress, active_section);
        if next == self.state {
            return false;
        }
        if next.active_section() != self.state.active_section() {
            tracing::debug!(section = %active_section, "active section changed");
        }
        self.state = next;
        true
    }

    /// Register a section for one-shot entrance reveal.
    pub fn observe_entrance(&mut self, section: Section) {
        if self.active && self.reveals.observe(section) {
            tracing::trace!(%section, "observing entrance");
        }
    }

    /// Reveal a section immediately, as on mount for the hero.
    pub fn reveal_now(&mut self, section: Section) -> RevealTransition {
        if !self.active {
            return RevealTransition::Unchanged;
        }
        self.reveals.reveal_now(section)
    }

    pub fn on_visibility(&mut self, entry: VisibilityEntry) -> RevealTransition {
        if !self.active {
            return RevealTransition::Unchanged;
        }
        let transition = self.reveals.apply(entry);
        if transition == RevealTransition::Revealed {
            tracing::debug!(section = %entry.section, ratio = entry.ratio, "section revealed");
        }
        transition
    }

    /// Timer tick: rotate the hero title. Returns the new index, or `None`
    /// once torn down.
    pub fn cycle_hero_title(&mut self) -> Option<usize> {
        if !self.active {
            return None;
        }
        Some(self.title.advance())
    }

    /// Detach from all inputs. Idempotent.
    pub fn teardown(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.reveals.disconnect();
        tracing::info!("viewport tracker torn down");
    }
}
