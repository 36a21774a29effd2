//! Scroll-driven view state: progress ratio, active section, entrance reveals
//! and the rotating hero title.

mod geometry;
mod reveal;
mod state;
mod title;
mod tracker;

pub use geometry::{
    LayoutSnapshot, ScrollMetrics, SectionRect, Viewport, active_section_at, progress_ratio,
};
pub use reveal::{RevealSet, RevealTransition, VisibilityEntry};
pub use state::ScrollState;
pub use title::TitleCycle;
pub use tracker::{TrackerConfig, ViewportTracker};
