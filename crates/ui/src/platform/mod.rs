use std::sync::Arc;

use portfolio_core::model::Section;

mod document;

/// Imperative scroll commands the page issues against the live document.
///
/// Both are silent no-ops when the target element is absent.
pub trait UiScroller: Send + Sync {
    fn scroll_to_section(&self, section: Section);
    fn scroll_horizontally(&self, element_id: &str, delta: f64);
}

pub type ScrollerRef = Arc<dyn UiScroller>;

pub use document::DocumentScroller;
