use serde::{Deserialize, Serialize};

use crate::model::Section;

/// Document-level scroll measurements, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Viewport-relative vertical extent of a section's element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the horizontal line at `line` (px from viewport top) crosses
    /// this rectangle, edges included.
    #[must_use]
    pub fn spans(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Read access to live layout. Implemented by whatever owns the document.
pub trait Viewport {
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// `None` when the section's element is not in the document.
    fn section_rect(&self, section: Section) -> Option<SectionRect>;
}

/// A captured layout: metrics plus whatever section rectangles were present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub metrics: ScrollMetrics,
    #[serde(default)]
    pub rects: Vec<(Section, SectionRect)>,
}

impl LayoutSnapshot {
    #[must_use]
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            metrics,
            rects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, section: Section, rect: SectionRect) -> Self {
        self.rects.retain(|(existing, _)| *existing != section);
        self.rects.push((section, rect));
        self
    }
}

impl Viewport for LayoutSnapshot {
    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    fn section_rect(&self, section: Section) -> Option<SectionRect> {
        self.rects
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, rect)| *rect)
    }
}

/// Fraction of the scrollable range already scrolled, clamped to `[0, 1]`.
///
/// A document that does not scroll reports 0.
#[must_use]
pub fn progress_ratio(metrics: ScrollMetrics) -> f64 {
    let max = metrics.max_scroll();
    if max.is_nan() || max <= 0.0 {
        return 0.0;
    }
    let ratio = metrics.offset / max;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// First section, in document order, whose rectangle spans `line`.
#[must_use]
pub fn active_section_at(viewport: &dyn Viewport, line: f64) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        viewport
            .section_rect(*section)
            .is_some_and(|rect| rect.spans(line))
    })
}
