use std::sync::Arc;

use portfolio_core::Clock;
use portfolio_core::model::PortfolioContent;
use portfolio_core::viewport::TrackerConfig;

use crate::platform::{ScrollerRef, UiScroller};

pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<PortfolioContent>;
    fn clock(&self) -> Clock;
    fn tracker_config(&self) -> TrackerConfig;
    fn scroller(&self) -> ScrollerRef;
}

#[derive(Clone)]
pub struct AppContext {
    content: Arc<PortfolioContent>,
    clock: Clock,
    tracker_config: TrackerConfig,
    scroller: ScrollerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let content = app.content();
        // The title count always follows the content actually rendered.
        let tracker_config = app
            .tracker_config()
            .with_title_count(content.hero.titles.len());

        Self {
            content,
            clock: app.clock(),
            tracker_config,
            scroller: app.scroller(),
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<PortfolioContent> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn tracker_config(&self) -> TrackerConfig {
        self.tracker_config
    }

    #[must_use]
    pub fn scroller(&self) -> Arc<dyn UiScroller> {
        Arc::clone(&self.scroller)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
