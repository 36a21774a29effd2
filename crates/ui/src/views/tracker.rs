use dioxus::document::eval;
use dioxus::prelude::*;
use portfolio_core::model::Section;
use portfolio_core::viewport::{
    LayoutSnapshot, RevealTransition, ScrollState, TrackerConfig, ViewportTracker,
    VisibilityEntry,
};
use serde::Deserialize;

use super::scripts::{TRACKER_TEARDOWN_SCRIPT, tracker_install_script};

/// One event forwarded from the browser by the install script.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum BridgeMessage {
    Scroll { layout: LayoutSnapshot },
    Visible { entry: VisibilityEntry },
    Tick,
}

/// Feed one bridge message to the tracker. Returns whether anything the page
/// renders changed.
pub(crate) fn apply_message(tracker: &mut ViewportTracker, message: BridgeMessage) -> bool {
    match message {
        BridgeMessage::Scroll { layout } => tracker.recompute_on_scroll(&layout),
        BridgeMessage::Visible { entry } => {
            tracker.on_visibility(entry) == RevealTransition::Revealed
        }
        BridgeMessage::Tick => {
            let before = tracker.title_index();
            tracker.cycle_hero_title();
            tracker.title_index() != before
        }
    }
}

/// Decode one raw bridge payload and apply it to the shared tracker.
///
/// The signal is only written when the rendered state changed.
pub(crate) fn deliver(tracker: &mut Signal<ViewportTracker>, raw: serde_json::Value) -> bool {
    let message = match serde_json::from_value::<BridgeMessage>(raw) {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!(%err, "ignoring malformed tracker message");
            return false;
        }
    };
    let mut next = tracker.peek().clone();
    if !apply_message(&mut next, message) {
        return false;
    }
    tracker.set(next);
    true
}

/// Read-only handle on the page's tracker. Components never write through it.
#[derive(Clone, Copy, PartialEq)]
pub struct TrackerView {
    tracker: Signal<ViewportTracker>,
}

impl TrackerView {
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.read().state()
    }

    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.tracker.read().is_revealed(section)
    }

    #[must_use]
    pub fn title_index(&self) -> usize {
        self.tracker.read().title_index()
    }
}

fn mount_tracker(config: TrackerConfig) -> ViewportTracker {
    let mut tracker = ViewportTracker::new(config);
    tracker.reveal_now(Section::Hero);
    for section in Section::OBSERVED {
        tracker.observe_entrance(section);
    }
    tracing::info!(
        titles = config.title_count,
        interval = ?config.title_interval,
        "viewport tracker mounted"
    );
    tracker
}

/// Own the page's `ViewportTracker` for the lifetime of the calling component.
pub fn use_viewport_tracker(config: TrackerConfig) -> TrackerView {
    let tracker = use_signal(|| mount_tracker(config));
    use_tracker_bridge(tracker, config);
    TrackerView { tracker }
}

/// Connect `tracker` to the browser for the lifetime of the calling component.
///
/// The install script runs once the first render is committed, so the
/// observed sections exist when it looks them up. The receive task is the
/// only writer and is cancelled with the scope. On unmount the browser
/// listeners are detached and the tracker is torn down.
pub(crate) fn use_tracker_bridge(tracker: Signal<ViewportTracker>, config: TrackerConfig) {
    use_effect(move || {
        spawn(async move {
            let mut tracker = tracker;
            let mut bridge = eval(&tracker_install_script(&config));
            loop {
                match bridge.recv::<serde_json::Value>().await {
                    Ok(raw) => {
                        deliver(&mut tracker, raw);
                    }
                    Err(err) => {
                        tracing::debug!(?err, "tracker bridge closed");
                        break;
                    }
                }
            }
        });
    });

    use_drop(move || {
        let _ = eval(TRACKER_TEARDOWN_SCRIPT);
        let mut tracker = tracker;
        if let Ok(mut tracker) = tracker.try_write() {
            tracker.teardown();
        }
    });
}
