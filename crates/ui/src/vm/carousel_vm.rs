use crate::platform::UiScroller;

/// DOM id of the horizontally scrolling project strip.
pub const CAROUSEL_ID: &str = "project-carousel";

/// Turn vertical wheel movement over the carousel into horizontal scroll.
///
/// Returns true when the event was consumed and its default vertical scroll
/// must be suppressed.
pub fn redirect_wheel(scroller: &dyn UiScroller, delta_y: f64) -> bool {
    if delta_y == 0.0 || !delta_y.is_finite() {
        return false;
    }
    scroller.scroll_horizontally(CAROUSEL_ID, delta_y);
    true
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use portfolio_core::model::Section;

    use super::*;

    #[derive(Default)]
    struct RecordingScroller {
        horizontal: Mutex<Vec<(String, f64)>>,
    }

    impl UiScroller for RecordingScroller {
        fn scroll_to_section(&self, _section: Section) {}

        fn scroll_horizontally(&self, element_id: &str, delta: f64) {
            self.horizontal
                .lock()
                .unwrap()
                .push((element_id.to_string(), delta));
        }
    }

    #[test]
    fn vertical_delta_moves_the_carousel() {
        let scroller = RecordingScroller::default();
        assert!(redirect_wheel(&scroller, 120.0));
        assert!(redirect_wheel(&scroller, -30.0));
        let calls = scroller.horizontal.lock().unwrap();
        assert_eq!(
            *calls,
            [
                (CAROUSEL_ID.to_string(), 120.0),
                (CAROUSEL_ID.to_string(), -30.0)
            ]
        );
    }

    #[test]
    fn zero_delta_is_left_alone() {
        let scroller = RecordingScroller::default();
        assert!(!redirect_wheel(&scroller, 0.0));
        assert!(scroller.horizontal.lock().unwrap().is_empty());
    }
}
