use dioxus::document::eval;
use portfolio_core::model::Section;

use super::UiScroller;

/// Scroller backed by the renderer's script bridge; works on web and desktop.
pub struct DocumentScroller;

impl UiScroller for DocumentScroller {
    fn scroll_to_section(&self, section: Section) {
        let _ = eval(&scroll_into_view_script(section.id()));
    }

    fn scroll_horizontally(&self, element_id: &str, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let _ = eval(&scroll_by_script(element_id, delta));
    }
}

fn scroll_into_view_script(element_id: &str) -> String {
    format!(
        r#"
        const el = document.getElementById({element_id:?});
        if (el) {{ el.scrollIntoView({{ behavior: "smooth" }}); }}
        "#
    )
}

fn scroll_by_script(element_id: &str, delta: f64) -> String {
    format!(
        r#"
        const el = document.getElementById({element_id:?});
        if (el) {{ el.scrollLeft += {delta}; }}
        "#
    )
}
