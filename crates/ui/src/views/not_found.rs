use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h2 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the portfolio" }
        }
    }
}
