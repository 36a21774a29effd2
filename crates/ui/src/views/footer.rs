use dioxus::prelude::*;

#[component]
pub fn Footer(line: String) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container muted", "{line}" }
        }
    }
}
