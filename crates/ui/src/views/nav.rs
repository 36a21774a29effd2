use dioxus::prelude::*;
use portfolio_core::model::Section;

use crate::vm::NavEntryVm;

#[component]
pub fn NavBar(brand: String, entries: Vec<NavEntryVm>, on_navigate: Callback<Section>) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div { class: "brand gradient-text hover-lift", "{brand}" }
                div { class: "nav-links",
                    for entry in entries {
                        button {
                            key: "{entry.section}",
                            id: "nav-{entry.section}",
                            class: entry.class(),
                            onclick: move |_| on_navigate.call(entry.section),
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}
