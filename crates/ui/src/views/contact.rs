use dioxus::prelude::*;
use portfolio_core::model::{ContactContent, Section};

use crate::vm::reveal_class;

#[component]
pub fn ContactSection(contact: ContactContent, mailto: String, revealed: bool) -> Element {
    let class = format!("contact band {}", reveal_class(revealed));

    rsx! {
        section { id: Section::Contact.id(), class: "{class}",
            div { class: "container narrow",
                h2 { class: "section-title animate-scale-in", "{contact.heading}" }
                div { class: "contact-email hover-lift",
                    span { class: "icon", "aria-hidden": "true", "✉" }
                    a { href: "{mailto}", "{contact.email}" }
                }
                div { class: "social-links",
                    for link in contact.links.iter() {
                        a {
                            key: "{link.url}",
                            class: "social-link hover-lift",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
