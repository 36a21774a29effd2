use dioxus::prelude::*;
use portfolio_core::model::{AboutContent, Section};

use crate::vm::reveal_class;

#[component]
pub fn AboutSection(about: AboutContent, revealed: bool) -> Element {
    let class = format!("about band {}", reveal_class(revealed));

    rsx! {
        section { id: Section::About.id(), class: "{class}",
            div { class: "container",
                h2 { class: "section-title animate-scale-in", "{about.heading}" }
                div { class: "about-grid",
                    div { class: "about-text animate-slide-in-left",
                        h3 { class: "about-role hover-lift", "{about.role}" }
                        for (index, paragraph) in about.bio.iter().enumerate() {
                            p { key: "{index}", class: "muted", "{paragraph}" }
                        }
                        div { class: "chips",
                            for skill in about.skills.iter() {
                                span { key: "{skill}", class: "chip chip-accent hover-lift", "{skill}" }
                            }
                        }
                    }
                    div { class: "about-portrait animate-float",
                        img {
                            class: "scale-on-hover",
                            src: "{about.image_url}",
                            alt: "{about.image_alt}",
                        }
                    }
                }
            }
        }
    }
}
