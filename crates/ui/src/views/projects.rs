use dioxus::prelude::*;
use portfolio_core::model::Section;

use crate::context::AppContext;
use crate::vm::{CAROUSEL_ID, ProjectCardVm, redirect_wheel, reveal_class};

#[component]
pub fn ProjectsSection(cards: Vec<ProjectCardVm>, revealed: bool) -> Element {
    let scroller = use_context::<AppContext>().scroller();
    let class = format!("projects {}", reveal_class(revealed));

    rsx! {
        section { id: Section::Projects.id(), class: "{class}",
            div { class: "projects-inner",
                h2 { class: "section-title animate-scale-in", "Featured Projects" }
                div {
                    id: CAROUSEL_ID,
                    class: "carousel horizontal-snap",
                    onwheel: move |evt: WheelEvent| {
                        let delta_y = evt.delta().strip_units().y;
                        if redirect_wheel(scroller.as_ref(), delta_y) {
                            evt.prevent_default();
                        }
                    },
                    for card in cards {
                        ProjectCardView { key: "{card.key}", card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCardView(card: ProjectCardVm) -> Element {
    rsx! {
        div { class: "carousel-item",
            article { class: "project-card hover-lift",
                div { class: "project-media",
                    img { class: "scale-on-hover", src: "{card.image_url}", alt: "{card.title}" }
                    div { class: "project-media-fade" }
                }
                div { class: "project-body",
                    h3 { "{card.title}" }
                    p { class: "muted", "{card.description}" }
                    div { class: "chips",
                        for (index, tech) in card.tech.iter().enumerate() {
                            span { key: "{index}", class: "chip hover-lift", "{tech}" }
                        }
                    }
                }
            }
        }
    }
}
