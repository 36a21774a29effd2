use dioxus::prelude::*;
use portfolio_core::model::{HeroContent, Section};

#[component]
pub fn HeroSection(
    hero: HeroContent,
    title: String,
    title_index: usize,
    revealed: bool,
    on_navigate: Callback<Section>,
) -> Element {
    let (tagline_class, actions_class) = if revealed {
        (
            "hero-tagline animate-fade-in-up animate-delay-100",
            "hero-actions animate-fade-in-up animate-delay-200",
        )
    } else {
        ("hero-tagline opacity-0", "hero-actions opacity-0")
    };

    let ctas = [
        (Section::Contact, "btn btn-primary", hero.contact_cta.clone()),
        (Section::Projects, "btn btn-outline", hero.projects_cta.clone()),
    ];

    rsx! {
        section { id: Section::Hero.id(), class: "hero",
            div { class: "hero-backdrop animate-gradient" }
            div { class: "hero-inner",
                div { class: "hero-title-slot",
                    // one element per title index; restarts the typing animation
                    for text in std::iter::once(title) {
                        h1 {
                            key: "{title_index}",
                            id: "hero-title",
                            class: "gradient-text typing-text",
                            "{text}"
                        }
                    }
                }
                p { class: tagline_class, "{hero.tagline}" }
                div { class: actions_class,
                    for (section, class, label) in ctas {
                        button {
                            key: "{section}",
                            id: "hero-{section}",
                            class,
                            onclick: move |_| on_navigate.call(section),
                            "{label}"
                        }
                    }
                }
            }
            div { class: "scroll-hint animate-bounce", "aria-hidden": "true", "⌄" }
        }
    }
}
