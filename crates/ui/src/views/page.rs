use dioxus::prelude::*;
use portfolio_core::model::Section;

use crate::context::AppContext;
use crate::views::{
    AboutSection, ContactSection, Footer, HeroSection, NavBar, ProjectsSection,
    use_viewport_tracker,
};
use crate::vm::{footer_line, map_nav_entries, map_project_cards, navigate_to, progress_style};

#[component]
pub fn PortfolioPage() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let tracker = use_viewport_tracker(ctx.tracker_config());

    let on_navigate = {
        let scroller = ctx.scroller();
        use_callback(move |section: Section| navigate_to(scroller.as_ref(), section))
    };

    let state = tracker.scroll_state();
    let progress = progress_style(&state);
    let nav_entries = map_nav_entries(&state);
    let title_index = tracker.title_index();
    let title = content
        .hero
        .titles
        .get(title_index)
        .cloned()
        .unwrap_or_default();
    let cards = map_project_cards(&content.projects);
    let footer = footer_line(ctx.clock().current_year(), &content.brand);

    rsx! {
        div { id: "portfolio-root", class: "portfolio",
            div { class: "progress-bar", style: "{progress}" }
            NavBar {
                brand: content.brand.clone(),
                entries: nav_entries,
                on_navigate,
            }
            HeroSection {
                hero: content.hero.clone(),
                title,
                title_index,
                revealed: tracker.is_revealed(Section::Hero),
                on_navigate,
            }
            AboutSection {
                about: content.about.clone(),
                revealed: tracker.is_revealed(Section::About),
            }
            ProjectsSection {
                cards,
                revealed: tracker.is_revealed(Section::Projects),
            }
            ContactSection {
                contact: content.contact.clone(),
                mailto: content.mailto(),
                revealed: tracker.is_revealed(Section::Contact),
            }
            Footer { line: footer }
        }
    }
}
