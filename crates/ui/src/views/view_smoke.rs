use portfolio_core::model::{PortfolioContent, ProjectCard, Section};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_content};

fn active_nav_label(html: &str) -> Option<&str> {
    let after = html.split("nav-link active").nth(1)?;
    let button = after.split("</button>").next()?;
    button.rsplit('>').next()
}

#[tokio::test(flavor = "current_thread")]
async fn page_smoke_starts_on_hero() {
    let mut harness = setup_view_harness(ViewKind::Page);
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("nav-link active").count(), 1, "in {html}");
    assert_eq!(active_nav_label(&html), Some("home"));
    assert!(html.contains("width: 0.00%;"), "missing empty progress bar in {html}");
    for label in ["about", "projects", "contact"] {
        assert!(html.contains(&format!(">{label}</button>")), "missing nav {label} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn page_smoke_renders_every_section() {
    let mut harness = setup_view_harness(ViewKind::Page);
    harness.rebuild();
    let html = harness.render();

    for id in ["hero", "about", "projects", "contact"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id} in {html}");
    }
    assert!(html.contains("Crafting digital experiences that make a difference"));
    assert!(html.contains("Full Stack Developer"));
    assert!(html.contains("Featured Projects"));
    for title in ["E-Commerce Platform", "AI Task Manager", "Blockchain Explorer"] {
        assert!(html.contains(title), "missing project {title} in {html}");
    }
    assert!(html.contains("PostgreSQL"));
    assert!(html.contains("mailto:contact@example.com"));
    assert!(html.contains("© 2023 DevPortfolio. All rights reserved."));
}

#[tokio::test(flavor = "current_thread")]
async fn page_smoke_hides_observed_sections_until_revealed() {
    let mut harness = setup_view_harness(ViewKind::Page);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("about band section-hidden"), "in {html}");
    assert!(html.contains("projects section-hidden"), "in {html}");
    assert!(html.contains("contact band section-hidden"), "in {html}");
    assert!(!html.contains("section-visible"), "in {html}");
    assert!(html.contains("hero-tagline animate-fade-in-up"), "hero should animate in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn page_smoke_without_document_keeps_initial_state() {
    let mut harness = setup_view_harness(ViewKind::Page);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert_eq!(active_nav_label(&html), Some("home"));
    assert!(harness.scroller.sections().is_empty());
    assert!(harness.scroller.horizontal().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn page_smoke_clicks_issue_one_scroll_command_each() {
    let mut harness = setup_view_harness(ViewKind::Page);
    harness.rebuild_tracking_ids();

    harness.click("nav-projects");
    assert_eq!(harness.scroller.sections(), [Section::Projects]);

    harness.click("hero-contact");
    assert_eq!(
        harness.scroller.sections(),
        [Section::Projects, Section::Contact]
    );
    assert!(harness.scroller.horizontal().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn page_smoke_renders_custom_content() {
    let mut content = PortfolioContent::default();
    content.brand = "Jane Doe".into();
    content.hero.titles = vec!["Systems".into()];
    content.projects = vec![
        ProjectCard::new("Tiny Kernel", "A toy OS", "https://example.com/k.png", ["Rust"])
            .unwrap(),
    ];
    content.contact.links.clear();

    let mut harness = setup_view_harness_with_content(ViewKind::Page, content);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Jane Doe"), "missing brand in {html}");
    assert!(html.contains("Systems"), "missing title in {html}");
    assert!(html.contains("Tiny Kernel"), "missing project in {html}");
    assert!(!html.contains("E-Commerce Platform"), "stale project in {html}");
    assert!(!html.contains("social-link"), "unexpected links in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_smoke_links_home() {
    let segments = vec!["missing".to_string(), "page".to_string()];
    let mut harness = setup_view_harness(ViewKind::NotFound(segments));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Page not found"), "missing title in {html}");
    assert!(html.contains("Nothing lives at"), "missing message in {html}");
    assert!(html.contains("missing") && html.contains("page"), "missing path in {html}");
    assert!(html.contains("Back to the portfolio"), "missing link in {html}");
}
