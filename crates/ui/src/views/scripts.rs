use portfolio_core::model::Section;
use portfolio_core::viewport::TrackerConfig;

/// Installs the scroll listener, the entrance observer and the title timer.
///
/// Every browser event is forwarded over the eval channel as one JSON message
/// (`scroll`, `visible` or `tick`). Re-installing first tears down any
/// previous instance.
pub(super) fn tracker_install_script(config: &TrackerConfig) -> String {
    let sections = js_id_list(&Section::ALL);
    let observed = js_id_list(&Section::OBSERVED);
    let threshold = config.reveal_threshold;
    let interval_ms = config.title_interval.as_millis();

    format!(
        r#"
        const previous = window.__portfolioTracker;
        if (previous) {{ previous.teardown(); }}

        const sections = {sections};
        const observed = {observed};
        const measure = () => ({{
            metrics: {{
                offset: window.scrollY,
                document_height: document.documentElement.scrollHeight,
                viewport_height: window.innerHeight,
            }},
            rects: sections
                .map((id) => {{
                    const el = document.getElementById(id);
                    if (!el) {{ return null; }}
                    const rect = el.getBoundingClientRect();
                    return [id, {{ top: rect.top, bottom: rect.bottom }}];
                }})
                .filter(Boolean),
        }});
        const onScroll = () => {{
            dioxus.send({{ kind: "scroll", layout: measure() }});
        }};

        const observer = new IntersectionObserver((entries) => {{
            entries.forEach((entry) => {{
                dioxus.send({{
                    kind: "visible",
                    entry: {{
                        section: entry.target.id,
                        intersecting: entry.isIntersecting,
                        ratio: entry.intersectionRatio,
                    }},
                }});
            }});
        }}, {{ root: null, rootMargin: "0px", threshold: {threshold} }});
        observed.forEach((id) => {{
            const el = document.getElementById(id);
            if (el) {{ observer.observe(el); }}
        }});

        const timer = setInterval(() => {{
            dioxus.send({{ kind: "tick" }});
        }}, {interval_ms});

        window.addEventListener("scroll", onScroll, {{ passive: true }});
        window.__portfolioTracker = {{
            teardown: () => {{
                window.removeEventListener("scroll", onScroll);
                observer.disconnect();
                clearInterval(timer);
                window.__portfolioTracker = null;
            }},
        }};
        requestAnimationFrame(onScroll);
        "#
    )
}

pub(super) const TRACKER_TEARDOWN_SCRIPT: &str = r#"
    const tracker = window.__portfolioTracker;
    if (tracker) { tracker.teardown(); }
"#;

fn js_id_list(sections: &[Section]) -> String {
    let ids: Vec<String> = sections
        .iter()
        .map(|section| format!("{:?}", section.id()))
        .collect();
    format!("[{}]", ids.join(", "))
}
