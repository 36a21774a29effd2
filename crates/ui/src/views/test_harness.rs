use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dioxus::core::{AttributeValue, ElementId, Mutation, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{
    PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData, set_event_converter,
};
use dioxus_router::{Routable, Router};
use portfolio_core::Clock;
use portfolio_core::model::{PortfolioContent, Section};
use portfolio_core::time::fixed_clock;
use portfolio_core::viewport::TrackerConfig;

use crate::context::{UiApp, build_app_context};
use crate::platform::{ScrollerRef, UiScroller};
use crate::views::{NotFoundView, PortfolioPage};

/// Scroller that records commands instead of touching a document.
#[derive(Default)]
pub struct RecordingScroller {
    sections: Mutex<Vec<Section>>,
    horizontal: Mutex<Vec<(String, f64)>>,
}

impl RecordingScroller {
    pub fn sections(&self) -> Vec<Section> {
        self.sections.lock().unwrap().clone()
    }

    pub fn horizontal(&self) -> Vec<(String, f64)> {
        self.horizontal.lock().unwrap().clone()
    }
}

impl UiScroller for RecordingScroller {
    fn scroll_to_section(&self, section: Section) {
        self.sections.lock().unwrap().push(section);
    }

    fn scroll_horizontally(&self, element_id: &str, delta: f64) {
        self.horizontal
            .lock()
            .unwrap()
            .push((element_id.to_string(), delta));
    }
}

#[derive(Clone)]
struct TestApp {
    content: Arc<PortfolioContent>,
    clock: Clock,
    scroller: Arc<RecordingScroller>,
}

impl UiApp for TestApp {
    fn content(&self) -> Arc<PortfolioContent> {
        Arc::clone(&self.content)
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig::default()
    }

    fn scroller(&self) -> ScrollerRef {
        self.scroller.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Page,
    NotFound(Vec<String>),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Page => rsx! { PortfolioPage {} },
        ViewKind::NotFound(segments) => rsx! { NotFoundView { segments } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub scroller: Arc<RecordingScroller>,
    element_ids: HashMap<String, ElementId>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Rebuild while remembering which runtime element carries each dynamic
    /// `id` attribute, so events can be dispatched by DOM id.
    pub fn rebuild_tracking_ids(&mut self) {
        let mutations = self.dom.rebuild_to_vec();
        for edit in &mutations.edits {
            if let Mutation::SetAttribute {
                name,
                value: AttributeValue::Text(value),
                id,
                ..
            } = edit
            {
                if *name == "id" {
                    self.element_ids.insert(value.clone(), *id);
                }
            }
        }
        drive_dom(&mut self.dom);
    }

    pub fn click(&mut self, dom_id: &str) {
        let element = *self
            .element_ids
            .get(dom_id)
            .unwrap_or_else(|| panic!("no element with id {dom_id}"));
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(
            Box::<SerializedMouseData>::default(),
        ));
        self.dom
            .runtime()
            .handle_event("click", Event::new(data, true), element);
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_content(view, PortfolioContent::default())
}

pub fn setup_view_harness_with_content(view: ViewKind, content: PortfolioContent) -> ViewHarness {
    let scroller = Arc::new(RecordingScroller::default());
    let app = Arc::new(TestApp {
        content: Arc::new(content),
        clock: fixed_clock(),
        scroller: Arc::clone(&scroller),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        scroller,
        element_ids: HashMap::new(),
    }
}
