use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use roadmap_core::PageConfig;
use roadmap_core::model::Roadmap;
use services::AppServices;
use storage::repository::Storage;

use super::actions::{EventResponse, RoadmapIntent, use_roadmap_dispatcher};
use super::state::{RoadmapServices, RoadmapState, use_roadmap_state};

const SETTLE_ROUNDS: usize = 16;

#[derive(Clone, Default)]
pub struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<RoadmapIntent>>>>,
    state: Rc<RefCell<Option<RoadmapState>>>,
}

impl HarnessHandles {
    pub fn dispatch(&self) -> Callback<RoadmapIntent> {
        self.dispatch
            .borrow()
            .clone()
            .expect("dispatch registered")
    }

    pub fn state(&self) -> RoadmapState {
        (*self.state.borrow()).expect("state registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    services: RoadmapServices,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn RoadmapIntentHarness(props: HarnessProps) -> Element {
    let state = use_roadmap_state(&props.services);
    let dispatch = use_roadmap_dispatcher(state, &props.services);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(dispatch);
        *props.handles.state.borrow_mut() = Some(state);
    }
    rsx! { div {} }
}

pub struct RoadmapHarness {
    pub dom: VirtualDom,
    pub services: RoadmapServices,
    pub storage: Storage,
    handles: HarnessHandles,
}

impl RoadmapHarness {
    pub fn state(&self) -> RoadmapState {
        self.handles.state()
    }

    /// Dispatch one intent and let any spawned work finish.
    pub async fn send(&mut self, intent: RoadmapIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.settle().await;
    }

    /// Dispatch several intents back to back before anything settles.
    pub async fn send_many(&mut self, intents: impl IntoIterator<Item = RoadmapIntent>) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| {
            for intent in intents {
                dispatch.call(intent);
            }
        });
        self.settle().await;
    }

    /// Run queued tasks until the dom goes idle.
    pub async fn settle(&mut self) {
        drive_dom(&mut self.dom);
        for _ in 0..SETTLE_ROUNDS {
            let idle = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work())
                .await
                .is_err();
            drive_dom(&mut self.dom);
            if idle {
                break;
            }
        }
    }

    /// Read reactive state from inside the runtime.
    pub fn read<T>(&self, f: impl FnOnce(RoadmapState) -> T) -> T {
        let state = self.state();
        self.dom.in_runtime(|| f(state))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Intents a DOM event produces on its way up from the innermost
/// handler, ending at the first one that stops propagation.
pub fn bubble(path: impl IntoIterator<Item = EventResponse>) -> Vec<RoadmapIntent> {
    let mut intents = Vec::new();
    for response in path {
        let stop = response.stop_propagation;
        intents.extend(response.intent);
        if stop {
            break;
        }
    }
    intents
}

pub async fn setup_roadmap_harness(storage: Storage) -> RoadmapHarness {
    setup_roadmap_harness_with(Roadmap::builtin(), storage).await
}

pub async fn setup_roadmap_harness_with(roadmap: Roadmap, storage: Storage) -> RoadmapHarness {
    let app = AppServices::new(&storage, roadmap, PageConfig::default()).await;
    let services = RoadmapServices {
        config: app.config().clone(),
        roadmap: app.roadmap(),
        progress: app.progress(),
        theme: app.theme(),
    };
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        RoadmapIntentHarness,
        HarnessProps {
            services: services.clone(),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    RoadmapHarness {
        dom,
        services,
        storage,
        handles,
    }
}
