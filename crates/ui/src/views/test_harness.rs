use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use roadmap_core::PageConfig;
use roadmap_core::model::Roadmap;
use services::{AppServices, ProgressStore, ThemeService};
use storage::repository::{KeyValueStore, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::RoadmapView;

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn config(&self) -> PageConfig {
        self.services.config().clone()
    }

    fn roadmap(&self) -> Arc<Roadmap> {
        self.services.roadmap()
    }

    fn progress(&self) -> Arc<ProgressStore> {
        self.services.progress()
    }

    fn theme(&self) -> Arc<ThemeService> {
        self.services.theme()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { RoadmapView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
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

pub async fn setup_view_harness(roadmap: Roadmap) -> ViewHarness {
    setup_view_harness_with_storage(roadmap, Storage::in_memory()).await
}

pub async fn setup_view_harness_with_storage(roadmap: Roadmap, storage: Storage) -> ViewHarness {
    let services = AppServices::new(&storage, roadmap, PageConfig::default()).await;
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app });
    ViewHarness { dom }
}

/// Seed the progress key before the page is built, like a returning visitor.
pub async fn seed_progress(kv: &dyn KeyValueStore, ids: &[&str]) {
    let body = ids
        .iter()
        .map(|id| format!("\"{id}\":true"))
        .collect::<Vec<_>>()
        .join(",");
    kv.set(&PageConfig::default().storage_keys.progress, &format!("{{{body}}}"))
        .await
        .expect("seed progress");
}

/// One phase, two accordions, `Item 1`..`Item 10` with ids `item1`..`item10`.
pub fn ten_item_roadmap() -> Roadmap {
    let items = |range: std::ops::RangeInclusive<u32>| {
        range
            .map(|n| format!("\"Item {n}\""))
            .collect::<Vec<_>>()
            .join(",")
    };
    let raw = format!(
        r#"{{
            "title": "Test Roadmap",
            "phases": [{{
                "id": "phase-1",
                "number": 1,
                "title": "Basics",
                "sections": [
                    {{ "id": "phase-1-a", "title": "Part A", "items": [{}] }},
                    {{ "id": "phase-1-b", "title": "Part B", "items": [{}] }}
                ]
            }}]
        }}"#,
        items(1..=5),
        items(6..=10),
    );
    Roadmap::from_json(&raw).expect("fixture roadmap")
}
