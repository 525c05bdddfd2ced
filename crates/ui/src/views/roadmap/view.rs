use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{map_nav_entries, map_roadmap, map_theme};

use super::actions::{RoadmapIntent, page_key, use_roadmap_dispatcher};
use super::components::{Hero, PhaseCard, ProgressDashboard, ResourceList, SiteHeader};
use super::scripts::SCROLL_ROOT_ID;
use super::state::{RoadmapServices, use_roadmap_state};

#[component]
pub fn RoadmapView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = RoadmapServices::from_context(&ctx);
    let state = use_roadmap_state(&services);
    let dispatch = use_roadmap_dispatcher(state, &services);

    use_effect(move || dispatch.call(RoadmapIntent::RefreshActive));

    let roadmap = services.roadmap;
    let theme = map_theme(state.current_theme());
    let data_theme = theme.data_theme;
    let nav_entries = map_nav_entries(&roadmap, state.active_section.read().as_ref());
    let checklist = state.checklist.read();
    let dashboard = checklist.dashboard();
    let page = map_roadmap(&roadmap, &state.registry.read(), &checklist);
    let save_error = (state.save_error)();
    let has_hero = !roadmap.title.is_empty();

    rsx! {
        div {
            class: "roadmap-root",
            tabindex: "-1",
            autofocus: true,
            "data-theme": data_theme,
            onkeydown: move |evt: KeyboardEvent| {
                page_key(&evt.key(), evt.modifiers()).apply(dispatch, &evt);
            },
            SiteHeader {
                title: roadmap.title.clone(),
                entries: nav_entries,
                theme,
                dispatch,
            }
            main {
                id: SCROLL_ROOT_ID,
                class: "page-scroll",
                onscroll: move |_| dispatch.call(RoadmapIntent::Scrolled),
                if has_hero {
                    Hero { title: roadmap.title.clone(), tagline: roadmap.tagline.clone() }
                    ProgressDashboard { dashboard, error: save_error, dispatch }
                }
                section { id: "roadmap", class: "roadmap container",
                    for phase in page.phases {
                        PhaseCard { key: "{phase.id}", phase, dispatch }
                    }
                }
                ResourceList { groups: page.resources, dispatch }
            }
        }
    }
}
