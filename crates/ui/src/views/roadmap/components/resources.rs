use dioxus::prelude::*;

use crate::vm::ResourceGroupVm;

use super::super::actions::RoadmapIntent;
use super::checklist::Checklist;

#[component]
pub fn ResourceList(groups: Vec<ResourceGroupVm>, dispatch: Callback<RoadmapIntent>) -> Element {
    if groups.is_empty() {
        return rsx! {};
    }
    rsx! {
        section { id: "resources", class: "resources container",
            h2 { class: "section-title", "Resources" }
            div { class: "resource-grid",
                for group in groups {
                    div { key: "{group.first_index}", class: "resource-card",
                        h3 { "{group.title}" }
                        div { class: "resource-list",
                            Checklist {
                                items: group.items,
                                first_index: group.first_index,
                                dispatch,
                            }
                        }
                    }
                }
            }
        }
    }
}
