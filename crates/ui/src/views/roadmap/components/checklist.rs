use dioxus::prelude::*;

use crate::vm::ChecklistItemVm;

use super::super::actions::{RoadmapIntent, checkbox_key};

/// Items of one accordion or resource group; `first_index` is the
/// document-order index of the first entry.
#[component]
pub fn Checklist(
    items: Vec<ChecklistItemVm>,
    first_index: usize,
    dispatch: Callback<RoadmapIntent>,
) -> Element {
    rsx! {
        ul { class: "checklist",
            for (offset, item) in items.into_iter().enumerate() {
                ChecklistEntry { index: first_index + offset, item, dispatch }
            }
        }
    }
}

#[component]
fn ChecklistEntry(index: usize, item: ChecklistItemVm, dispatch: Callback<RoadmapIntent>) -> Element {
    let completed = item.completed;
    rsx! {
        li { class: item.class(),
            label {
                input {
                    class: "tracker-checkbox",
                    r#type: "checkbox",
                    checked: completed,
                    onchange: move |_| {
                        dispatch.call(RoadmapIntent::ToggleItem { index, checked: !completed });
                    },
                    onkeydown: move |evt: KeyboardEvent| checkbox_key().apply(dispatch, &evt),
                }
                span { class: "tracker-text", "{item.text}" }
            }
        }
    }
}
