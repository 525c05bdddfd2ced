use dioxus::prelude::*;

use crate::vm::{NavEntryVm, ThemeVm};

use super::super::actions::RoadmapIntent;

#[component]
pub fn SiteHeader(
    title: String,
    entries: Vec<NavEntryVm>,
    theme: ThemeVm,
    dispatch: Callback<RoadmapIntent>,
) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container header-inner",
                span { class: "logo", "{title}" }
                if !entries.is_empty() {
                    nav { class: "timeline-nav", aria_label: "Roadmap phases",
                        for entry in entries {
                            TimelineStep { key: "{entry.target}", entry, dispatch }
                        }
                    }
                }
                button {
                    class: "theme-toggle",
                    r#type: "button",
                    aria_label: theme.toggle_label,
                    onclick: move |_| dispatch.call(RoadmapIntent::ToggleTheme),
                    span { class: "theme-icon", "{theme.icon}" }
                }
            }
        }
    }
}

#[component]
fn TimelineStep(entry: NavEntryVm, dispatch: Callback<RoadmapIntent>) -> Element {
    let target = entry.target.clone();
    rsx! {
        a {
            class: entry.class(),
            href: "#{entry.target}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                dispatch.call(RoadmapIntent::Navigate(target.clone()));
            },
            span { class: "step-number", style: entry.badge_style(), "{entry.number}" }
            span { class: "step-title", "{entry.title}" }
        }
    }
}
