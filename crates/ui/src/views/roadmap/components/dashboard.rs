use dioxus::prelude::*;

use crate::views::ViewError;
use crate::vm::DashboardVm;

use super::super::actions::RoadmapIntent;

#[component]
pub fn Hero(title: String, tagline: String) -> Element {
    rsx! {
        section { class: "hero container",
            h1 { class: "hero-title", "{title}" }
            if !tagline.is_empty() {
                p { class: "hero-tagline", "{tagline}" }
            }
        }
    }
}

#[component]
pub fn ProgressDashboard(
    dashboard: DashboardVm,
    error: Option<ViewError>,
    dispatch: Callback<RoadmapIntent>,
) -> Element {
    rsx! {
        section { class: "container progress-header",
            div { class: "progress-title", "Your Progress" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: dashboard.bar_style() }
            }
            span { class: dashboard.text_class(), "{dashboard.label}" }
            button {
                class: "progress-reset",
                r#type: "button",
                onclick: move |_| dispatch.call(RoadmapIntent::ResetProgress),
                "Reset progress"
            }
            if let Some(err) = error {
                p { class: "progress-error", role: "alert", "{err.message()}" }
            }
        }
    }
}
