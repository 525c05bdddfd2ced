use dioxus::prelude::*;

use crate::vm::{AccordionVm, PhaseCardVm, accordion_class, expand_icon, phase_card_class};

use super::super::actions::{RoadmapIntent, header_click, header_key};
use super::checklist::Checklist;

#[component]
pub fn PhaseCard(phase: PhaseCardVm, dispatch: Callback<RoadmapIntent>) -> Element {
    let click_id = phase.id.clone();
    let key_id = phase.id.clone();
    let number = format!("{:02}", phase.number);
    rsx! {
        article {
            id: "{phase.id}",
            class: phase_card_class(phase.state),
            style: "--phase-accent: {phase.accent};",
            "data-spy-section": "true",
            div {
                class: "phase-header",
                role: "button",
                tabindex: "0",
                aria_expanded: phase.state.aria_expanded(),
                onclick: move |evt: MouseEvent| {
                    header_click(click_id.clone(), false).apply(dispatch, &evt);
                },
                onkeydown: move |evt: KeyboardEvent| {
                    header_key(&evt.key(), key_id.clone()).apply(dispatch, &evt);
                },
                span { class: "phase-number", "{number}" }
                div { class: "phase-heading",
                    h2 { class: "phase-title", "{phase.title}" }
                    if !phase.duration.is_empty() {
                        span { class: "phase-duration", "{phase.duration}" }
                    }
                }
                span { class: "expand-icon", "{expand_icon(phase.state)}" }
            }
            div { class: "phase-content",
                if !phase.summary.is_empty() {
                    p { class: "phase-summary", "{phase.summary}" }
                }
                for accordion in phase.accordions {
                    AccordionSection { key: "{accordion.id}", accordion, dispatch }
                }
            }
        }
    }
}

#[component]
fn AccordionSection(accordion: AccordionVm, dispatch: Callback<RoadmapIntent>) -> Element {
    let click_id = accordion.id.clone();
    let key_id = accordion.id.clone();
    rsx! {
        div { id: "{accordion.id}", class: accordion_class(accordion.state),
            div {
                class: "accordion-header",
                role: "button",
                tabindex: "0",
                aria_expanded: accordion.state.aria_expanded(),
                onclick: move |evt: MouseEvent| {
                    header_click(click_id.clone(), true).apply(dispatch, &evt);
                },
                onkeydown: move |evt: KeyboardEvent| {
                    header_key(&evt.key(), key_id.clone()).apply(dispatch, &evt);
                },
                h3 { class: "accordion-title", "{accordion.title}" }
                span { class: "expand-icon", "{expand_icon(accordion.state)}" }
            }
            div { class: "accordion-content content-block",
                Checklist {
                    items: accordion.items,
                    first_index: accordion.first_index,
                    dispatch,
                }
            }
        }
    }
}
