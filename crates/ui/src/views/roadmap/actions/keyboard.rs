use dioxus::prelude::*;
use roadmap_core::model::SectionId;

use crate::vm::{bulk_shortcut, is_activation_key};

use super::intent::RoadmapIntent;

/// What one handler does with the DOM event it receives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventResponse {
    pub intent: Option<RoadmapIntent>,
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    pub fn apply<T: 'static>(self, dispatch: Callback<RoadmapIntent>, evt: &Event<T>) {
        if self.prevent_default {
            evt.prevent_default();
        }
        if self.stop_propagation {
            evt.stop_propagation();
        }
        if let Some(intent) = self.intent {
            dispatch.call(intent);
        }
    }
}

/// Bulk shortcuts on the page root.
#[must_use]
pub fn page_key(key: &Key, modifiers: Modifiers) -> EventResponse {
    match bulk_shortcut(key, modifiers) {
        Some(command) => EventResponse {
            intent: Some(RoadmapIntent::Bulk(command)),
            prevent_default: true,
            stop_propagation: false,
        },
        None => EventResponse::default(),
    }
}

/// Enter/Space on a focused header toggles it and goes no further.
#[must_use]
pub fn header_key(key: &Key, section: SectionId) -> EventResponse {
    if !is_activation_key(key) {
        return EventResponse::default();
    }
    EventResponse {
        intent: Some(RoadmapIntent::ToggleSection(section)),
        prevent_default: true,
        stop_propagation: true,
    }
}

/// Nested headers stop the click so an enclosing card never sees it.
#[must_use]
pub fn header_click(section: SectionId, nested: bool) -> EventResponse {
    EventResponse {
        intent: Some(RoadmapIntent::ToggleSection(section)),
        prevent_default: false,
        stop_propagation: nested,
    }
}

/// Keys typed into a checkbox stay there; page shortcuts do not fire.
#[must_use]
pub fn checkbox_key() -> EventResponse {
    EventResponse {
        intent: None,
        prevent_default: false,
        stop_propagation: true,
    }
}
