use dioxus::prelude::*;
use roadmap_core::model::{SectionId, scroll_target};

use crate::vm::BulkDisclosure;

use super::super::scripts::{measure_sections, scroll_to};
use super::super::state::{RoadmapServices, RoadmapState};

pub(super) fn toggle_section(state: RoadmapState, id: &SectionId) {
    let mut sections = state.registry;
    let mut registry = sections.write();
    match registry.activate(id) {
        Some(next) => {
            let kind = registry.kind(id);
            tracing::debug!(section = %id, ?kind, state = ?next, "section toggled");
        }
        None => tracing::debug!(section = %id, "toggle for unknown section ignored"),
    }
}

pub(super) fn navigate(state: RoadmapState, services: &RoadmapServices, id: SectionId) {
    let mut registry = state.registry;
    let Some(expanded) = registry.write().reveal(&id) else {
        tracing::debug!(section = %id, "navigation to unknown section ignored");
        return;
    };
    tracing::debug!(section = %id, expanded, "navigating to section");

    let mut active = state.active_section;
    active.set(Some(id.clone()));

    let header_offset = services.config.header_offset;
    spawn(async move {
        match measure_sections().await {
            Ok(measurement) => {
                if let Some(top) = measurement.top_of(&id) {
                    scroll_to(scroll_target(top, header_offset)).await;
                }
            }
            Err(err) => tracing::debug!(?err, section = %id, "section measurement failed"),
        }
    });
}

pub(super) fn apply_bulk(state: RoadmapState, command: BulkDisclosure) {
    let mut registry = state.registry;
    let changed = match command {
        BulkDisclosure::ExpandAll => registry.write().expand_all(),
        BulkDisclosure::CollapseAll => registry.write().collapse_all(),
    };
    tracing::debug!(?command, changed, "bulk disclosure applied");
}
