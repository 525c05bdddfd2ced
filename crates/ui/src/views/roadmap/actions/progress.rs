use std::sync::Arc;

use dioxus::prelude::*;

use crate::views::ViewError;
use crate::vm::persist_toggle;

use super::super::state::{RoadmapServices, RoadmapState};

pub(super) fn toggle_item(
    state: RoadmapState,
    services: &RoadmapServices,
    index: usize,
    checked: bool,
) {
    let mut checklist = state.checklist;
    let Some(id) = checklist.write().apply(index, checked) else {
        return;
    };
    tracing::debug!(item = %id, checked, "checklist item toggled");

    let store = Arc::clone(&services.progress);
    let mut save_error = state.save_error;
    spawn(async move {
        match persist_toggle(&store, &id, checked).await {
            Ok(()) => save_error.set(None),
            Err(err) => save_error.set(Some(err)),
        }
    });
}

pub(super) fn reset_progress(state: RoadmapState, services: &RoadmapServices) {
    let mut checklist = state.checklist;
    let changed = checklist.write().clear();
    tracing::debug!(changed, "checklist reset");

    let store = Arc::clone(&services.progress);
    let mut save_error = state.save_error;
    spawn(async move {
        match store.reset().await {
            Ok(()) => save_error.set(None),
            Err(_) => save_error.set(Some(ViewError::Storage)),
        }
    });
}
