use std::sync::Arc;

use dioxus::prelude::*;

use super::super::state::{RoadmapServices, RoadmapState};

/// The page flips right away; the save follows in the background.
pub(super) fn toggle_theme(state: RoadmapState, services: &RoadmapServices) {
    let next = state.current_theme().toggled();
    let mut theme = state.theme_override;
    theme.set(Some(next));
    tracing::debug!(theme = %next, "theme toggled");

    let service = Arc::clone(&services.theme);
    spawn(async move {
        if let Err(err) = service.save(next).await {
            tracing::error!(error = %err, "failed to persist theme");
        }
    });
}
