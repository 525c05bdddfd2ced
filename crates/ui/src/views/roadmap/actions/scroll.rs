use dioxus::prelude::*;
use roadmap_core::model::ScrollSpy;

use super::super::scripts::measure_sections;
use super::super::state::{RoadmapServices, RoadmapState};

/// Debounced: only the last scroll event of a burst measures the page.
pub(super) fn on_scrolled(state: RoadmapState, services: &RoadmapServices) {
    let mut debounce = state.scroll_debounce;
    let ticket = debounce.write().schedule();
    let delay = services.config.scroll_debounce;
    let spy = services.scroll_spy();
    spawn(async move {
        tokio::time::sleep(delay).await;
        if !debounce.peek().is_current(ticket) {
            return;
        }
        refresh_active(state, spy).await;
    });
}

pub(super) fn refresh_now(state: RoadmapState, services: &RoadmapServices) {
    let spy = services.scroll_spy();
    spawn(async move { refresh_active(state, spy).await });
}

async fn refresh_active(state: RoadmapState, spy: ScrollSpy) {
    let measurement = match measure_sections().await {
        Ok(measurement) => measurement,
        Err(err) => {
            tracing::debug!(?err, "scroll spy measurement failed");
            return;
        }
    };
    let next = measurement.active(&spy);
    let mut active = state.active_section;
    if *active.peek() != next {
        tracing::debug!(section = ?next, "active section changed");
        active.set(next);
    }
}
