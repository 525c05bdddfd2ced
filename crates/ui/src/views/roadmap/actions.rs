mod disclosure;
mod intent;
mod keyboard;
mod progress;
mod scroll;
mod theme;

use dioxus::prelude::*;

use super::state::{RoadmapServices, RoadmapState};

pub use intent::RoadmapIntent;
pub use keyboard::{EventResponse, checkbox_key, header_click, header_key, page_key};

pub fn use_roadmap_dispatcher(
    state: RoadmapState,
    services: &RoadmapServices,
) -> Callback<RoadmapIntent> {
    let services = services.clone();
    use_callback(move |intent: RoadmapIntent| match intent {
        RoadmapIntent::ToggleSection(id) => disclosure::toggle_section(state, &id),
        RoadmapIntent::Navigate(id) => disclosure::navigate(state, &services, id),
        RoadmapIntent::Bulk(command) => disclosure::apply_bulk(state, command),
        RoadmapIntent::ToggleItem { index, checked } => {
            progress::toggle_item(state, &services, index, checked);
        }
        RoadmapIntent::ResetProgress => progress::reset_progress(state, &services),
        RoadmapIntent::ToggleTheme => theme::toggle_theme(state, &services),
        RoadmapIntent::Scrolled => scroll::on_scrolled(state, &services),
        RoadmapIntent::RefreshActive => scroll::refresh_now(state, &services),
    })
}
