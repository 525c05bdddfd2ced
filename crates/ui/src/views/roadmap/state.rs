use std::sync::Arc;

use dioxus::prelude::*;
use roadmap_core::PageConfig;
use roadmap_core::model::{Debounce, DisclosureRegistry, Roadmap, ScrollSpy, SectionId, Theme};
use services::{ProgressStore, ThemeService};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::ChecklistVm;

#[derive(Clone)]
pub struct RoadmapServices {
    pub config: PageConfig,
    pub roadmap: Arc<Roadmap>,
    pub progress: Arc<ProgressStore>,
    pub theme: Arc<ThemeService>,
}

impl RoadmapServices {
    #[must_use]
    pub fn from_context(ctx: &AppContext) -> Self {
        Self {
            config: ctx.config().clone(),
            roadmap: ctx.roadmap(),
            progress: ctx.progress(),
            theme: ctx.theme(),
        }
    }

    #[must_use]
    pub fn scroll_spy(&self) -> ScrollSpy {
        ScrollSpy::new(self.config.scroll_lookahead)
    }
}

#[derive(Clone, Copy)]
pub struct RoadmapState {
    pub registry: Signal<DisclosureRegistry>,
    pub checklist: Signal<ChecklistVm>,
    pub active_section: Signal<Option<SectionId>>,
    pub scroll_debounce: Signal<Debounce>,
    pub save_error: Signal<Option<ViewError>>,
    pub theme_override: Signal<Option<Theme>>,
    pub theme_resource: Resource<Result<Theme, ViewError>>,
}

impl RoadmapState {
    /// Theme after any toggle this session, else the persisted one.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        if let Some(theme) = (self.theme_override)() {
            return theme;
        }
        match view_state_from_resource(&self.theme_resource) {
            ViewState::Ready(theme) => theme,
            _ => Theme::default(),
        }
    }
}

pub fn use_roadmap_state(services: &RoadmapServices) -> RoadmapState {
    let registry = {
        let roadmap = Arc::clone(&services.roadmap);
        use_signal(move || roadmap.disclosure_registry())
    };
    let checklist = {
        let roadmap = Arc::clone(&services.roadmap);
        let progress = Arc::clone(&services.progress);
        use_signal(move || ChecklistVm::bind(&roadmap.trackable_items(), &progress))
    };
    let active_section = use_signal(|| None::<SectionId>);
    let scroll_debounce = use_signal(Debounce::default);
    let save_error = use_signal(|| None::<ViewError>);
    let theme_override = use_signal(|| None::<Theme>);

    let theme_service = Arc::clone(&services.theme);
    let theme_resource = use_resource(move || {
        let theme_service = Arc::clone(&theme_service);
        async move { Ok::<_, ViewError>(theme_service.load().await) }
    });

    RoadmapState {
        registry,
        checklist,
        active_section,
        scroll_debounce,
        save_error,
        theme_override,
        theme_resource,
    }
}
