use std::sync::Arc;

use roadmap_core::PageConfig;
use roadmap_core::model::Roadmap;
use services::{ProgressStore, ThemeService};

pub trait UiApp: Send + Sync {
    fn config(&self) -> PageConfig;
    fn roadmap(&self) -> Arc<Roadmap>;
    fn progress(&self) -> Arc<ProgressStore>;
    fn theme(&self) -> Arc<ThemeService>;
}

#[derive(Clone)]
pub struct AppContext {
    config: PageConfig,
    roadmap: Arc<Roadmap>,
    progress: Arc<ProgressStore>,
    theme: Arc<ThemeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: app.config(),
            roadmap: app.roadmap(),
            progress: app.progress(),
            theme: app.theme(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn roadmap(&self) -> Arc<Roadmap> {
        Arc::clone(&self.roadmap)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
