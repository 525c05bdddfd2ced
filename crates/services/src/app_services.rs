use std::sync::Arc;

use roadmap_core::model::Roadmap;
use roadmap_core::{Clock, PageConfig};
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::progress_store::{LoadOutcome, ProgressStore};
use crate::theme_service::ThemeService;

/// Page controller: built once at startup and owns every stateful service.
#[derive(Clone)]
pub struct AppServices {
    config: PageConfig,
    roadmap: Arc<Roadmap>,
    progress: Arc<ProgressStore>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    /// Wire services over an existing storage handle and restore progress.
    pub async fn new(storage: &Storage, roadmap: Roadmap, config: PageConfig) -> Self {
        let progress = Arc::new(ProgressStore::new(
            Arc::clone(&storage.kv),
            config.storage_keys.progress.clone(),
        ));
        let outcome = progress.load().await;
        if let LoadOutcome::Restored(count) = outcome {
            tracing::info!(count, "restored checklist progress");
        }
        let theme = Arc::new(ThemeService::new(
            Arc::clone(&storage.kv),
            config.storage_keys.theme.clone(),
        ));

        Self {
            config,
            roadmap: Arc::new(roadmap),
            progress,
            theme,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        roadmap: Roadmap,
        config: PageConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url, clock).await?;
        Ok(Self::new(&storage, roadmap, config).await)
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
