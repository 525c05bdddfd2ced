use std::sync::Arc;

use tokio::sync::Mutex;

use roadmap_core::model::Theme;
use storage::repository::KeyValueStore;

use crate::error::ThemeServiceError;

/// Reads and writes the persisted display mode.
#[derive(Clone)]
pub struct ThemeService {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    write_lock: Arc<Mutex<()>>,
}

impl ThemeService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            write_lock: Arc::default(),
        }
    }

    /// Load the saved theme, falling back to dark when nothing usable is stored.
    pub async fn load(&self) -> Theme {
        match self.kv.get(&self.key).await {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
                tracing::warn!(key = %self.key, error = %err, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "theme storage unreadable");
                Theme::default()
            }
        }
    }

    /// Saves land in call order.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` if persistence fails.
    pub async fn save(&self, theme: Theme) -> Result<(), ThemeServiceError> {
        let _writing = self.write_lock.lock().await;
        self.kv.set(&self.key, theme.as_str()).await?;
        tracing::debug!(%theme, "theme saved");
        Ok(())
    }
}
