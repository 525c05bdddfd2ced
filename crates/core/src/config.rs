//! Page-level tunables shared by the services and the UI.

use std::time::Duration;

/// Storage keys for the two persisted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub progress: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            progress: "cyberRoadmapProgress".to_string(),
            theme: "cyberMapTheme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Height of the fixed header plus breathing room, subtracted from
    /// scroll targets so a section does not land underneath the header.
    pub header_offset: f64,
    /// Distance above a section's top at which it already counts as current.
    pub scroll_lookahead: f64,
    pub scroll_debounce: Duration,
    pub storage_keys: StorageKeys,
}

impl PageConfig {
    pub const DEFAULT_HEADER_OFFSET: f64 = 120.0;
    pub const DEFAULT_SCROLL_LOOKAHEAD: f64 = 200.0;
    pub const DEFAULT_SCROLL_DEBOUNCE: Duration = Duration::from_millis(50);

    #[must_use]
    pub fn with_storage_keys(mut self, keys: StorageKeys) -> Self {
        self.storage_keys = keys;
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset: Self::DEFAULT_HEADER_OFFSET,
            scroll_lookahead: Self::DEFAULT_SCROLL_LOOKAHEAD,
            scroll_debounce: Self::DEFAULT_SCROLL_DEBOUNCE,
            storage_keys: StorageKeys::default(),
        }
    }
}
