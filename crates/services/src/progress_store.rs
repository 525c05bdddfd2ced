use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;

use roadmap_core::model::{ItemId, ProgressParseError, ProgressRecord};
use storage::repository::{KeyValueStore, StorageError};

use crate::error::ProgressStoreError;

/// What `ProgressStore::load` found in storage.
///
/// Every variant leaves the store usable; the non-`Restored` ones describe
/// why it started empty.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing persisted under the key.
    Fresh,
    /// A record with this many completed ids was restored.
    Restored(usize),
    /// The persisted value did not parse and was replaced by an empty record.
    Recovered(ProgressParseError),
    /// The backend could not be read; starting empty.
    Unreadable(StorageError),
}

/// Owns the completed-item mapping and writes it back after every change.
///
/// Writes are serialized: a mutation and its write-back happen under one
/// lock, so the persisted mapping always matches the latest mutation.
pub struct ProgressStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    record: RwLock<ProgressRecord>,
    write_lock: Mutex<()>,
}

impl ProgressStore {
    /// Create an empty store; call [`ProgressStore::load`] to restore state.
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            record: RwLock::new(ProgressRecord::new()),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the in-memory snapshot with the persisted record.
    ///
    /// Never fails: missing, unreadable or malformed data yields an empty
    /// snapshot and the reason is reported in the outcome.
    pub async fn load(&self) -> LoadOutcome {
        let (record, outcome) = match self.kv.get(&self.key).await {
            Ok(None) => (ProgressRecord::new(), LoadOutcome::Fresh),
            Ok(Some(raw)) => match ProgressRecord::from_json(&raw) {
                Ok(record) => {
                    let count = record.len();
                    (record, LoadOutcome::Restored(count))
                }
                Err(err) => {
                    tracing::warn!(key = %self.key, error = %err, "discarding unparsable progress");
                    (ProgressRecord::new(), LoadOutcome::Recovered(err))
                }
            },
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "progress storage unreadable");
                (ProgressRecord::new(), LoadOutcome::Unreadable(err))
            }
        };

        match self.record.write() {
            Ok(mut guard) => *guard = record,
            Err(poisoned) => *poisoned.into_inner() = record,
        }
        tracing::debug!(key = %self.key, ?outcome, "progress loaded");
        outcome
    }

    #[must_use]
    pub fn is_complete(&self, id: &ItemId) -> bool {
        self.record
            .read()
            .map(|record| record.contains(id))
            .unwrap_or(false)
    }

    /// Number of ids currently marked complete.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.record.read().map(|record| record.len()).unwrap_or(0)
    }

    /// Mark `id` complete (`true`) or not (`false`), then persist the whole
    /// mapping. Returns whether the snapshot changed.
    ///
    /// The write happens even when nothing changed. On a write failure the
    /// in-memory change is kept.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError::Storage` if the write fails.
    pub async fn set_complete(&self, id: &ItemId, value: bool) -> Result<bool, ProgressStoreError> {
        let _writing = self.write_lock.lock().await;
        let (changed, payload) = {
            let mut record = self
                .record
                .write()
                .map_err(|_| ProgressStoreError::Poisoned)?;
            let changed = record.set(id, value);
            (changed, record.to_json())
        };
        tracing::debug!(item = %id, value, changed, "progress updated");
        self.persist(&payload).await?;
        Ok(changed)
    }

    /// Forget every completed item and persist the empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError::Storage` if the write fails.
    pub async fn reset(&self) -> Result<(), ProgressStoreError> {
        let _writing = self.write_lock.lock().await;
        let payload = {
            let mut record = self
                .record
                .write()
                .map_err(|_| ProgressStoreError::Poisoned)?;
            record.clear();
            record.to_json()
        };
        self.persist(&payload).await
    }

    async fn persist(&self, payload: &str) -> Result<(), ProgressStoreError> {
        self.kv.set(&self.key, payload).await.map_err(|err| {
            tracing::error!(key = %self.key, error = %err, "failed to persist progress");
            ProgressStoreError::from(err)
        })
    }
}
