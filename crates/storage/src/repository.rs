use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String-keyed, string-valued persistence in the shape of browser local
/// storage. Writes overwrite the whole value for a key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and prototyping.
///
/// An optional byte quota (sum of key and value lengths) makes writes fail
/// the way a full browser store does.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(limit),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if let Some(limit) = self.quota {
            let others: usize = guard
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Backend handle shared by every service on the page.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_store(store: impl KeyValueStore + 'static) -> Self {
        Self {
            kv: Arc::new(store),
        }
    }
}
