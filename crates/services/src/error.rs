//! Shared error types for the services crate.

use thiserror::Error;

use roadmap_core::model::RoadmapError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressStore` writes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressStoreError {
    #[error("progress snapshot lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ThemeService` writes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while reading roadmap content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Roadmap(#[from] RoadmapError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
