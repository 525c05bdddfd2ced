#![forbid(unsafe_code)]

pub mod app_services;
pub mod content;
pub mod error;
pub mod progress_store;
pub mod theme_service;

pub use roadmap_core::{Clock, PageConfig, StorageKeys};

pub use app_services::AppServices;
pub use content::load_roadmap;
pub use error::{AppServicesError, ContentError, ProgressStoreError, ThemeServiceError};
pub use progress_store::{LoadOutcome, ProgressStore};
pub use theme_service::ThemeService;
