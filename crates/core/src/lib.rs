#![forbid(unsafe_code)]

pub mod config;
pub mod model;
pub mod time;

pub use config::{PageConfig, StorageKeys};
pub use time::Clock;
