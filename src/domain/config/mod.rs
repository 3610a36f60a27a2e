//! Configuration value objects

mod app_config;

pub use app_config::{AppConfig, DEFAULT_LOG_LEVEL, VALID_LOG_LEVELS};
