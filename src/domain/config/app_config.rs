//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::clipboard::ContentType;

/// Log level used when neither RUST_LOG nor the config file set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `log_level`
pub const VALID_LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Content type used by `clip` and `set` when `--type` is omitted
    pub default_type: Option<String>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            default_type: Some(ContentType::plain_text_id().to_string()),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            default_type: other.default_type.or(self.default_type),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Get default_type as a ContentType, or plain text if not set/blank
    pub fn default_type_or_default(&self) -> ContentType {
        self.default_type
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get log level, or "warn" if not set/invalid
    pub fn log_level_or_default(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|level| VALID_LOG_LEVELS.contains(level))
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
