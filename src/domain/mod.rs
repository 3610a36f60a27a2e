//! Domain layer - Core value objects
//!
//! Contains clipboard value objects, configuration, and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;

// Re-export common types
pub use clipboard::{ClipboardSnapshot, ContentType};
pub use config::AppConfig;
pub use error::*;
