//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard operations and trait definitions
//! for external system interactions.

pub mod accessor;
pub mod ports;
pub mod version;

// Re-export use cases
pub use accessor::{format_types, ClipboardAccessor, Connector, SnapshotGuard};
pub use version::{resolve_version, BUILD_VERSION};
