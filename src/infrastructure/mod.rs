//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS clipboard and the config file.

pub mod config;
pub mod pasteboard;

// Re-export adapters
pub use config::XdgConfigStore;
pub use pasteboard::{open_system_pasteboard, MemoryPasteboard};
