//! Pasteboard - command-line access to the system clipboard
//!
//! This crate reads the current clipboard content and type list, writes
//! plain text, and clears the clipboard.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Content types, snapshots, configuration, and errors
//! - **Application**: The clipboard accessor and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (NSPasteboard, arboard, config file)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
