//! Domain error types

use thiserror::Error;

/// Error when a content type identifier is blank
#[derive(Debug, Clone, Error)]
#[error("Invalid content type: \"{input}\". Expected a non-empty type identifier (e.g., public.utf8-plain-text)")]
pub struct InvalidContentTypeError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// Error when the installed version cannot be determined
#[derive(Debug, Clone, Error)]
pub enum VersionError {
    #[error("Failed to read manifest {path}: {message}")]
    ManifestRead { path: String, message: String },

    #[error("Manifest {path} has no [package] version field")]
    MissingField { path: String },

    #[error("Version unknown: no build metadata and no readable Cargo.toml near {0}")]
    Unknown(String),
}
