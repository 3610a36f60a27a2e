//! Installed version resolution
//!
//! Build metadata wins; otherwise the nearest `Cargo.toml` above a starting
//! directory is read for its `[package] version`.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::domain::error::VersionError;

/// Version recorded by cargo at build time, if any
pub const BUILD_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Manifest file searched for when build metadata is missing
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Resolve the installed version.
///
/// # Arguments
/// * `build_version` - Version from build metadata, usually [`BUILD_VERSION`]
/// * `search_from` - Directory where the manifest search starts; parents are tried in turn
pub fn resolve_version(
    build_version: Option<&str>,
    search_from: &Path,
) -> Result<String, VersionError> {
    if let Some(version) = build_version.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(version.to_string());
    }

    debug!(
        "No build metadata version, searching for {} from {}",
        MANIFEST_FILE,
        search_from.display()
    );

    for dir in search_from.ancestors() {
        let manifest = dir.join(MANIFEST_FILE);
        if !manifest.is_file() {
            continue;
        }
        match read_manifest_version(&manifest) {
            Ok(version) => return Ok(version),
            Err(e) => warn!("Skipping manifest: {}", e),
        }
    }

    Err(VersionError::Unknown(search_from.display().to_string()))
}

/// Read `[package] version` from a manifest file
pub fn read_manifest_version(path: &Path) -> Result<String, VersionError> {
    let content = fs::read_to_string(path).map_err(|e| VersionError::ManifestRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_manifest_version(&content).map_err(|e| match e {
        ManifestIssue::Parse(message) => VersionError::ManifestRead {
            path: path.display().to_string(),
            message,
        },
        ManifestIssue::MissingField => VersionError::MissingField {
            path: path.display().to_string(),
        },
    })
}

enum ManifestIssue {
    Parse(String),
    MissingField,
}

fn parse_manifest_version(content: &str) -> Result<String, ManifestIssue> {
    let manifest: toml::Table =
        toml::from_str(content).map_err(|e| ManifestIssue::Parse(e.to_string()))?;

    // `version.workspace = true` is a table, not a string, and counts as missing
    manifest
        .get("package")
        .and_then(|package| package.get("version"))
        .and_then(|version| version.as_str())
        .map(str::to_string)
        .ok_or(ManifestIssue::MissingField)
}
