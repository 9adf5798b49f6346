//! Upward configuration discovery.
//!
//! The cosmiconfig-style search: walk parent directories from a starting
//! point, probing for a named config file or a designated key inside a
//! `package.json` manifest. Probing is synchronous and happens once per
//! pipeline run.

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use thiserror::Error;
use tracing::{debug, warn};

use htmlvet_linter::RuleSet;

/// Config file names probed at each directory level, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = [".htmlvetrc", ".htmlvetrc.json", "htmlvet.config.json"];

/// Manifest file probed after the named config files.
pub const MANIFEST_FILE: &str = "package.json";

/// Key inside the manifest holding the configuration.
pub const MANIFEST_KEY: &str = "htmlvet";

/// Errors raised when loading a config file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed as configuration.
    #[error("invalid config: {0}")]
    Parse(String),
}

/// Searches upward from `start` for a configuration source.
///
/// At each level the named config files win over the manifest; a manifest
/// only counts when it parses and carries the designated key.
pub fn search(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!("found config {}", candidate.display());
                return Some(candidate);
            }
        }

        let manifest = dir.join(MANIFEST_FILE);
        if manifest.is_file() {
            match parse_value(&manifest) {
                Ok(value) if value.get(MANIFEST_KEY).is_some() => {
                    debug!("found config in manifest {}", manifest.display());
                    return Some(manifest);
                }
                Ok(_) => {}
                Err(e) => warn!("skipping unreadable manifest {}: {}", manifest.display(), e),
            }
        }
    }
    None
}

/// Loads a rules mapping from a config source found by [`search`] or named
/// explicitly.
///
/// Manifests are unwrapped at the designated key; either form may wrap the
/// rules under a `config` field.
pub fn load(path: &Path) -> Result<RuleSet, LoadError> {
    let mut value = parse_value(path)?;

    if path.file_name().is_some_and(|name| name == MANIFEST_FILE) {
        value = value
            .get(MANIFEST_KEY)
            .cloned()
            .ok_or_else(|| LoadError::Parse(format!("missing \"{}\" key", MANIFEST_KEY)))?;
    }

    if let Some(inner) = value.get("config") {
        value = inner.clone();
    }

    serde_json::from_value(value).map_err(|e| LoadError::Parse(e.to_string()))
}

fn parse_value(path: &Path) -> Result<serde_json::Value, LoadError> {
    let content = fs::read_to_string(path)?;
    let value = jsonc_parser::parse_to_serde_value(&content, &ParseOptions::default())
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    Ok(value.unwrap_or(serde_json::Value::Null))
}
