//! Application settings.
//!
//! Settings live in an optional JSON file. Every field has a default, so a
//! missing file or a partial file is fine; command-line flags are layered on top.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::dictionary::{DEFAULT_DICTIONARY_FILE, DEFAULT_RECENT_LIMIT};

/// Error types for settings operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Settings file exists but could not be read
    #[error("Failed to read settings {0:?}: {1}")]
    Read(PathBuf, String),
    /// Settings file is not valid JSON for [`Settings`]
    #[error("Failed to parse settings {0:?}: {1}")]
    Parse(PathBuf, String),
}

/// User-configurable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Dictionary file; relative paths resolve against the working directory
    pub dictionary_path: PathBuf,
    /// Ask before adding a target term that is already in the dictionary
    pub duplicate_check: bool,
    /// Number of recently added pairs to show
    pub recent_limit: usize,
    /// Log level name ("error", "warn", "info", "debug", "trace", "off")
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            duplicate_check: true,
            recent_limit: DEFAULT_RECENT_LIMIT,
            log_level: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                crate::debug!("No settings file at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(SettingsError::Read(path.to_path_buf(), e.to_string())),
        };

        serde_json::from_str(&content)
            .map_err(|e| SettingsError::Parse(path.to_path_buf(), e.to_string()))
    }

    /// Parsed log level, or the build default when unset or unrecognised
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| LevelFilter::from_str(level).ok())
            .unwrap_or_else(default_level)
    }
}

/// Debug in debug builds, Info in release
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
