//! Platform directories for settings and logs.

use std::path::PathBuf;

/// Directory name used under the platform config/data directories
pub const APP_DIR_NAME: &str = "wordbook";

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Errors resolving platform directories
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("Could not determine config directory")]
    ConfigDirNotFound,
    #[error("Could not determine data directory")]
    DataDirNotFound,
}

/// `<platform config dir>/wordbook`
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// `<platform config dir>/wordbook/settings.json`
pub fn get_settings_path() -> Result<PathBuf, PathError> {
    Ok(get_config_dir()?.join(DEFAULT_SETTINGS_FILE))
}

/// `<platform local data dir>/wordbook/logs`
pub fn get_log_dir() -> Result<PathBuf, PathError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .ok_or(PathError::DataDirNotFound)
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
