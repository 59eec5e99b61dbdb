//! Log backend setup.
//!
//! The crate logs through the `log` facade (`crate::info!` etc.). This wires the
//! facade to a fern dispatcher with a log-file target and an optional stderr target.

use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};

/// Base name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "wordbook.log";

/// Errors setting up logging
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Log directory or file could not be opened
    #[error("Failed to open log file {0:?}: {1}")]
    OpenFile(PathBuf, std::io::Error),
    /// A global logger was already installed
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Install the global logger
///
/// # Arguments
/// * `level` - Maximum level recorded
/// * `log_dir` - Directory for `wordbook.log`; `None` disables the file target
/// * `to_stderr` - Also echo records to stderr
///
/// # Returns
/// The log file path when a file target was installed
pub fn init_logging(
    level: LevelFilter,
    log_dir: Option<&Path>,
    to_stderr: bool,
) -> Result<Option<PathBuf>, LoggingError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d][%H:%M:%S"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level);

    if to_stderr {
        dispatch = dispatch.chain(std::io::stderr());
    }

    let log_file = match log_dir {
        Some(dir) => {
            let path = dir.join(LOG_FILE_NAME);
            fs::create_dir_all(dir).map_err(|e| LoggingError::OpenFile(path.clone(), e))?;
            let file = fern::log_file(&path).map_err(|e| LoggingError::OpenFile(path.clone(), e))?;
            dispatch = dispatch.chain(file);
            Some(path)
        }
        None => None,
    };

    dispatch.apply()?;
    Ok(log_file)
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
