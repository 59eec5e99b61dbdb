//! Shared utilities for wordbook.
//!
//! This module provides common functionality used across the codebase:
//! - `settings`: settings file loading with defaults
//! - `logging`: log backend setup

mod logging;
mod settings;

pub use logging::{init_logging, LoggingError};
pub use settings::{default_level, Settings, SettingsError};
