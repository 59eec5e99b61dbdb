// wordbook: translate a term, add translation pairs, keep them in a JSON file

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod app;
pub mod cli;
pub mod dictionary;
pub mod events;
pub mod paths;
pub mod shell;
pub mod util;

use clap::Parser;
use std::process::ExitCode;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

/// Application entry point - parses flags and runs the interactive session.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> ExitCode {
    app::run(cli::Cli::parse())
}
