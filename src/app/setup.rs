//! Application setup and initialization.
//!
//! Resolves settings, installs logging, builds the dictionary store and hands
//! everything to the shell.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{mpsc, Arc};

use crate::cli::Cli;
use crate::dictionary::{DictionaryStore, RecentList};
use crate::events::{ChannelEventEmitter, DictionaryEventEmitter};
use crate::paths;
use crate::shell::Shell;
use crate::util::{self, Settings, SettingsError};

/// Resolve settings from the settings file and command-line flags.
///
/// A broken settings file never stops start-up: defaults are used and the
/// error is handed back so it can be reported once logging is up.
pub fn load_settings(cli: &Cli) -> (Settings, Option<SettingsError>) {
    let path = cli
        .settings
        .clone()
        .or_else(|| paths::get_settings_path().ok());

    let (settings, error) = match path {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        },
        None => (Settings::default(), None),
    };

    (cli.apply(settings), error)
}

/// Install the file logger (and stderr when verbose).
///
/// Returns the log file path, if one could be opened.
pub fn setup_logging(settings: &Settings, verbose: bool) -> Option<PathBuf> {
    let log_dir = paths::get_log_dir().ok();
    match util::init_logging(settings.level_filter(), log_dir.as_deref(), verbose) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    }
}

/// Build the store described by `settings`, reporting through `emitter`
pub fn build_store(settings: &Settings, emitter: Arc<dyn DictionaryEventEmitter>) -> DictionaryStore {
    DictionaryStore::new(settings.dictionary_path.clone())
        .with_emitter(emitter)
        .with_duplicate_check(settings.duplicate_check)
}

/// Run the interactive session on stdin/stdout.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run(cli: Cli) -> ExitCode {
    let (settings, settings_error) = load_settings(&cli);
    let log_file = setup_logging(&settings, cli.verbose);

    crate::info!("Setting up wordbook...");
    if let Some(path) = &log_file {
        crate::debug!("Logging to {:?}", path);
    }
    if let Some(e) = settings_error {
        crate::warn!("{}; using defaults", e);
        eprintln!("warning: {}; using defaults", e);
    }

    let (sender, receiver) = mpsc::channel();
    let mut store = build_store(&settings, Arc::new(ChannelEventEmitter::new(sender)));
    if let Err(e) = store.load() {
        crate::warn!("Continuing with an empty dictionary: {}", e);
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(
        store,
        receiver,
        RecentList::new(settings.recent_limit),
        stdin.lock(),
        io::stdout(),
    );

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            crate::error!("Terminal I/O failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "setup_test.rs"]
mod tests;
