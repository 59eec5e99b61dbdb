//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;

use crate::util::Settings;

/// Translate words and collect new translation pairs
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "wordbook", version, about)]
pub struct Cli {
    /// Dictionary file (default: dic.json in the working directory)
    #[arg(short, long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Settings file (default: <config dir>/wordbook/settings.json)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Add duplicate target terms without asking
    #[arg(long)]
    pub no_duplicate_check: bool,

    /// Echo log output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the flags over `settings`
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dict) = &self.dict {
            settings.dictionary_path = dict.clone();
        }
        if self.no_duplicate_check {
            settings.duplicate_check = false;
        }
        settings
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
