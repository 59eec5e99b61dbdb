//! Application wiring: settings, logging, store and shell.

mod setup;

pub use setup::run;
