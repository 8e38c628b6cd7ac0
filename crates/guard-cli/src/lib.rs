//! # guard-cli
//!
//! Command implementations for the `credential-guard` binary. Each command
//! returns the text to print on stdout; the binary renders failures.

pub mod commands;
pub mod logging;

use std::path::Path;

use guard_core::{Result, Settings};

pub use commands::Command;

/// Read the settings file when given, otherwise defaults plus environment overrides
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load(path),
        None => Settings::from_env(),
    }
}
