//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use initools::settings::{SettingsError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Settings error (exit code 1) - invalid args, missing input files, etc.
    pub const SETTINGS_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - parse failure, missing option, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common settings errors.
pub fn print_settings_hint(error: &SettingsError) {
    match error {
        SettingsError::MissingRequired {
            field: field::FILES,
            ..
        }
        | SettingsError::FileRead { .. } => {
            eprintln!("\nRun 'initools init' to generate a settings template.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so that command output on stdout stays clean.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
