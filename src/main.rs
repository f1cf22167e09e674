//! initools: query and edit INI files
//!
//! Entry point for the initools application.

use initools::settings::{Cli, Command, ValidatedSettings, write_default_settings};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_settings_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Command::Init { output } = &cli.command {
        return handle_init(output);
    }

    // Load and validate settings
    let settings = match ValidatedSettings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Settings error: {e}");
            print_settings_hint(&e);
            return exit_code::SETTINGS_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(settings.verbose);
    tracing::debug!("{settings}");

    run_command(&cli.command, &settings)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_settings(output) {
        Ok(()) => {
            println!("Settings template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::SETTINGS_ERROR
        }
    }
}

/// Runs one command, printing results to stdout.
#[cfg(not(tarpaulin_include))]
fn run_command(command: &Command, settings: &ValidatedSettings) -> ExitCode {
    let stdout = std::io::stdout();

    match run::execute(command, settings, &mut stdout.lock()) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
