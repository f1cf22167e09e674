//! Command execution.
//!
//! Loads the configured INI files into a parser and runs one subcommand
//! against it, writing results to the given output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use initools::settings::{Command, SettingsError, ValidatedSettings, parse_var};
use initools::{ConfigParser, Overrides};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading, querying, or writing INI data failed.
    #[error(transparent)]
    Ini(#[from] initools::Error),

    /// A command argument was invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// None of the input files could be read.
    #[error("None of the {0} input file(s) could be read")]
    NoInput(usize),

    /// `set` was given several input files and no explicit output.
    #[error("set merges {0} input files; pass --output to choose where to write")]
    AmbiguousOutput(usize),

    /// Failed to encode JSON output.
    #[error("Failed to encode JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// Failed to write to standard output.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Executes `command` against the files named in `settings`.
///
/// # Errors
///
/// Returns an error if the files cannot be parsed, a lookup fails, or the
/// output cannot be written.
pub fn execute<W: Write>(
    command: &Command,
    settings: &ValidatedSettings,
    out: &mut W,
) -> Result<(), RunError> {
    let mut parser = ConfigParser::new(settings.parser);
    let read = parser.read(&settings.files)?;
    tracing::debug!(read = read.len(), of = settings.files.len(), "loaded input files");

    match command {
        Command::Get {
            section,
            option,
            raw,
            vars,
        } => {
            require_input(read.len(), settings)?;
            let overrides = parse_overrides(vars)?;
            let value = parser.get_with(section, option, *raw, Some(&overrides))?;
            writeln!(out, "{value}").map_err(RunError::Output)
        }
        Command::Sections => {
            require_input(read.len(), settings)?;
            for name in parser.sections() {
                writeln!(out, "{name}").map_err(RunError::Output)?;
            }
            Ok(())
        }
        Command::Items {
            section,
            raw,
            json,
            vars,
        } => {
            require_input(read.len(), settings)?;
            let overrides = parse_overrides(vars)?;
            let items = parser.items_with(section, *raw, Some(&overrides))?;
            write_items(&items, *json, out)
        }
        Command::Set {
            section,
            option,
            value,
            create,
            output,
        } => {
            let target = set_target(output.as_deref(), &settings.files)?;
            if *create && !parser.has_section(section) && !is_defaults(&parser, section) {
                parser.add_section(section)?;
            }
            parser.set(section, option, value.as_str())?;
            save(&parser, target)
        }
        Command::Fmt { output } => {
            require_input(read.len(), settings)?;
            match output {
                Some(path) => save(&parser, path),
                None => Ok(parser.write(out)?),
            }
        }
        Command::Init { .. } => {
            // Handled in main before settings are loaded
            Ok(())
        }
    }
}

fn require_input(read: usize, settings: &ValidatedSettings) -> Result<(), RunError> {
    if read == 0 {
        return Err(RunError::NoInput(settings.files.len()));
    }
    Ok(())
}

/// Picks the file `set` writes: the explicit output, else the only input.
fn set_target<'a>(output: Option<&'a Path>, files: &'a [PathBuf]) -> Result<&'a Path, RunError> {
    match (output, files) {
        (Some(path), _) => Ok(path),
        (None, [only]) => Ok(only.as_path()),
        (None, []) => Err(RunError::NoInput(0)),
        (None, many) => Err(RunError::AmbiguousOutput(many.len())),
    }
}

fn parse_overrides(vars: &[String]) -> Result<Overrides, RunError> {
    vars.iter()
        .map(|var| parse_var(var))
        .collect::<Result<Overrides, _>>()
        .map_err(RunError::from)
}

fn is_defaults(parser: &ConfigParser, section: &str) -> bool {
    parser
        .parser_options()
        .name_policy
        .is_default_section(section)
}

fn write_items<W: Write>(items: &[(String, String)], json: bool, out: &mut W) -> Result<(), RunError> {
    if json {
        let object: serde_json::Map<String, serde_json::Value> = items
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::String(value.clone())))
            .collect();
        let text = serde_json::to_string_pretty(&object).map_err(RunError::Json)?;
        return writeln!(out, "{text}").map_err(RunError::Output);
    }

    for (name, value) in items {
        writeln!(out, "{name} = {value}").map_err(RunError::Output)?;
    }
    Ok(())
}

fn save(parser: &ConfigParser, path: &Path) -> Result<(), RunError> {
    parser.write_to_path(path)?;
    tracing::info!(path = %path.display(), "wrote file");
    Ok(())
}
