//! Validated settings after merging CLI and TOML sources.
//!
//! This module contains the final, validated settings that are used
//! by the tool. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::interpolate::Interpolation;
use crate::options::{OptionFlags, ParserOptions};

use super::cli::Cli;
use super::defaults;
use super::error::{SettingsError, field};
use super::toml::TomlSettings;

/// Fully validated settings ready for use by the tool.
///
/// # Construction
///
/// Use [`ValidatedSettings::from_raw`] to create from CLI args and optional
/// TOML settings.
#[derive(Debug, Clone)]
pub struct ValidatedSettings {
    /// Options for the parser
    pub parser: ParserOptions,

    /// INI files to read, in order (required)
    pub files: Vec<PathBuf>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{ files: {}, encoding: {}, interpolation: {:?}, names: {:?}, \
             strict: {}, headerless: {} }}",
            self.files.len(),
            self.parser.encoding,
            self.parser.interpolation,
            self.parser.name_policy,
            self.parser.strict_values,
            self.parser.allow_headerless,
        )
    }
}

impl ValidatedSettings {
    /// Creates validated settings from CLI arguments and optional TOML
    /// settings.
    ///
    /// CLI arguments take precedence over TOML values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are given
    /// - The encoding label is unknown
    /// - Both percent and dollar expansion are enabled
    pub fn from_raw(cli: &Cli, toml: Option<&TomlSettings>) -> Result<Self, SettingsError> {
        let flags = Self::resolve_flags(cli, toml);
        let parser = flags.to_options().map_err(SettingsError::Parser)?;
        let files = Self::resolve_files(cli, toml)?;

        Ok(Self {
            parser,
            files,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges settings from CLI and an optional settings file.
    ///
    /// If `cli.settings` is set, that file must exist. Otherwise the
    /// per-user settings file is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file cannot be read or parsed
    /// - The merged settings are invalid
    pub fn load(cli: &Cli) -> Result<Self, SettingsError> {
        let toml = if let Some(ref path) = cli.settings {
            Some(TomlSettings::load(path)?)
        } else if let Some(path) = defaults::settings_path().filter(|p| p.is_file()) {
            tracing::debug!(path = %path.display(), "using per-user settings file");
            Some(TomlSettings::load(&path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Starts from the TOML flags and applies explicit CLI values on top.
    ///
    /// Boolean CLI flags only enable; they cannot turn off a TOML setting.
    fn resolve_flags(cli: &Cli, toml: Option<&TomlSettings>) -> OptionFlags {
        let mut flags = toml.map(|t| t.parser.clone()).unwrap_or_default();

        if let Some(ref encoding) = cli.encoding {
            flags.encoding = Some(encoding.clone());
        }

        if let Some(arg) = cli.interpolation {
            let mode = Interpolation::from(arg);
            flags.percent_expand = Some(mode == Interpolation::Percent);
            flags.dollar_expand = Some(mode == Interpolation::Dollar);
        }

        flags.safe_set |= cli.strict;
        flags.case_sensitive |= cli.case_sensitive;
        flags.allow_headerless |= cli.allow_headerless;
        flags
    }

    /// CLI files replace TOML files entirely.
    fn resolve_files(cli: &Cli, toml: Option<&TomlSettings>) -> Result<Vec<PathBuf>, SettingsError> {
        if !cli.files.is_empty() {
            return Ok(cli.files.clone());
        }

        let files: Vec<PathBuf> = toml
            .map(|t| t.files.read.iter().map(|p| expand_home(p)).collect())
            .unwrap_or_default();

        if files.is_empty() {
            return Err(SettingsError::missing(
                field::FILES,
                "Use --file or set files.read in the settings file",
            ));
        }
        Ok(files)
    }
}

/// Writes the default settings template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_settings(path: &Path) -> Result<(), SettingsError> {
    let template = super::toml::default_settings_template();
    std::fs::write(path, template).map_err(|e| SettingsError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parses a `Key=Value` variable for reference expansion.
///
/// # Errors
///
/// Returns [`SettingsError::InvalidVar`] if there is no `=` or the key is
/// empty.
pub fn parse_var(s: &str) -> Result<(String, String), SettingsError> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(SettingsError::InvalidVar {
            value: s.to_string(),
        }),
    }
}

/// Expands a leading `~` to the home directory.
///
/// Paths without `~`, or with no known home directory, are returned as is.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with(['/', '\\']) => &rest[1..],
        _ => return PathBuf::from(path),
    };

    dirs::home_dir().map_or_else(|| PathBuf::from(path), |home| home.join(rest))
}
