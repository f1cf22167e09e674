//! TOML settings file parsing.
//!
//! Defines the structure of the settings file with serde.

use std::path::Path;

use serde::Deserialize;

use crate::options::OptionFlags;

use super::SettingsError;

/// Root settings structure from TOML file.
///
/// All fields are optional to allow partial settings
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlSettings {
    /// Parser flags
    #[serde(default)]
    pub parser: OptionFlags,

    /// Default input files
    #[serde(default)]
    pub files: FilesSection,
}

/// Input files section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesSection {
    /// Paths read in order when no `--file` is given; `~` expands to the
    /// home directory
    #[serde(default)]
    pub read: Vec<String>,
}

impl TomlSettings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(SettingsError::from)
    }
}

/// Generates a default settings file with comments.
#[must_use]
pub fn default_settings_template() -> String {
    r#"# initools Settings File

[parser]
# Text encoding of INI files: "utf-8", "utf-16le", "utf-16be", or "latin-1"
# A UTF-8 or UTF-16 byte order mark is honored when reading as utf-8.
# encoding = "utf-8"

# Expand %(name)s references (default)
# percent_expand = true

# Expand $name and ${name} references instead
# Note: cannot be combined with percent_expand = true
# dollar_expand = false

# Only accept text values
# safe_set = false

# Treat section and option names case-sensitively
# case_sensitive = false

# Accept options before the first section header (stored as defaults)
# allow_headerless = false

[files]
# INI files read in order when no --file is given; later files win
# Note: --file arguments REPLACE this list entirely (not merged)
# read = ["/etc/app.ini", "~/.app.ini"]
"#
    .to_string()
}
