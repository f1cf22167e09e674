//! Default values for tool settings.

use std::path::PathBuf;

/// Name of the settings file looked up in the user's config directory.
pub const SETTINGS_FILE_NAME: &str = "initools.toml";

/// Directory under the user's config directory holding the settings file.
pub const SETTINGS_DIR_NAME: &str = "initools";

/// Settings file used when `--settings` is not given, if it exists.
///
/// `{config_dir}/initools/initools.toml`, e.g. `~/.config/initools/initools.toml`.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
