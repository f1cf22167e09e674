//! Tests for validated settings.

use super::SettingsError;
use super::cli::Cli;
use super::toml::TomlSettings;
use super::validated::ValidatedSettings;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["initools"];
    full_args.extend(args);
    full_args.push("sections");
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML settings
fn toml(content: &str) -> TomlSettings {
    TomlSettings::parse(content).unwrap()
}
