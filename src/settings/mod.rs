//! Settings layer for the `initools` tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML settings file parsing ([`TomlSettings`])
//! - Validated settings ([`ValidatedSettings`])
//! - Settings file generation ([`write_default_settings`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Settings are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML settings file** - `--settings`, else the per-user file if present
//! 3. **Built-in defaults** - UTF-8, percent interpolation, lowercase names
//!
//! Input files (`--file`) **replace** the TOML `files.read` list entirely.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--strict`, `--case-sensitive`, `--allow-headerless`) use
//! OR semantics: once set `true` in TOML, the CLI cannot turn them off.
//! `--interpolation` overrides both TOML expand flags.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, InterpolationArg};
pub use error::{SettingsError, field};
pub use self::toml::{FilesSection, TomlSettings, default_settings_template};
pub use validated::{ValidatedSettings, expand_home, parse_var, write_default_settings};
