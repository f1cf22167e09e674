//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::interpolate::Interpolation;

/// initools: query and edit INI files
///
/// Reads one or more INI files in order, later files overriding earlier
/// ones, and prints or rewrites the merged result.
#[derive(Debug, Parser)]
#[command(name = "initools")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// INI file to read (can be specified multiple times)
    #[arg(long = "file", short = 'f', value_name = "PATH", global = true)]
    pub files: Vec<PathBuf>,

    /// Path to settings file
    #[arg(long, short, global = true)]
    pub settings: Option<PathBuf>,

    /// Text encoding of the INI files (utf-8, utf-16le, utf-16be, latin-1)
    #[arg(long, global = true)]
    pub encoding: Option<String>,

    /// Reference syntax to expand in values
    #[arg(long, value_enum, global = true)]
    pub interpolation: Option<InterpolationArg>,

    /// Treat section and option names case-sensitively
    #[arg(long = "case-sensitive", global = true)]
    pub case_sensitive: bool,

    /// Only accept text values
    #[arg(long, global = true)]
    pub strict: bool,

    /// Accept options before the first section header
    #[arg(long = "allow-headerless", global = true)]
    pub allow_headerless: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for initools
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the value of one option
    Get {
        /// Section name (DEFAULT for the defaults)
        section: String,

        /// Option name
        option: String,

        /// Print the stored value without expanding references
        #[arg(long)]
        raw: bool,

        /// Extra value for reference expansion (can be specified multiple times)
        #[arg(long = "var", value_name = "K=V")]
        vars: Vec<String>,
    },

    /// List section names
    Sections,

    /// List the options of a section, including inherited defaults
    Items {
        /// Section name (DEFAULT for the defaults)
        section: String,

        /// Print stored values without expanding references
        #[arg(long)]
        raw: bool,

        /// Print a JSON object instead of `name = value` lines
        #[arg(long)]
        json: bool,

        /// Extra value for reference expansion (can be specified multiple times)
        #[arg(long = "var", value_name = "K=V")]
        vars: Vec<String>,
    },

    /// Set an option and write the merged result
    Set {
        /// Section name (DEFAULT for the defaults)
        section: String,

        /// Option name
        option: String,

        /// New raw value
        value: String,

        /// Add the section if it does not exist
        #[arg(long)]
        create: bool,

        /// Output path (default: the input file; required with several inputs)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the merged files in canonical layout
    Fmt {
        /// Write to this path instead of standard output
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Generate a default settings file
    Init {
        /// Output path for the settings file
        #[arg(long, short, default_value = "initools.toml")]
        output: PathBuf,
    },
}

/// Interpolation argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InterpolationArg {
    /// Return values as stored
    None,
    /// Expand `%(name)s` references
    Percent,
    /// Expand `$name` and `${name}` references
    Dollar,
}

impl From<InterpolationArg> for Interpolation {
    fn from(arg: InterpolationArg) -> Self {
        match arg {
            InterpolationArg::None => Self::None,
            InterpolationArg::Percent => Self::Percent,
            InterpolationArg::Dollar => Self::Dollar,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
