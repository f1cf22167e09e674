//! Error types for parsing, lookup, and interpolation.
//!
//! Every variant carries the names, line numbers, or fragments needed to
//! locate the problem without re-reading the input.

use std::fmt;
use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for all document operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation referenced a section that does not exist.
    #[error("No section: '{section}'")]
    NoSection {
        /// The section name as given by the caller
        section: String,
    },

    /// `add_section` was called with an existing or reserved name.
    #[error("Section '{section}' already exists")]
    DuplicateSection {
        /// The section name as given by the caller
        section: String,
    },

    /// An option was not found in the section nor in the defaults.
    #[error("No option '{option}' in section: '{section}'")]
    NoOption {
        /// The section that was searched
        section: String,
        /// The missing option
        option: String,
    },

    /// Interpolating a value failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// Content appeared before the first section header.
    #[error("File contains no section headers.\nfile: {source_name}, line: {line_number}\n{line:?}")]
    MissingSectionHeader {
        /// Name of the input (path or caller-supplied label)
        source_name: String,
        /// 1-based line number
        line_number: usize,
        /// The offending line
        line: String,
    },

    /// One or more lines could not be parsed.
    #[error("Source contains parsing errors: {source_name}{}", LineErrors(.errors))]
    Parsing {
        /// Name of the input (path or caller-supplied label)
        source_name: String,
        /// Every bad line in input order
        errors: Vec<LineError>,
    },

    /// A non-text value was passed to `set_display` in strict mode.
    #[error("Option '{option}' in section '{section}' must be a string, got {type_name}")]
    NonStringValue {
        /// Target section
        section: String,
        /// Target option
        option: String,
        /// Rust type name of the rejected value
        type_name: &'static str,
    },

    /// A value set through the API has no INI form that reads back unchanged.
    #[error("Value of option '{option}' in section '{section}' cannot be written: {reason}")]
    UnrepresentableValue {
        /// Target section
        section: String,
        /// Target option
        option: String,
        /// What makes the value unwritable
        reason: &'static str,
    },

    /// Text could not be decoded from, or encoded to, the configured encoding.
    #[error("Encoding error on '{source_name}' ({encoding}): {reason}")]
    Encoding {
        /// Name of the input or output
        source_name: String,
        /// Encoding label
        encoding: &'static str,
        /// Codec message
        reason: String,
    },

    /// Reading or writing a stream failed.
    #[error("I/O error on '{source_name}': {error}")]
    Io {
        /// Name of the input or output
        source_name: String,
        /// Underlying I/O error
        #[source]
        error: io::Error,
    },

    /// Both percent and dollar interpolation were requested.
    #[error("percent_expand and dollar_expand cannot both be enabled")]
    ConflictingInterpolation,

    /// The encoding label is not recognized.
    #[error("Unknown encoding '{label}': expected utf-8, utf-16le, utf-16be, or latin-1")]
    UnknownEncoding {
        /// The label as given
        label: String,
    },
}

impl Error {
    pub(crate) fn io(source_name: impl Into<String>, error: io::Error) -> Self {
        Self::Io {
            source_name: source_name.into(),
            error,
        }
    }
}

/// A single line that could not be classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number
    pub line_number: usize,
    /// The raw line text
    pub line: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {:2}]: {:?}", self.line_number, self.line)
    }
}

struct LineErrors<'a>(&'a [LineError]);

impl fmt::Display for LineErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in self.0 {
            write!(f, "\n\t{error}")?;
        }
        Ok(())
    }
}

/// Errors raised while expanding references inside a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// Expansion did not settle within the maximum number of passes.
    #[error(
        "Value interpolation too deeply recursive:\n\tsection: [{section}]\n\toption : {option}\n\trawval : {raw}"
    )]
    Depth {
        /// Owning section
        section: String,
        /// Option being resolved
        option: String,
        /// Raw value before interpolation
        raw: String,
    },

    /// A reference named a key that is defined nowhere in scope.
    #[error(
        "Bad value substitution: option '{option}' in section '{section}' contains an interpolation key '{reference}' which is not a valid option name. Raw value: '{raw}'"
    )]
    MissingOption {
        /// Owning section
        section: String,
        /// Option being resolved
        option: String,
        /// Raw value before interpolation
        raw: String,
        /// The unresolved key
        reference: String,
    },

    /// The value is not well-formed under the active syntax.
    #[error("{reason} in option '{option}' of section '{section}' at position {position}: '{fragment}'")]
    Syntax {
        /// Owning section
        section: String,
        /// Option being resolved
        option: String,
        /// The text starting at the offending character
        fragment: String,
        /// Byte offset of the offending character in the scanned string
        position: usize,
        /// Short description
        reason: &'static str,
    },
}
