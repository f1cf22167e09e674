//! initools: INI configuration files
//!
//! A library for reading, querying, modifying, and writing INI files, with
//! `%(name)s` or `$name` reference expansion and a defaults section that
//! every other section falls back to.
//!
//! # Modules
//!
//! - [`parser`]: the [`ConfigParser`] façade
//! - [`model`]: the ordered document model
//! - [`scanner`]: line classification
//! - [`interpolate`]: reference expansion
//! - [`serializer`]: rendering back to INI text
//! - [`settings`]: configuration of the `initools` command-line tool

pub mod encoding;
pub mod error;
pub mod interpolate;
pub mod model;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod serializer;
pub mod settings;

pub use encoding::TextEncoding;
pub use error::{Error, InterpolationError, LineError, Result};
pub use interpolate::{Interpolation, MAX_INTERPOLATION_DEPTH, Overrides};
pub use model::{DEFAULT_SECTION, Document, NamePolicy, OptionEntry, Section};
pub use options::{OptionFlags, ParserOptions};
pub use parser::ConfigParser;
