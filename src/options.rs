//! Construction-time settings for [`ConfigParser`](crate::ConfigParser).
//!
//! Two forms are provided:
//! - [`ParserOptions`]: typed, always consistent, built with `with_*` methods
//! - [`OptionFlags`]: flat boolean flags as found in settings files,
//!   converted with [`OptionFlags::to_options`]
//!
//! # Flag Mapping
//!
//! | Flag              | Effect                                   |
//! |-------------------|------------------------------------------|
//! | `encoding`        | [`ParserOptions::encoding`]              |
//! | `percent_expand`  | [`Interpolation::Percent`] (the default) |
//! | `dollar_expand`   | [`Interpolation::Dollar`]                |
//! | `safe_set`        | [`ParserOptions::strict_values`]         |
//! | `case_sensitive`  | [`NamePolicy::Exact`]                    |
//! | `allow_headerless`| [`ParserOptions::allow_headerless`]      |
//!
//! Setting both expand flags to `true` is rejected. Setting
//! `percent_expand = false` without `dollar_expand` disables interpolation.

use serde::Deserialize;

use crate::encoding::TextEncoding;
use crate::error::{Error, Result};
use crate::interpolate::Interpolation;
use crate::model::NamePolicy;

/// Settings fixed when a parser is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Encoding for reading sources and writing output.
    pub encoding: TextEncoding,
    /// Reference syntax expanded by `get` and `items`.
    pub interpolation: Interpolation,
    /// Reject non-text values passed to `set_display`.
    pub strict_values: bool,
    /// Normalization applied to section and option names.
    pub name_policy: NamePolicy,
    /// Accept options before the first header, storing them as defaults.
    pub allow_headerless: bool,
}

impl ParserOptions {
    /// Returns the default options: UTF-8, percent interpolation,
    /// case-insensitive names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text encoding.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the interpolation syntax.
    #[must_use]
    pub const fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Enables or disables strict value typing.
    #[must_use]
    pub const fn with_strict_values(mut self, strict: bool) -> Self {
        self.strict_values = strict;
        self
    }

    /// Sets the name normalization policy.
    #[must_use]
    pub const fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// Shorthand for [`NamePolicy::Exact`] or [`NamePolicy::Lowercase`].
    #[must_use]
    pub const fn case_sensitive(self, sensitive: bool) -> Self {
        self.with_name_policy(if sensitive {
            NamePolicy::Exact
        } else {
            NamePolicy::Lowercase
        })
    }

    /// Enables or disables headerless mode.
    #[must_use]
    pub const fn with_allow_headerless(mut self, allow: bool) -> Self {
        self.allow_headerless = allow;
        self
    }
}

/// Parser settings as flat flags, deserializable from a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionFlags {
    /// Encoding label such as `utf-8` or `latin-1`
    pub encoding: Option<String>,

    /// Expand `%(name)s` references (default when unset)
    pub percent_expand: Option<bool>,

    /// Expand `$name` references instead
    pub dollar_expand: Option<bool>,

    /// Only allow text values to be set
    #[serde(default)]
    pub safe_set: bool,

    /// Treat names case-sensitively
    #[serde(default)]
    pub case_sensitive: bool,

    /// Accept options before the first section header
    #[serde(default)]
    pub allow_headerless: bool,
}

impl OptionFlags {
    /// Resolves the interpolation mode from the two expand flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingInterpolation`] if both are `true`.
    pub fn interpolation(&self) -> Result<Interpolation> {
        match (self.percent_expand, self.dollar_expand) {
            (Some(true), Some(true)) => Err(Error::ConflictingInterpolation),
            (_, Some(true)) => Ok(Interpolation::Dollar),
            (Some(false), _) => Ok(Interpolation::None),
            _ => Ok(Interpolation::Percent),
        }
    }

    /// Converts the flags into typed options.
    ///
    /// # Errors
    ///
    /// Returns an error if both expand flags are set or the encoding label
    /// is unknown.
    pub fn to_options(&self) -> Result<ParserOptions> {
        let encoding = match self.encoding.as_deref() {
            Some(label) => label.parse()?,
            None => TextEncoding::default(),
        };

        Ok(ParserOptions::new()
            .with_encoding(encoding)
            .with_interpolation(self.interpolation()?)
            .with_strict_values(self.safe_set)
            .case_sensitive(self.case_sensitive)
            .with_allow_headerless(self.allow_headerless))
    }
}

impl TryFrom<&OptionFlags> for ParserOptions {
    type Error = Error;

    fn try_from(flags: &OptionFlags) -> Result<Self> {
        flags.to_options()
    }
}
