//! Name normalization for sections and options.

use std::fmt;

/// Reserved name of the defaults pseudo-section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Maps user-supplied section and option names to their canonical form.
///
/// Applied on every insertion and lookup. Names are trimmed first, so a
/// custom function only sees the trimmed text. Custom functions must be
/// idempotent: `f(f(x)) == f(x)`.
#[derive(Clone, Copy, Default)]
pub enum NamePolicy {
    /// Case-insensitive names (default).
    #[default]
    Lowercase,
    /// Case-sensitive names.
    Exact,
    /// Caller-supplied transform.
    Custom(fn(&str) -> String),
}

impl NamePolicy {
    /// Returns the canonical form of `name`.
    #[must_use]
    pub fn normalize(&self, name: &str) -> String {
        let name = name.trim();
        match self {
            Self::Lowercase => name.to_lowercase(),
            Self::Exact => name.to_owned(),
            Self::Custom(transform) => transform(name),
        }
    }

    /// Returns true if `name` refers to the defaults pseudo-section.
    #[must_use]
    pub fn is_default_section(&self, name: &str) -> bool {
        self.normalize(name) == self.normalize(DEFAULT_SECTION)
    }
}

impl fmt::Debug for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lowercase => f.write_str("Lowercase"),
            Self::Exact => f.write_str("Exact"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
