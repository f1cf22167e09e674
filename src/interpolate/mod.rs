//! Reference expansion inside option values.
//!
//! Two syntaxes are supported, one per parser:
//! - **Percent**: `%(name)s`, with `%%` for a literal `%`
//! - **Dollar**: `$name` or `${name}`, with `$$` for a literal `$`
//!
//! # Algorithm
//!
//! Expansion is an iterative loop rather than a recursive resolver. Each pass
//! replaces every reference with the referenced option's *raw* value, then the
//! result is scanned again. Escapes stay escaped until the final pass, so a
//! `%%` inside a referenced value still yields a literal `%`.
//!
//! Each pass that substitutes something counts toward the depth bound
//! ([`MAX_INTERPOLATION_DEPTH`]). A chain of ten nested references resolves;
//! an eleventh level, or any cycle, fails with
//! [`InterpolationError::Depth`].
//!
//! Keys are looked up, after normalization, in: caller overrides, then the
//! owning section, then the defaults.

mod dollar;
mod percent;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::InterpolationError;
use crate::model::SectionView;

/// Maximum number of substituting passes before giving up.
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

/// Which reference syntax, if any, is expanded on retrieval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Values are returned as stored.
    None,
    /// `%(name)s` references (default).
    #[default]
    Percent,
    /// `$name` / `${name}` references.
    Dollar,
}

impl Interpolation {
    /// Rewrites `value` so that it reads back unchanged under this syntax:
    /// stray `%` (or `$`) characters are doubled. References and existing
    /// escapes are left alone.
    #[must_use]
    pub fn escape_stray(self, value: &str) -> String {
        match self {
            Self::None => value.to_owned(),
            Self::Percent => percent::escape_stray(value),
            Self::Dollar => dollar::escape_stray(value),
        }
    }

    fn tokenize(self, value: &str) -> Result<Vec<Token<'_>>, SyntaxIssue> {
        match self {
            Self::None => Ok(vec![Token::Literal(value)]),
            Self::Percent => percent::tokenize(value),
            Self::Dollar => dollar::tokenize(value),
        }
    }

    const fn escape_sequence(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Percent => "%%",
            Self::Dollar => "$$",
        }
    }

    const fn escaped_char(self) -> char {
        match self {
            Self::Dollar => '$',
            Self::None | Self::Percent => '%',
        }
    }
}

/// Caller-supplied values consulted before the section during lookup.
///
/// Names are normalized with the parser's policy at lookup time, so
/// `Host` and `host` address the same key under the default policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: IndexMap<String, String>,
}

impl Overrides {
    /// Creates an empty set of overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns true if no overrides are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Overrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Lookup chain for one interpolation: overrides, section, defaults.
#[derive(Debug)]
pub struct Scope<'a> {
    view: SectionView<'a>,
    overrides: HashMap<String, &'a str>,
}

impl<'a> Scope<'a> {
    /// Builds a scope over `view`, with `overrides` taking precedence.
    #[must_use]
    pub fn new(view: SectionView<'a>, overrides: Option<&'a Overrides>) -> Self {
        let policy = view.policy();
        let overrides = overrides
            .into_iter()
            .flat_map(Overrides::iter)
            .map(|(k, v)| (policy.normalize(k), v))
            .collect();

        Self { view, overrides }
    }

    /// Resolves `name` to a raw value.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'a str> {
        let key = self.view.policy().normalize(name);
        self.overrides
            .get(&key)
            .copied()
            .or_else(|| self.view.get_normalized(&key))
    }

    /// Name of the section being resolved against.
    #[must_use]
    pub fn section_name(&self) -> &'a str {
        self.view.name()
    }
}

/// Expands all references in `raw`, the raw value of `option`.
///
/// # Errors
///
/// - [`InterpolationError::Syntax`] for malformed references or stray
///   escape characters
/// - [`InterpolationError::MissingOption`] when a key is not in scope
/// - [`InterpolationError::Depth`] when expansion does not settle within
///   [`MAX_INTERPOLATION_DEPTH`] passes
pub fn interpolate(
    mode: Interpolation,
    scope: &Scope<'_>,
    option: &str,
    raw: &str,
) -> Result<String, InterpolationError> {
    if mode == Interpolation::None {
        return Ok(raw.to_owned());
    }

    let mut value = raw.to_owned();
    let mut depth = 0;

    loop {
        let tokens = mode.tokenize(&value).map_err(|issue| InterpolationError::Syntax {
            section: scope.section_name().to_owned(),
            option: option.to_owned(),
            fragment: value[issue.position..].to_owned(),
            position: issue.position,
            reason: issue.reason,
        })?;

        if !tokens.iter().any(|t| matches!(t, Token::Reference(_))) {
            return Ok(render(mode, &tokens));
        }

        depth += 1;
        if depth > MAX_INTERPOLATION_DEPTH {
            return Err(InterpolationError::Depth {
                section: scope.section_name().to_owned(),
                option: option.to_owned(),
                raw: raw.to_owned(),
            });
        }

        let mut next = String::with_capacity(value.len());
        for token in &tokens {
            match *token {
                Token::Literal(text) => next.push_str(text),
                Token::Escape => next.push_str(mode.escape_sequence()),
                Token::Reference(name) => {
                    let replacement =
                        scope
                            .lookup(name)
                            .ok_or_else(|| InterpolationError::MissingOption {
                                section: scope.section_name().to_owned(),
                                option: option.to_owned(),
                                raw: raw.to_owned(),
                                reference: name.to_owned(),
                            })?;
                    next.push_str(replacement);
                }
            }
        }
        tracing::trace!(option, depth, value = %next, "interpolation pass");
        value = next;
    }
}

fn render(mode: Interpolation, tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        match *token {
            Token::Literal(text) | Token::Reference(text) => out.push_str(text),
            Token::Escape => out.push(mode.escaped_char()),
        }
    }
    out
}

/// Piece of a tokenized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Escape,
    Reference(&'a str),
}

/// Where and why tokenizing stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SyntaxIssue {
    position: usize,
    reason: &'static str,
}
