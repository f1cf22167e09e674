//! Line classification for INI text.
//!
//! [`Scanner`] turns physical lines into [`ScannedLine`] events without
//! touching any document. It keeps just enough state to recognize
//! continuation lines and content that precedes the first section header.
//!
//! # Rules
//!
//! - `[name]` is a section header; a trailing `;`/`#` comment is allowed.
//! - `name = value` or `name : value` is an option; the first separator wins.
//!   A `;` preceded by whitespace starts an inline comment.
//! - A line indented deeper than the current option line continues its value.
//! - Lines starting with `#` or `;` (after indentation) are comments.
//!
//! Errors are yielded in-line so the caller can keep scanning past them.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LineError;

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<name>[^\]]*)\]\s*(?:[;#].*)?$")
        .expect("section header pattern is valid")
});

static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[^:=\s\[][^:=]*?)\s*[:=](?P<value>.*)$")
        .expect("option pattern is valid")
});

/// Classification of one physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only line.
    Blank,
    /// Full-line comment, trimmed, including its `#` or `;` marker.
    Comment(String),
    /// Section header with the trimmed name.
    SectionHeader(String),
    /// Option assignment.
    Assignment {
        /// Trimmed option name, not normalized
        name: String,
        /// Trimmed value with any inline comment removed
        value: String,
        /// Inline comment text after `;`, trimmed
        inline_comment: Option<String>,
    },
    /// Trimmed text continuing the previous option's value.
    Continuation(String),
}

/// A classified line with its 1-based number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    /// 1-based line number
    pub number: usize,
    /// What the line is
    pub kind: LineKind,
}

/// Line-level scan failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Content before the first header while headerless mode is off.
    MissingSectionHeader(LineError),
    /// A line that is not a header, assignment, comment, or continuation.
    Invalid(LineError),
}

/// Iterator of classified lines.
#[derive(Debug)]
pub struct Scanner<I> {
    lines: I,
    number: usize,
    allow_headerless: bool,
    seen_header: bool,
    option_indent: Option<usize>,
}

impl<I> Scanner<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Creates a scanner over `lines` (already split, without terminators).
    ///
    /// With `allow_headerless`, options before the first header are
    /// reported normally instead of as [`ScanError::MissingSectionHeader`].
    pub const fn new(lines: I, allow_headerless: bool) -> Self {
        Self {
            lines,
            number: 0,
            allow_headerless,
            seen_header: false,
            option_indent: None,
        }
    }

    fn classify(&mut self, raw: &str) -> Result<LineKind, ScanError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(LineKind::Blank);
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            return Ok(LineKind::Comment(trimmed.to_owned()));
        }

        let indent = raw.len() - raw.trim_start().len();
        if self.option_indent.is_some_and(|current| indent > current) {
            return Ok(LineKind::Continuation(trimmed.to_owned()));
        }

        if let Some(name) = parse_header(trimmed) {
            self.seen_header = true;
            self.option_indent = None;
            return Ok(LineKind::SectionHeader(name));
        }

        if !self.seen_header && !self.allow_headerless {
            return Err(ScanError::MissingSectionHeader(self.line_error(raw)));
        }

        match parse_option(trimmed) {
            Some(kind) => {
                self.option_indent = Some(indent);
                Ok(kind)
            }
            None => Err(ScanError::Invalid(self.line_error(raw))),
        }
    }

    fn line_error(&self, raw: &str) -> LineError {
        LineError {
            line_number: self.number,
            line: raw.to_owned(),
        }
    }
}

impl<I> Iterator for Scanner<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<ScannedLine, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.number += 1;
        let number = self.number;

        Some(
            self.classify(line.as_ref())
                .map(|kind| ScannedLine { number, kind }),
        )
    }
}

fn parse_header(trimmed: &str) -> Option<String> {
    let captures = SECTION_RE.captures(trimmed)?;
    let name = captures.name("name")?.as_str().trim();
    (!name.is_empty()).then(|| name.to_owned())
}

fn parse_option(trimmed: &str) -> Option<LineKind> {
    let captures = OPTION_RE.captures(trimmed)?;
    let name = captures.name("name")?.as_str().trim().to_owned();
    let (value, inline_comment) = split_inline_comment(captures.name("value")?.as_str());

    Some(LineKind::Assignment {
        name,
        value,
        inline_comment,
    })
}

/// Splits `value ; comment` at the first `;` that follows whitespace.
///
/// `rest` is everything after the separator, leading whitespace included.
fn split_inline_comment(rest: &str) -> (String, Option<String>) {
    let mut previous_is_space = false;
    for (i, c) in rest.char_indices() {
        if c == ';' && previous_is_space {
            let comment = rest[i + 1..].trim().to_owned();
            return (rest[..i].trim().to_owned(), Some(comment));
        }
        previous_is_space = c.is_whitespace();
    }

    (rest.trim().to_owned(), None)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
