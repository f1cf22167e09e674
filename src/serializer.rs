//! Rendering a [`Document`] back to INI text.
//!
//! Output layout:
//!
//! ```text
//! ; preamble comments
//! [DEFAULT]
//! name = value ; inline comment
//! # comment lines that followed the option
//!
//! [section]
//! multi = first line
//!     second line
//! ```
//!
//! The defaults come first when non-empty, then sections in stored order,
//! each followed by a blank line. Names keep their original spelling.
//! Stray interpolation characters are doubled so that the text reads back
//! with the same meaning.

use std::fmt::{self, Write};

use crate::interpolate::Interpolation;
use crate::model::{Document, OptionEntry, Section};

/// Indentation for continuation lines of multi-line values.
const CONTINUATION_INDENT: &str = "    ";

/// Writes `doc` to `out`.
///
/// # Errors
///
/// Returns an error only if `out` fails.
pub fn write_document<W: Write>(doc: &Document, mode: Interpolation, out: &mut W) -> fmt::Result {
    for comment in doc.preamble() {
        writeln!(out, "{comment}")?;
    }

    let defaults = doc.defaults();
    if !defaults.is_empty() || !defaults.comments().is_empty() {
        write_section(defaults, mode, out)?;
    }

    for (_, section) in doc.sections() {
        write_section(section, mode, out)?;
    }

    Ok(())
}

/// Renders `doc` to a new string.
#[must_use]
pub fn to_ini_string(doc: &Document, mode: Interpolation) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    _ = write_document(doc, mode, &mut out);
    out
}

fn write_section<W: Write>(section: &Section, mode: Interpolation, out: &mut W) -> fmt::Result {
    writeln!(out, "[{}]", section.name())?;
    for comment in section.comments() {
        writeln!(out, "{comment}")?;
    }
    for (_, entry) in section.iter() {
        write_option(entry, mode, out)?;
    }
    writeln!(out)
}

fn write_option<W: Write>(entry: &OptionEntry, mode: Interpolation, out: &mut W) -> fmt::Result {
    let value = mode.escape_stray(entry.value());
    let mut lines = value.split('\n');
    let first = lines.next().unwrap_or_default();

    write!(out, "{} = {first}", entry.name())?;
    if let Some(comment) = entry.inline_comment() {
        write!(out, " ; {comment}")?;
    }
    writeln!(out)?;

    for line in lines {
        writeln!(out, "{CONTINUATION_INDENT}{line}")?;
    }
    for comment in entry.comments() {
        writeln!(out, "{comment}")?;
    }
    Ok(())
}

/// Checks that `value` has a written form that reads back unchanged.
///
/// Every line must be free of surrounding whitespace. The first line must not
/// open an inline comment. Later lines must be non-empty and must not start
/// with a comment marker.
///
/// # Errors
///
/// Returns a short description of the first problem found.
pub fn check_writable(value: &str) -> Result<(), &'static str> {
    let mut lines = value.split('\n');
    let first = lines.next().unwrap_or_default();

    if first.trim() != first {
        return Err("leading or trailing whitespace");
    }
    if first.starts_with(';') || opens_inline_comment(first) {
        return Err("';' after whitespace would start an inline comment");
    }

    for line in lines {
        if line.is_empty() {
            return Err("empty continuation line");
        }
        if line.trim() != line {
            return Err("leading or trailing whitespace");
        }
        if line.starts_with('#') || line.starts_with(';') {
            return Err("continuation line starts with a comment marker");
        }
    }
    Ok(())
}

fn opens_inline_comment(line: &str) -> bool {
    line.char_indices()
        .any(|(i, c)| c == ';' && line[..i].ends_with(char::is_whitespace))
}

#[cfg(test)]
#[path = "serializer_tests.rs"]
mod tests;
