//! Applies scanned lines to a document.

use crate::error::{Error, Result};
use crate::model::{DEFAULT_SECTION, Document, OptionEntry};
use crate::scanner::{LineKind, ScanError, ScannedLine, Scanner};

/// Where the next comment or continuation line belongs.
#[derive(Debug, Default)]
struct Cursor {
    section: Option<String>,
    option: Option<String>,
}

/// Parses `text` into `doc`, merging with whatever it already holds.
///
/// Bad lines are collected and reported together once the whole input has
/// been applied; everything else stays in the document. Content before the
/// first header aborts immediately unless `allow_headerless` is set.
pub(super) fn load(
    doc: &mut Document,
    text: &str,
    source_name: &str,
    allow_headerless: bool,
) -> Result<()> {
    let mut cursor = Cursor::default();
    let mut errors = Vec::new();

    for scanned in Scanner::new(text.lines(), allow_headerless) {
        match scanned {
            Ok(line) => apply(doc, &mut cursor, line),
            Err(ScanError::MissingSectionHeader(error)) => {
                return Err(Error::MissingSectionHeader {
                    source_name: source_name.to_owned(),
                    line_number: error.line_number,
                    line: error.line,
                });
            }
            Err(ScanError::Invalid(error)) => {
                tracing::debug!(
                    source = source_name,
                    line = error.line_number,
                    text = %error.line,
                    "unparseable line"
                );
                errors.push(error);
            }
        }
    }

    if !errors.is_empty() {
        return Err(Error::Parsing {
            source_name: source_name.to_owned(),
            errors,
        });
    }

    tracing::debug!(
        source = source_name,
        sections = doc.section_names().count(),
        "parsed source"
    );
    Ok(())
}

fn apply(doc: &mut Document, cursor: &mut Cursor, line: ScannedLine) {
    match line.kind {
        LineKind::Blank => {}
        LineKind::Comment(text) => attach_comment(doc, cursor, text),
        LineKind::SectionHeader(name) => {
            doc.section_for_header(&name, line.number);
            cursor.section = Some(name);
            cursor.option = None;
        }
        LineKind::Assignment {
            name,
            value,
            inline_comment,
        } => {
            let key = doc.normalize(&name);
            let section_name = cursor
                .section
                .get_or_insert_with(|| DEFAULT_SECTION.to_owned());
            let entry = OptionEntry::new(name, value)
                .with_line(line.number)
                .with_inline_comment(inline_comment);
            doc.section_or_insert(section_name).insert(key.clone(), entry);
            cursor.option = Some(key);
        }
        LineKind::Continuation(text) => {
            if let (Some(section), Some(option)) = (&cursor.section, &cursor.option) {
                if let Some(entry) = doc.section_or_insert(section).entry_mut(option) {
                    entry.push_continuation(&text);
                }
            }
        }
    }
}

/// Comments follow the last option, else the current header, else they
/// belong to the preamble.
fn attach_comment(doc: &mut Document, cursor: &Cursor, text: String) {
    let Some(section_name) = &cursor.section else {
        doc.push_preamble(text);
        return;
    };

    let section = doc.section_or_insert(section_name);
    match cursor.option.as_deref().and_then(|key| section.entry_mut(key)) {
        Some(entry) => entry.push_comment(text),
        None => section.push_comment(text),
    }
}
