//! The public façade over the document model.
//!
//! [`ConfigParser`] owns a [`Document`] and the [`ParserOptions`] it was
//! created with. Reading merges sources into the document; lookups fall back
//! from a section to the defaults; retrieval expands references according to
//! the configured [`Interpolation`].
//!
//! # Example
//!
//! ```
//! use initools::{ConfigParser, ParserOptions};
//!
//! let mut parser = ConfigParser::new(ParserOptions::default());
//! parser.read_str(
//!     "[DEFAULT]\nport = 8080\n\n[server]\nhost = localhost\nurl = http://%(host)s:%(port)s\n",
//!     "<example>",
//! )?;
//!
//! assert_eq!(parser.get("server", "url")?, "http://localhost:8080");
//! assert_eq!(parser.get_raw("server", "url")?, "http://%(host)s:%(port)s");
//! # Ok::<(), initools::Error>(())
//! ```

mod file;
mod load;

#[cfg(test)]
#[path = "mod_tests/mod.rs"]
mod tests;

use std::any::{self, TypeId};
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::interpolate::{self, Interpolation, Overrides, Scope};
use crate::model::{Document, Section, SectionView};
use crate::options::{OptionFlags, ParserOptions};
use crate::serializer;

/// Name used in errors raised while writing to a caller-supplied sink.
const OUTPUT_NAME: &str = "<output>";

/// INI parser and document.
#[derive(Debug, Clone, Default)]
pub struct ConfigParser {
    settings: ParserOptions,
    document: Document,
}

impl ConfigParser {
    /// Creates an empty parser.
    #[must_use]
    pub fn new(settings: ParserOptions) -> Self {
        Self {
            settings,
            document: Document::new(settings.name_policy),
        }
    }

    /// Creates an empty parser from flat flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the flags are contradictory or name an unknown
    /// encoding.
    pub fn from_flags(flags: &OptionFlags) -> Result<Self> {
        Ok(Self::new(flags.to_options()?))
    }

    /// The options this parser was created with.
    #[must_use]
    pub const fn parser_options(&self) -> &ParserOptions {
        &self.settings
    }

    /// The underlying document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The defaults pseudo-section.
    #[must_use]
    pub const fn defaults(&self) -> &Section {
        self.document.defaults()
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    /// Normalized section names in insertion order, defaults excluded.
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        self.document.section_names().collect()
    }

    /// Adds an empty section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] if the section exists or the name
    /// is the reserved `DEFAULT`.
    pub fn add_section(&mut self, name: &str) -> Result<()> {
        self.document.add_section(name)
    }

    /// Returns true if a real section exists. Always false for `DEFAULT`.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.document.has_section(name)
    }

    /// Removes a section. Returns whether it existed.
    pub fn remove_section(&mut self, name: &str) -> bool {
        self.document.remove_section(name)
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    /// Option names defined directly in `section`, without defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSection`] if the section does not exist; this
    /// includes `DEFAULT`.
    pub fn options(&self, section: &str) -> Result<Vec<&str>> {
        let found = self
            .document
            .section(section)
            .ok_or_else(|| no_section(section))?;
        Ok(found.keys().collect())
    }

    /// Returns true if `option` is set in `section` or in the defaults.
    ///
    /// With `DEFAULT` as the section only the defaults are checked. An
    /// absent section yields false.
    #[must_use]
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.document
            .view(section)
            .is_some_and(|view| view.get(option).is_some())
    }

    /// Interpolated value of `option`.
    ///
    /// # Errors
    ///
    /// See [`ConfigParser::get_with`].
    pub fn get(&self, section: &str, option: &str) -> Result<String> {
        self.get_with(section, option, false, None)
    }

    /// Raw value of `option`, without interpolation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSection`] or [`Error::NoOption`].
    pub fn get_raw(&self, section: &str, option: &str) -> Result<&str> {
        let view = self.view(section)?;
        view.get(option).ok_or_else(|| no_option(section, option))
    }

    /// Looks up `option` in `overrides`, then `section`, then the defaults.
    ///
    /// Unless `raw` is set, the value is interpolated with the same lookup
    /// chain.
    ///
    /// # Errors
    ///
    /// - [`Error::NoSection`] if the section does not exist
    /// - [`Error::NoOption`] if the option is found nowhere
    /// - [`Error::Interpolation`] if expansion fails
    pub fn get_with(
        &self,
        section: &str,
        option: &str,
        raw: bool,
        overrides: Option<&Overrides>,
    ) -> Result<String> {
        let scope = Scope::new(self.view(section)?, overrides);
        let value = scope
            .lookup(option)
            .ok_or_else(|| no_option(section, option))?;

        if raw {
            return Ok(value.to_owned());
        }
        Ok(interpolate::interpolate(
            self.settings.interpolation,
            &scope,
            option,
            value,
        )?)
    }

    /// Sets an option. `DEFAULT` addresses the defaults.
    ///
    /// # Errors
    ///
    /// - [`Error::UnrepresentableValue`] if the value would not read back
    ///   unchanged after writing (surrounding whitespace, an inline `;`,
    ///   empty or comment-like continuation lines)
    /// - [`Error::NoSection`] if the section does not exist
    pub fn set(&mut self, section: &str, option: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        serializer::check_writable(&value).map_err(|reason| Error::UnrepresentableValue {
            section: section.to_owned(),
            option: option.to_owned(),
            reason,
        })?;

        if self.document.set(section, option, value) {
            Ok(())
        } else {
            Err(no_section(section))
        }
    }

    /// Sets an option from any displayable value.
    ///
    /// Text values (`str`, `String`) are always accepted. Other types are
    /// stored as their [`Display`](fmt::Display) rendering, unless the
    /// parser uses strict value typing.
    ///
    /// # Errors
    ///
    /// - [`Error::NonStringValue`] for non-text values in strict mode
    /// - [`Error::NoSection`] if the section does not exist
    pub fn set_display<T>(&mut self, section: &str, option: &str, value: &T) -> Result<()>
    where
        T: fmt::Display + ?Sized + 'static,
    {
        let is_text = TypeId::of::<T>() == TypeId::of::<str>()
            || TypeId::of::<T>() == TypeId::of::<String>();

        if self.settings.strict_values && !is_text {
            return Err(Error::NonStringValue {
                section: section.to_owned(),
                option: option.to_owned(),
                type_name: any::type_name::<T>(),
            });
        }
        self.set(section, option, value.to_string())
    }

    /// Removes an option from `section` (or the defaults). Returns whether
    /// it existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSection`] if the section does not exist.
    pub fn remove_option(&mut self, section: &str, option: &str) -> Result<bool> {
        let key = self.document.normalize(option);
        let target = self
            .document
            .section_mut(section)
            .ok_or_else(|| no_section(section))?;
        Ok(target.remove(&key).is_some())
    }

    /// Interpolated `(name, value)` pairs; see [`ConfigParser::items_with`].
    ///
    /// # Errors
    ///
    /// See [`ConfigParser::items_with`].
    pub fn items(&self, section: &str) -> Result<Vec<(String, String)>> {
        self.items_with(section, false, None)
    }

    /// `(name, value)` pairs: the section's own options in insertion order,
    /// then defaults it does not shadow, in defaults order.
    ///
    /// `overrides` only feed interpolation; they add no items.
    ///
    /// # Errors
    ///
    /// - [`Error::NoSection`] if the section does not exist
    /// - [`Error::Interpolation`] if any value fails to expand
    pub fn items_with(
        &self,
        section: &str,
        raw: bool,
        overrides: Option<&Overrides>,
    ) -> Result<Vec<(String, String)>> {
        let view = self.view(section)?;
        let scope = Scope::new(view, overrides);
        let mode = if raw {
            Interpolation::None
        } else {
            self.settings.interpolation
        };

        view.merged()
            .into_iter()
            .map(|(key, entry)| -> Result<(String, String)> {
                let value = interpolate::interpolate(mode, &scope, key, entry.value())?;
                Ok((key.to_owned(), value))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Reads each path in order, skipping files that cannot be opened.
    ///
    /// Later files override earlier ones. Returns the paths that were read.
    ///
    /// # Errors
    ///
    /// Decode and parse failures in files that were opened are errors.
    pub fn read<I, P>(&mut self, paths: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut read = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let Some(bytes) = file::read_if_readable(path) else {
                continue;
            };
            self.read_bytes(&bytes, &path.display().to_string())?;
            read.push(path.to_path_buf());
        }
        Ok(read)
    }

    /// Reads one stream. `source_name` labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, or any decode or parse error.
    pub fn read_from<R: Read>(&mut self, mut reader: R, source_name: &str) -> Result<()> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(source_name, e))?;
        self.read_bytes(&bytes, source_name)
    }

    /// Parses in-memory text. `source_name` labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSectionHeader`] or [`Error::Parsing`].
    pub fn read_str(&mut self, text: &str, source_name: &str) -> Result<()> {
        load::load(
            &mut self.document,
            text,
            source_name,
            self.settings.allow_headerless,
        )
    }

    fn read_bytes(&mut self, bytes: &[u8], source_name: &str) -> Result<()> {
        let text = self.settings.encoding.decode(bytes, source_name)?;
        self.read_str(&text, source_name)
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Renders the document as INI text.
    #[must_use]
    pub fn to_ini_string(&self) -> String {
        serializer::to_ini_string(&self.document, self.settings.interpolation)
    }

    /// Writes the document to `sink` in the configured encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] or [`Error::Io`].
    pub fn write<W: io::Write>(&self, mut sink: W) -> Result<()> {
        let bytes = self.encoded(OUTPUT_NAME)?;
        sink.write_all(&bytes)
            .and_then(|()| sink.flush())
            .map_err(|e| Error::io(OUTPUT_NAME, e))
    }

    /// Writes the document to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] or [`Error::Io`].
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let bytes = self.encoded(&name)?;
        file::write_atomic(path, &bytes).map_err(|e| Error::io(name, e))
    }

    fn encoded(&self, sink_name: &str) -> Result<Vec<u8>> {
        self.settings
            .encoding
            .encode(&self.to_ini_string(), sink_name)
    }

    fn view(&self, section: &str) -> Result<SectionView<'_>> {
        self.document
            .view(section)
            .ok_or_else(|| no_section(section))
    }
}

fn no_section(section: &str) -> Error {
    Error::NoSection {
        section: section.to_owned(),
    }
}

fn no_option(section: &str, option: &str) -> Error {
    Error::NoOption {
        section: section.to_owned(),
        option: option.to_owned(),
    }
}
