//! The document: ordered sections plus the defaults pseudo-section.

use indexmap::IndexMap;

use crate::error::{Error, Result};

use super::name::{DEFAULT_SECTION, NamePolicy};
use super::section::{OptionEntry, Section};

/// In-memory INI document.
///
/// Section keys are normalized with the document's [`NamePolicy`]; iteration
/// follows insertion order. The defaults pseudo-section is stored apart and
/// never appears among [`Document::section_names`].
#[derive(Debug, Clone)]
pub struct Document {
    policy: NamePolicy,
    preamble: Vec<String>,
    defaults: Section,
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Creates an empty document using `policy` for all names.
    #[must_use]
    pub fn new(policy: NamePolicy) -> Self {
        Self {
            policy,
            preamble: Vec::new(),
            defaults: Section::new(DEFAULT_SECTION),
            sections: IndexMap::new(),
        }
    }

    /// The name normalization policy.
    #[must_use]
    pub const fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Normalizes `name` with the document's policy.
    #[must_use]
    pub fn normalize(&self, name: &str) -> String {
        self.policy.normalize(name)
    }

    /// Comment lines that appeared before the first section header.
    #[must_use]
    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    /// The defaults pseudo-section.
    #[must_use]
    pub const fn defaults(&self) -> &Section {
        &self.defaults
    }

    /// Normalized section names in insertion order, defaults excluded.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// `(normalized name, section)` pairs in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, s)| (k.as_str(), s))
    }

    /// Looks up a real section; the defaults are never returned.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&self.normalize(name))
    }

    /// Returns true if a real section named `name` exists.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Borrowed lookup chain for `name`: the section, then the defaults.
    ///
    /// Naming the defaults section yields a view over the defaults alone.
    /// Returns `None` if no such section exists.
    #[must_use]
    pub fn view(&self, name: &str) -> Option<SectionView<'_>> {
        let section = if self.policy.is_default_section(name) {
            None
        } else {
            Some(self.section(name)?)
        };

        Some(SectionView {
            section,
            defaults: &self.defaults,
            policy: self.policy,
        })
    }

    /// Adds an empty section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] if the name is taken or reserved.
    pub fn add_section(&mut self, name: &str) -> Result<()> {
        let key = self.normalize(name);
        if self.policy.is_default_section(name) || self.sections.contains_key(&key) {
            return Err(Error::DuplicateSection {
                section: name.to_owned(),
            });
        }

        self.sections.insert(key, Section::new(name.trim()));
        Ok(())
    }

    /// Removes a section. Returns whether it existed.
    pub fn remove_section(&mut self, name: &str) -> bool {
        let key = self.normalize(name);
        self.sections.shift_remove(&key).is_some()
    }

    /// Mutable access to a section or, for the reserved name, the defaults.
    pub(crate) fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        if self.policy.is_default_section(name) {
            return Some(&mut self.defaults);
        }
        let key = self.normalize(name);
        self.sections.get_mut(&key)
    }

    /// Returns the section for a parsed header, creating it on first sight.
    /// Repeated headers merge into the existing section.
    pub(crate) fn section_for_header(&mut self, name: &str, line: usize) -> &mut Section {
        let section = self.section_or_insert(name);
        section.set_line(line);
        section
    }

    /// Returns the named section or the defaults, creating a section if
    /// needed.
    pub(crate) fn section_or_insert(&mut self, name: &str) -> &mut Section {
        if self.policy.is_default_section(name) {
            return &mut self.defaults;
        }
        let key = self.normalize(name);
        self.sections
            .entry(key)
            .or_insert_with(|| Section::new(name.trim()))
    }

    /// Sets an option in an existing section (or the defaults).
    ///
    /// Returns `false` if the section does not exist.
    pub(crate) fn set(&mut self, section: &str, option: &str, value: String) -> bool {
        let key = self.normalize(option);
        let Some(target) = self.section_mut(section) else {
            return false;
        };
        target.insert(key, OptionEntry::new(option.trim(), value));
        true
    }

    pub(crate) fn push_preamble(&mut self, comment: String) {
        self.preamble.push(comment);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(NamePolicy::default())
    }
}

/// A section paired with the document's defaults for fallback lookups.
///
/// Holds shared borrows only; the document keeps ownership.
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    section: Option<&'a Section>,
    defaults: &'a Section,
    policy: NamePolicy,
}

impl<'a> SectionView<'a> {
    /// Name of the viewed section, or the reserved defaults name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.section.map_or(DEFAULT_SECTION, Section::name)
    }

    /// The section itself; `None` when viewing the defaults.
    #[must_use]
    pub const fn local(&self) -> Option<&'a Section> {
        self.section
    }

    /// The defaults section.
    #[must_use]
    pub const fn defaults(&self) -> &'a Section {
        self.defaults
    }

    /// The name policy used for key lookups.
    #[must_use]
    pub const fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Raw value for an already-normalized key: local first, then defaults.
    #[must_use]
    pub fn get_normalized(&self, key: &str) -> Option<&'a str> {
        self.section
            .and_then(|s| s.get(key))
            .or_else(|| self.defaults.get(key))
    }

    /// Raw value for `name`, normalized first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.get_normalized(&self.policy.normalize(name))
    }

    /// Local option keys only, in insertion order.
    #[must_use]
    pub fn local_keys(&self) -> Vec<&'a str> {
        self.section
            .unwrap_or(self.defaults)
            .keys()
            .collect()
    }

    /// Local entries in insertion order, then defaults not shadowed locally.
    #[must_use]
    pub fn merged(&self) -> Vec<(&'a str, &'a OptionEntry)> {
        let Some(section) = self.section else {
            return self.defaults.iter().collect();
        };

        section
            .iter()
            .chain(self.defaults.iter().filter(|(k, _)| !section.contains(k)))
            .collect()
    }
}
