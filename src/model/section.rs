//! Sections and their option entries.

use indexmap::IndexMap;

/// One `name = value` entry and the source metadata needed to rewrite it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    name: String,
    value: String,
    line: Option<usize>,
    inline_comment: Option<String>,
    comments: Vec<String>,
}

impl OptionEntry {
    /// Creates an entry with no source metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line: None,
            inline_comment: None,
            comments: Vec::new(),
        }
    }

    /// Name as first spelled in the source or by the caller.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value, before interpolation.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 1-based line the option was read from, if it came from a source.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    /// Text of a trailing `; comment` on the assignment line.
    #[must_use]
    pub fn inline_comment(&self) -> Option<&str> {
        self.inline_comment.as_deref()
    }

    /// Full-line comments that followed this option in the source.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub(crate) fn push_continuation(&mut self, text: &str) {
        self.value.push('\n');
        self.value.push_str(text);
    }

    pub(crate) fn push_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }

    #[must_use]
    pub(crate) const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub(crate) fn with_inline_comment(mut self, comment: Option<String>) -> Self {
        self.inline_comment = comment;
        self
    }
}

/// A named, ordered group of options.
///
/// Options are keyed by their normalized name; iteration follows insertion
/// order. A section holds no reference to its document; fallback to the
/// defaults goes through [`SectionView`](super::SectionView).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    line: Option<usize>,
    comments: Vec<String>,
    options: IndexMap<String, OptionEntry>,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name as first spelled.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based line of the first header for this section, if parsed.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    /// Comment lines between the header and the first option.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the section has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Looks up an entry by normalized key.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&OptionEntry> {
        self.options.get(key)
    }

    /// Looks up a raw value by normalized key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(OptionEntry::value)
    }

    /// Returns true if the normalized key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Normalized option keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// `(normalized key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionEntry)> {
        self.options.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub(crate) fn set_line(&mut self, line: usize) {
        self.line.get_or_insert(line);
    }

    pub(crate) fn push_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }

    pub(crate) fn entry_mut(&mut self, key: &str) -> Option<&mut OptionEntry> {
        self.options.get_mut(key)
    }

    /// Inserts or replaces an entry, keeping the original position and
    /// spelling of an existing key.
    pub(crate) fn insert(&mut self, key: String, entry: OptionEntry) {
        match self.options.get_mut(&key) {
            Some(existing) => {
                existing.value = entry.value;
                existing.line = entry.line.or(existing.line);
                if entry.inline_comment.is_some() {
                    existing.inline_comment = entry.inline_comment;
                }
            }
            None => {
                self.options.insert(key, entry);
            }
        }
    }

    /// Removes an entry, preserving the order of the rest.
    pub(crate) fn remove(&mut self, key: &str) -> Option<OptionEntry> {
        self.options.shift_remove(key)
    }
}
