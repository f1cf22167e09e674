//! Document model for INI data.
//!
//! This module provides:
//! - The document container ([`Document`])
//! - Sections and option entries ([`Section`], [`OptionEntry`])
//! - Section-to-defaults lookup chains ([`SectionView`])
//! - Name normalization ([`NamePolicy`])
//!
//! # Ordering
//!
//! Sections and options keep insertion order. Replacing an existing option
//! keeps its position; removing one shifts the rest up.

mod document;
mod name;
mod section;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use document::{Document, SectionView};
pub use name::{DEFAULT_SECTION, NamePolicy};
pub use section::{OptionEntry, Section};
