//! Glyph tables
//!
//! A glyph table is the ordered list of `(shortcode, glyph)` pairs the picker
//! searches over. The built-in table covers common chat shortcodes; custom
//! tables can be loaded from TOML:
//!
//! ```toml
//! [[glyph]]
//! key = "smile"
//! value = "😄"
//!
//! [[glyph]]
//! key = "crab"
//! value = "🦀"
//! ```
//!
//! File order is kept and becomes the unfiltered display order.

mod error;
mod table;

pub use error::{GlyphError, Result};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Displayable glyph (usually a single emoji grapheme)
pub type Glyph = String;

/// A searchable shortcode paired with its glyph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Human-searchable shortcode, e.g. `smile`
    pub key: String,
    /// The glyph shown for this shortcode
    pub value: Glyph,
}

impl Entry {
    /// Create a new entry
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Glyph>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GlyphFile {
    #[serde(default)]
    glyph: Vec<Entry>,
}

/// Ordered, immutable collection of glyph entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    entries: Vec<Entry>,
}

impl GlyphTable {
    /// Build a table from already constructed entries
    #[must_use]
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The built-in shortcode table
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            table::BUILTIN
                .iter()
                .map(|&(key, value)| Entry::new(key, value))
                .collect(),
        )
    }

    /// Parse a table from TOML text
    ///
    /// # Errors
    ///
    /// Returns `GlyphError::Parse` for malformed TOML and
    /// `GlyphError::EmptyField` if an entry has an empty key or value.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: GlyphFile = toml::from_str(text)?;

        for (index, entry) in file.glyph.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(GlyphError::EmptyField { index, field: "key" });
            }
            if entry.value.is_empty() {
                return Err(GlyphError::EmptyField {
                    index,
                    field: "value",
                });
            }
        }

        Ok(Self::new(file.glyph))
    }

    /// Load a table from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `GlyphError::Io` if the file cannot be read, otherwise the
    /// same errors as [`GlyphTable::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), entries = table.len(), "loaded glyph table");
        Ok(table)
    }

    /// Entries in display order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the glyph for a shortcode
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Hand the entries over, e.g. to build a picker
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
