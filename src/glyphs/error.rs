//! Glyph table error types

use thiserror::Error;

/// Errors that can occur while loading a glyph table
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The glyph file could not be read
    #[error("Failed to read glyph table: {0}")]
    Io(#[from] std::io::Error),

    /// The glyph file is not valid TOML or has the wrong shape
    #[error("Failed to parse glyph table: {0}")]
    Parse(#[from] toml::de::Error),

    /// An entry has an empty key or value
    #[error("Glyph entry #{index} has an empty {field}")]
    EmptyField {
        /// Zero-based position of the entry in the file
        index: usize,
        /// Name of the empty field (`key` or `value`)
        field: &'static str,
    },
}

/// Result type for glyph table operations
pub type Result<T> = std::result::Result<T, GlyphError>;
