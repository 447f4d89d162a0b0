//! emopick - a debounced, searchable emoji picker
//!
//! This library provides the state machine behind an emoji picker overlay
//! (a filterable list whose query is applied after a short idle delay), the
//! timer abstraction it is driven by, and a ratatui front end.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod filter;
pub mod glyphs;
pub mod picker;
pub mod scheduler;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PickerError {
    /// Glyph table error
    #[error("Glyph table error: {0}")]
    GlyphError(#[from] glyphs::GlyphError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
