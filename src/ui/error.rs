//! UI error types

use thiserror::Error;

/// Errors that can occur while running the picker on a terminal
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The terminal cannot host the picker
    #[error("Terminal unavailable: {0}")]
    Terminal(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
