//! Error types for bujo.

use thiserror::Error;

use crate::journal::{LexError, ParseError};

/// Top-level error for the library and CLI.
#[derive(Debug, Error)]
pub enum BujoError {
    /// A line was rejected by the lexer.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A line could not be turned into a record.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration could not be read or written.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
