//! Errors raised while lexing and parsing a journal line.
//!
//! Every error is terminal for the line: no partial record is produced.
//! Messages are meant to be shown to the user as-is.

use std::num::ParseIntError;

use thiserror::Error;

use super::token::TokenKind;

/// The line does not start with a bullet marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Expected symbol, got \"{found}\"")]
    ExpectedSymbol { found: char },

    #[error("Expected symbol, got EOF")]
    UnexpectedEof,
}

/// An event annotation could not be read as a clock time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// A digit run was empty or does not fit in a `u32`.
    #[error("Invalid time \"{annotation}\": expected {field} digits, got \"{digits}\"")]
    InvalidNumber {
        /// The full annotation text, without brackets.
        annotation: String,
        /// Which component failed, `hour` or `minute`.
        field: &'static str,
        /// The digit run that failed to parse (often empty).
        digits: String,
        #[source]
        source: ParseIntError,
    },

    /// A `p` meridiem pushed the hour past `u32::MAX`.
    #[error("Invalid time \"{annotation}\": hour {hour} is too large for pm")]
    HourOverflow { annotation: String, hour: u32 },
}

impl AnnotationError {
    /// The time component that failed, `hour` or `minute`.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidNumber { field, .. } => *field,
            Self::HourOverflow { .. } => "hour",
        }
    }
}

/// Failure to turn a line into a [`Record`](super::Record).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Unexpected EOF")]
    UnexpectedEof,

    #[error("Expected bullet, got \"{found}\"")]
    ExpectedBullet { found: TokenKind },

    #[error("Invalid entry type \"{marker}\"")]
    InvalidEntryType { marker: String },

    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}
