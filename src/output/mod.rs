//! Output formatting for bujo.
//!
//! This module provides formatters for displaying tokens and records in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::BujoError;
use crate::journal::{Record, Token};

pub use json::*;
pub use pretty::*;

/// Format parsed records based on output format
///
/// # Errors
///
/// Returns `BujoError::Json` if JSON serialization fails.
pub fn format_records(records: &[Record], format: OutputFormat) -> Result<String, BujoError> {
    match format {
        OutputFormat::Pretty => Ok(format_records_pretty(records)),
        OutputFormat::Json => format_records_json(records),
    }
}

/// Format the tokens of one line based on output format
///
/// # Errors
///
/// Returns `BujoError::Json` if JSON serialization fails.
pub fn format_tokens(line: &str, tokens: &[Token<'_>], format: OutputFormat) -> Result<String, BujoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tokens_pretty(tokens)),
        OutputFormat::Json => format_tokens_json(line, tokens),
    }
}
