//! JSON output formatting for bujo.

use serde::Serialize;
use serde_json::json;

use crate::error::BujoError;
use crate::journal::{Record, Token};

/// Format records as JSON
///
/// # Errors
///
/// Returns `BujoError::Json` if JSON serialization fails.
pub fn format_records_json(records: &[Record]) -> Result<String, BujoError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single record as JSON
///
/// # Errors
///
/// Returns `BujoError::Json` if JSON serialization fails.
pub fn format_record_json(record: &Record) -> Result<String, BujoError> {
    to_json(record)
}

/// Format the tokens of a line as JSON
///
/// # Errors
///
/// Returns `BujoError::Json` if JSON serialization fails.
pub fn format_tokens_json(line: &str, tokens: &[Token<'_>]) -> Result<String, BujoError> {
    let output = json!({
        "line": line,
        "count": tokens.len(),
        "tokens": tokens
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `BujoError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, BujoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
