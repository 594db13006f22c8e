//! `bujo parse` command implementation.

use tracing::info;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::error::BujoError;
use crate::journal::{parse, Record};
use crate::output::format_records;

/// Execute the parse command.
///
/// Lines are parsed independently; the first rejected line aborts the command.
///
/// # Errors
///
/// Returns the parse error of the first rejected line, or an error if
/// output formatting fails.
pub fn parse_lines(args: &ParseArgs, format: OutputFormat) -> Result<String, BujoError> {
    let records = args
        .lines
        .iter()
        .map(String::as_str)
        .map(parse)
        .collect::<Result<Vec<Record>, _>>()?;

    info!(count = records.len(), "parsed lines");
    format_records(&records, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{LexError, ParseError};

    fn args(lines: &[&str]) -> ParseArgs {
        ParseArgs {
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_lines_json() {
        let output = parse_lines(
            &args(&["@ [12:00 am] Midnight #edge-case", "! Dishes"]),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["items"][0]["time"]["hour"], 0);
        assert_eq!(value["items"][1]["state"], "ready");
    }

    #[test]
    fn test_parse_lines_stops_at_first_error() {
        let err = parse_lines(&args(&["@ ok", "- nope", "x"]), OutputFormat::Pretty).unwrap_err();

        assert!(matches!(
            err,
            BujoError::Parse(ParseError::InvalidEntryType { .. })
        ));
    }

    #[test]
    fn test_parse_lines_reports_lex_error() {
        let err = parse_lines(&args(&["hello"]), OutputFormat::Pretty).unwrap_err();

        assert!(matches!(
            err,
            BujoError::Parse(ParseError::Lex(LexError::ExpectedSymbol { found: 'h' }))
        ));
        assert_eq!(err.to_string(), "Expected symbol, got \"h\"");
    }
}
