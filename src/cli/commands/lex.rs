//! `bujo lex` command implementation.

use crate::cli::args::{LexArgs, OutputFormat};
use crate::error::BujoError;
use crate::journal::lex;
use crate::output::format_tokens;

/// Execute the lex command.
///
/// # Errors
///
/// Returns an error if the line has no bullet or output formatting fails.
pub fn lex_line(args: &LexArgs, format: OutputFormat) -> Result<String, BujoError> {
    let tokens = lex(&args.line).collect::<Result<Vec<_>, _>>()?;
    format_tokens(&args.line, &tokens, format)
}
