//! Command implementations for bujo.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod lex;
mod parse;

pub use config::config;
pub use lex::lex_line;
pub use parse::parse_lines;
