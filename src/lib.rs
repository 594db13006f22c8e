//! bujo - A bullet journal line parser
//!
//! This crate turns a single line of bullet journal shorthand into a
//! structured [`Record`](journal::Record): an `@` event with an optional
//! time, or a `!` task with a state. See [`journal`] for the grammar.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod journal;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::BujoError;
pub use journal::{lex, parse, Record};
