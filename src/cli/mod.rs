//! Command-line interface for bujo.

pub mod args;
pub mod commands;
