//! Configuration management for bujo.
//!
//! This module handles loading and saving configuration from `~/.bujo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
