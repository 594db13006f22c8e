//! `bujo config` command implementation.

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::BujoError;
use crate::output::to_json;

/// Execute a config subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved, the file already
/// exists (without `--force`), or writing fails.
pub fn config(
    command: &ConfigCommands,
    current: &Config,
    format: OutputFormat,
) -> Result<String, BujoError> {
    match command {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(current),
            OutputFormat::Pretty => current.to_yaml(),
        },
        ConfigCommands::Init { force } => {
            let paths = Paths::new()?;
            if paths.config_file.exists() && !force {
                return Err(BujoError::Config(format!(
                    "Config file already exists at {} (use --force to overwrite)",
                    paths.config_file.display()
                )));
            }
            let path = Config::default().save()?;
            Ok(format!("Wrote {}", path.display()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorSetting;

    #[test]
    fn test_config_show_yaml() {
        let mut current = Config::default();
        current.general.color = ColorSetting::Never;

        let output = config(&ConfigCommands::Show, &current, OutputFormat::Pretty).unwrap();

        assert!(output.contains("general:"));
        assert!(output.contains("color: never"));
        assert!(output.contains("default_output: pretty"));
    }

    #[test]
    fn test_config_show_json() {
        let output = config(&ConfigCommands::Show, &Config::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["general"]["color"], "auto");
    }
}
