//! Path resolution for bujo configuration files.
//!
//! All bujo settings live in `~/.bujo/` (or `$BUJO_HOME` when set):
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::BujoError;

/// Environment variable that overrides the configuration root.
pub const HOME_ENV: &str = "BUJO_HOME";

/// Paths to bujo configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.bujo/`
    pub root: PathBuf,
    /// Config file: `~/.bujo/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `$BUJO_HOME`, falling back to `$HOME/.bujo`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, BujoError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME")
            .map_err(|_| BujoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".bujo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), BujoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                BujoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-bujo");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".bujo"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // second call is a no-op
        paths.ensure_dirs().unwrap();
    }
}
