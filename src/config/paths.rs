//! Path management for gestor
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `GESTOR_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/gestor-cli` or `~/.config/gestor-cli`
//! 3. Windows: `%APPDATA%\gestor-cli`

use std::path::PathBuf;

use crate::error::GestorError;

/// Manages all paths used by gestor
#[derive(Debug, Clone)]
pub struct GestorPaths {
    /// Base directory for all gestor data
    base_dir: PathBuf,
}

impl GestorPaths {
    /// Create a new GestorPaths instance
    ///
    /// Path resolution:
    /// 1. `GESTOR_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/gestor-cli` or `~/.config/gestor-cli`
    /// 3. Windows: `%APPDATA%\gestor-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, GestorError> {
        let base_dir = if let Ok(custom) = std::env::var("GESTOR_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create GestorPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/gestor-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory (~/.config/gestor-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to contracts.json
    pub fn contracts_file(&self) -> PathBuf {
        self.data_dir().join("contracts.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to cost_records.json
    pub fn cost_records_file(&self) -> PathBuf {
        self.data_dir().join("cost_records.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/gestor-cli/)
    /// - Data directory (~/.config/gestor-cli/data/)
    pub fn ensure_directories(&self) -> Result<(), GestorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GestorError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GestorError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if gestor has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, GestorError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("gestor-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, GestorError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| GestorError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("gestor-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GestorPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GestorPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GestorPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.contracts_file(),
            temp_dir.path().join("data").join("contracts.json")
        );
        assert_eq!(
            paths.cost_records_file(),
            temp_dir.path().join("data").join("cost_records.json")
        );
    }
}
