//! User settings for gestor
//!
//! Manages user preferences, currently the default per-contract boleto fee
//! used by the billing report.

use serde::{Deserialize, Serialize};

use super::paths::GestorPaths;
use crate::error::GestorError;
use crate::models::Money;

/// User settings for gestor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default per-contract boleto issuance fee, in cents
    #[serde(default = "default_boleto_fee_cents")]
    pub boleto_fee_cents: i64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_boleto_fee_cents() -> i64 {
    350 // R$3.50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            boleto_fee_cents: default_boleto_fee_cents(),
        }
    }
}

impl Settings {
    /// The default boleto fee as a Money amount
    pub fn boleto_fee(&self) -> Money {
        Money::from_cents(self.boleto_fee_cents)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GestorPaths) -> Result<Self, GestorError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| GestorError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| GestorError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GestorPaths) -> Result<(), GestorError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GestorError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| GestorError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
