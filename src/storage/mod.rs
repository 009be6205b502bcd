//! Storage layer for gestor
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod categories;
pub mod contracts;
pub mod cost_records;
pub mod file_io;
pub mod init;

pub use categories::CategoryRepository;
pub use contracts::ContractRepository;
pub use cost_records::CostRecordRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use crate::config::paths::GestorPaths;
use crate::error::GestorError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: GestorPaths,
    pub contracts: ContractRepository,
    pub categories: CategoryRepository,
    pub cost_records: CostRecordRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: GestorPaths) -> Result<Self, GestorError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            contracts: ContractRepository::new(paths.contracts_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            cost_records: CostRecordRepository::new(paths.cost_records_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &GestorPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), GestorError> {
        self.contracts.load()?;
        self.categories.load()?;
        self.cost_records.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), GestorError> {
        self.contracts.save()?;
        self.categories.save()?;
        self.cost_records.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GestorPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_on_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GestorPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.contracts.count().unwrap(), 0);
        assert_eq!(storage.categories.count().unwrap(), 0);
        assert_eq!(storage.cost_records.count().unwrap(), 0);
    }
}
