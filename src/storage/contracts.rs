//! Contract repository for JSON storage
//!
//! Manages loading and saving contracts to contracts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GestorError;
use crate::models::{Contract, ContractId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable contract data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ContractData {
    contracts: Vec<Contract>,
}

/// Repository for contract persistence
pub struct ContractRepository {
    path: PathBuf,
    data: RwLock<HashMap<ContractId, Contract>>,
}

impl ContractRepository {
    /// Create a new contract repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load contracts from disk
    pub fn load(&self) -> Result<(), GestorError> {
        let file_data: ContractData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for contract in file_data.contracts {
            data.insert(contract.id, contract);
        }

        Ok(())
    }

    /// Save contracts to disk
    pub fn save(&self) -> Result<(), GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ContractData {
            contracts: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a contract by ID
    pub fn get(&self, id: ContractId) -> Result<Option<Contract>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all contracts, sorted by client name
    pub fn get_all(&self) -> Result<Vec<Contract>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut contracts: Vec<_> = data.values().cloned().collect();
        contracts.sort_by(|a, b| a.client.cmp(&b.client));
        Ok(contracts)
    }

    /// Get a contract by client name (case-insensitive)
    pub fn get_by_client(&self, client: &str) -> Result<Option<Contract>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let client_lower = client.to_lowercase();
        Ok(data
            .values()
            .find(|c| c.client.to_lowercase() == client_lower)
            .cloned())
    }

    /// Insert or update a contract
    pub fn upsert(&self, contract: Contract) -> Result<(), GestorError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(contract.id, contract);
        Ok(())
    }

    /// Delete a contract
    pub fn delete(&self, id: ContractId) -> Result<bool, GestorError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a client name is already taken
    pub fn client_exists(
        &self,
        client: &str,
        exclude_id: Option<ContractId>,
    ) -> Result<bool, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let client_lower = client.to_lowercase();
        Ok(data
            .values()
            .any(|c| c.client.to_lowercase() == client_lower && Some(c.id) != exclude_id))
    }

    /// Count contracts
    pub fn count(&self) -> Result<usize, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ContractRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contracts.json");
        let repo = ContractRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let contract = Contract::new("Acme Ltda", "01/01/2024", Money::from_cents(120000));
        let id = contract.id;

        repo.upsert(contract).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.client, "Acme Ltda");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();

        let contract = Contract::new("Beta SA", "01/02/2024", Money::zero());
        let id = contract.id;

        repo.load().unwrap();
        repo.upsert(contract).unwrap();
        repo.save().unwrap();

        // Create new repo and load
        let path = temp_dir.path().join("contracts.json");
        let repo2 = ContractRepository::new(path);
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.client, "Beta SA");
    }

    #[test]
    fn test_get_by_client() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let contract = Contract::new("Acme Ltda", "01/01/2024", Money::zero());
        repo.upsert(contract).unwrap();

        // Case insensitive
        let found = repo.get_by_client("acme ltda").unwrap();
        assert!(found.is_some());

        let not_found = repo.get_by_client("other").unwrap();
        assert!(not_found.is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let contract = Contract::new("Acme Ltda", "01/01/2024", Money::zero());
        let id = contract.id;

        repo.upsert(contract).unwrap();
        assert!(repo.delete(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_client_exists() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let contract = Contract::new("Acme Ltda", "01/01/2024", Money::zero());
        let id = contract.id;
        repo.upsert(contract).unwrap();

        assert!(repo.client_exists("acme ltda", None).unwrap());
        assert!(!repo.client_exists("acme ltda", Some(id)).unwrap());
        assert!(!repo.client_exists("other", None).unwrap());
    }

    #[test]
    fn test_get_all_sorted_by_client() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Contract::new("Zeta", "01/01/2024", Money::zero()))
            .unwrap();
        repo.upsert(Contract::new("Alfa", "01/01/2024", Money::zero()))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].client, "Alfa");
        assert_eq!(all[1].client, "Zeta");
    }
}
