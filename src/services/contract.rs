//! Contract service
//!
//! Provides business logic for contract management: registration, lookup,
//! edits, termination and status switching. Data entry is strict here (real
//! calendar dates, termination not before start) even though the aggregation
//! layer stays lenient about whatever ends up stored.

use crate::error::{GestorError, GestorResult};
use crate::models::{parse_date_strict, Contract, ContractId, ContractStatus, Money};
use crate::storage::Storage;

/// Service for contract management
pub struct ContractService<'a> {
    storage: &'a Storage,
}

impl<'a> ContractService<'a> {
    /// Create a new contract service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new contract
    pub fn create(
        &self,
        client: &str,
        start_date: &str,
        monthly_fee: Money,
    ) -> GestorResult<Contract> {
        let client = client.trim();
        if client.is_empty() {
            return Err(GestorError::Validation("Client name cannot be empty".into()));
        }

        if parse_date_strict(start_date).is_none() {
            return Err(GestorError::Validation(format!(
                "Invalid start date '{}' (expected DD/MM/YYYY)",
                start_date
            )));
        }

        // Check for duplicate client
        if self.storage.contracts.client_exists(client, None)? {
            return Err(GestorError::Duplicate {
                entity_type: "Contract",
                identifier: client.to_string(),
            });
        }

        let contract = Contract::new(client, start_date.trim(), monthly_fee);
        contract
            .validate()
            .map_err(|e| GestorError::Validation(e.to_string()))?;

        self.storage.contracts.upsert(contract.clone())?;
        self.storage.contracts.save()?;

        Ok(contract)
    }

    /// Get a contract by ID
    pub fn get(&self, id: ContractId) -> GestorResult<Option<Contract>> {
        self.storage.contracts.get(id)
    }

    /// Find a contract by client name or ID string
    pub fn find(&self, identifier: &str) -> GestorResult<Option<Contract>> {
        // Try by client name first
        if let Some(contract) = self.storage.contracts.get_by_client(identifier)? {
            return Ok(Some(contract));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<ContractId>() {
            return self.storage.contracts.get(id);
        }

        Ok(None)
    }

    /// List all contracts
    pub fn list(&self) -> GestorResult<Vec<Contract>> {
        self.storage.contracts.get_all()
    }

    /// Update a contract's client name and/or monthly fee
    pub fn update(
        &self,
        id: ContractId,
        client: Option<&str>,
        monthly_fee: Option<Money>,
        notes: Option<&str>,
    ) -> GestorResult<Contract> {
        let mut contract = self
            .storage
            .contracts
            .get(id)?
            .ok_or_else(|| GestorError::contract_not_found(id.to_string()))?;

        if let Some(new_client) = client {
            let new_client = new_client.trim();
            if new_client.is_empty() {
                return Err(GestorError::Validation("Client name cannot be empty".into()));
            }

            if self.storage.contracts.client_exists(new_client, Some(id))? {
                return Err(GestorError::Duplicate {
                    entity_type: "Contract",
                    identifier: new_client.to_string(),
                });
            }

            contract.client = new_client.to_string();
        }

        if let Some(fee) = monthly_fee {
            contract.monthly_fee = fee;
        }

        if let Some(notes) = notes {
            contract.notes = notes.to_string();
        }

        contract.updated_at = chrono::Utc::now();
        contract
            .validate()
            .map_err(|e| GestorError::Validation(e.to_string()))?;

        self.storage.contracts.upsert(contract.clone())?;
        self.storage.contracts.save()?;

        Ok(contract)
    }

    /// Close a contract on the given date.
    ///
    /// Sets only the termination date; the status stays as-is so the contract
    /// keeps billing through its termination month.
    pub fn terminate(&self, id: ContractId, date: &str) -> GestorResult<Contract> {
        let mut contract = self
            .storage
            .contracts
            .get(id)?
            .ok_or_else(|| GestorError::contract_not_found(id.to_string()))?;

        if parse_date_strict(date).is_none() {
            return Err(GestorError::Validation(format!(
                "Invalid termination date '{}' (expected DD/MM/YYYY)",
                date
            )));
        }

        contract.terminate(date.trim());
        contract
            .validate()
            .map_err(|e| GestorError::Validation(e.to_string()))?;

        self.storage.contracts.upsert(contract.clone())?;
        self.storage.contracts.save()?;

        Ok(contract)
    }

    /// Remove a contract's termination date (reopen it)
    pub fn reopen(&self, id: ContractId) -> GestorResult<Contract> {
        let mut contract = self
            .storage
            .contracts
            .get(id)?
            .ok_or_else(|| GestorError::contract_not_found(id.to_string()))?;

        contract.clear_termination();

        self.storage.contracts.upsert(contract.clone())?;
        self.storage.contracts.save()?;

        Ok(contract)
    }

    /// Flip the contract status
    pub fn set_status(&self, id: ContractId, status: ContractStatus) -> GestorResult<Contract> {
        let mut contract = self
            .storage
            .contracts
            .get(id)?
            .ok_or_else(|| GestorError::contract_not_found(id.to_string()))?;

        contract.set_status(status);

        self.storage.contracts.upsert(contract.clone())?;
        self.storage.contracts.save()?;

        Ok(contract)
    }

    /// Delete a contract
    pub fn delete(&self, id: ContractId) -> GestorResult<()> {
        if !self.storage.contracts.delete(id)? {
            return Err(GestorError::contract_not_found(id.to_string()));
        }
        self.storage.contracts.save()?;
        Ok(())
    }
}
