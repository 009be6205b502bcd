//! Cost record repository for JSON storage
//!
//! Manages monthly cost records in cost_records.json. The `set_value` upsert
//! keys on (category, year, month), which is what makes that triple unique in
//! practice.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GestorError;
use crate::models::{CategoryId, CostRecord, CostRecordId, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable cost record data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CostRecordData {
    records: Vec<CostRecord>,
}

/// Repository for cost record persistence
pub struct CostRecordRepository {
    path: PathBuf,
    data: RwLock<HashMap<CostRecordId, CostRecord>>,
}

impl CostRecordRepository {
    /// Create a new cost record repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), GestorError> {
        let file_data: CostRecordData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.records {
            data.insert(record.id, record);
        }

        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CostRecordData {
            records: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Set the value for (category, year, month), replacing any existing
    /// record for that triple. Returns the stored record.
    pub fn set_value(
        &self,
        category_id: CategoryId,
        year: i32,
        month: u32,
        value: Money,
    ) -> Result<CostRecord, GestorError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(existing) = data
            .values_mut()
            .find(|r| r.category_id == category_id && r.year == year && r.month == month)
        {
            existing.value = value;
            existing.updated_at = chrono::Utc::now();
            return Ok(existing.clone());
        }

        let record = CostRecord::new(category_id, year, month, value);
        data.insert(record.id, record.clone());
        Ok(record)
    }

    /// Get the record for (category, year, month), if any
    pub fn get_value(
        &self,
        category_id: CategoryId,
        year: i32,
        month: u32,
    ) -> Result<Option<CostRecord>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|r| r.category_id == category_id && r.year == year && r.month == month)
            .cloned())
    }

    /// Remove the record for (category, year, month). Returns whether one existed.
    pub fn clear_value(
        &self,
        category_id: CategoryId,
        year: i32,
        month: u32,
    ) -> Result<bool, GestorError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = data
            .values()
            .find(|r| r.category_id == category_id && r.year == year && r.month == month)
            .map(|r| r.id);

        Ok(match id {
            Some(id) => data.remove(&id).is_some(),
            None => false,
        })
    }

    /// Get all records for a year, ordered by (category, month)
    pub fn get_by_year(&self, year: i32) -> Result<Vec<CostRecord>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().filter(|r| r.year == year).cloned().collect();
        records.sort_by(|a, b| {
            (a.category_id.as_uuid(), a.month).cmp(&(b.category_id.as_uuid(), b.month))
        });
        Ok(records)
    }

    /// Get all records for one category in a year, ordered by month
    pub fn get_by_category_year(
        &self,
        category_id: CategoryId,
        year: i32,
    ) -> Result<Vec<CostRecord>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data
            .values()
            .filter(|r| r.category_id == category_id && r.year == year)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.month);
        Ok(records)
    }

    /// Delete every record belonging to a category. Returns how many were removed.
    pub fn delete_by_category(&self, category_id: CategoryId) -> Result<usize, GestorError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let ids: Vec<_> = data
            .values()
            .filter(|r| r.category_id == category_id)
            .map(|r| r.id)
            .collect();

        for id in &ids {
            data.remove(id);
        }
        Ok(ids.len())
    }

    /// Whether a category has any records at all
    pub fn category_has_records(&self, category_id: CategoryId) -> Result<bool, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().any(|r| r.category_id == category_id))
    }

    /// Count records
    pub fn count(&self) -> Result<usize, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
