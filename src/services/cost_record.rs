//! Cost record service
//!
//! Business logic for monthly values: setting, clearing and listing records
//! with month-range validation and category existence checks.

use crate::error::{GestorError, GestorResult};
use crate::models::{CategoryId, CostRecord, Money};
use crate::storage::Storage;

/// Service for monthly cost record management
pub struct CostRecordService<'a> {
    storage: &'a Storage,
}

impl<'a> CostRecordService<'a> {
    /// Create a new cost record service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the value for a category's (year, month), replacing any previous value
    pub fn set(
        &self,
        category_id: CategoryId,
        year: i32,
        month: u32,
        value: Money,
    ) -> GestorResult<CostRecord> {
        if !(1..=12).contains(&month) {
            return Err(GestorError::Validation(format!(
                "Invalid month: {} (expected 1-12)",
                month
            )));
        }

        // Verify category exists
        if self.storage.categories.get(category_id)?.is_none() {
            return Err(GestorError::category_not_found(category_id.to_string()));
        }

        let record = self
            .storage
            .cost_records
            .set_value(category_id, year, month, value)?;
        self.storage.cost_records.save()?;

        Ok(record)
    }

    /// Clear the value for a category's (year, month)
    pub fn clear(&self, category_id: CategoryId, year: i32, month: u32) -> GestorResult<bool> {
        let removed = self.storage.cost_records.clear_value(category_id, year, month)?;
        if removed {
            self.storage.cost_records.save()?;
        }
        Ok(removed)
    }

    /// List all records for a year
    pub fn list_year(&self, year: i32) -> GestorResult<Vec<CostRecord>> {
        self.storage.cost_records.get_by_year(year)
    }

    /// List one category's records for a year
    pub fn list_category_year(
        &self,
        category_id: CategoryId,
        year: i32,
    ) -> GestorResult<Vec<CostRecord>> {
        self.storage.cost_records.get_by_category_year(category_id, year)
    }
}
