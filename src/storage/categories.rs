//! Category repository for JSON storage
//!
//! Manages loading and saving financial categories to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GestorError;
use crate::models::{CategoryId, CategoryKind, FinancialCategory};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<FinancialCategory>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<CategoryId, FinancialCategory>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), GestorError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for category in file_data.categories {
            data.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CategoryData {
            categories: data.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<FinancialCategory>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all categories, ordered by kind, sort order, then name
    pub fn get_all(&self) -> Result<Vec<FinancialCategory>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| {
            (a.kind as u8, a.sort_order, &a.name).cmp(&(b.kind as u8, b.sort_order, &b.name))
        });
        Ok(categories)
    }

    /// Get categories of one kind
    pub fn get_by_kind(&self, kind: CategoryKind) -> Result<Vec<FinancialCategory>, GestorError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|c| c.kind == kind).collect())
    }

    /// Get categories flagged as shared (the rateio pool members)
    pub fn get_shared(&self) -> Result<Vec<FinancialCategory>, GestorError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|c| c.shared).collect())
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<FinancialCategory>, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: FinancialCategory) -> Result<(), GestorError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(category.id, category);
        Ok(())
    }

    /// Delete a category
    pub fn delete(&self, id: CategoryId) -> Result<bool, GestorError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a category name is already taken
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<CategoryId>,
    ) -> Result<bool, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|c| c.name.to_lowercase() == name_lower && Some(c.id) != exclude_id))
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, GestorError> {
        let data = self
            .data
            .read()
            .map_err(|e| GestorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
