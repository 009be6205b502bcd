//! Category service
//!
//! Provides business logic for financial category management: CRUD with
//! duplicate-name checks and a guard against deleting categories that still
//! have cost records.

use crate::error::{GestorError, GestorResult};
use crate::models::{CategoryId, CategoryKind, FinancialCategory};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Categories of one kind grouped by section for display
#[derive(Debug, Clone)]
pub struct KindWithCategories {
    pub kind: CategoryKind,
    pub categories: Vec<FinancialCategory>,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(
        &self,
        name: &str,
        kind: CategoryKind,
        section: Option<&str>,
        shared: bool,
    ) -> GestorResult<FinancialCategory> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GestorError::Validation("Category name cannot be empty".into()));
        }

        // Check for duplicate name (globally)
        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(GestorError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        // Get max sort order
        let existing = self.storage.categories.get_all()?;
        let max_order = existing.iter().map(|c| c.sort_order).max().unwrap_or(-1);

        let mut category = FinancialCategory::new(name, kind);
        category.section = section.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        category.shared = shared;
        category.sort_order = max_order + 1;

        category
            .validate()
            .map_err(|e| GestorError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> GestorResult<Option<FinancialCategory>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> GestorResult<Option<FinancialCategory>> {
        // Try by name first
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(None)
    }

    /// List all categories, optionally filtered by kind
    pub fn list(&self, kind: Option<CategoryKind>) -> GestorResult<Vec<FinancialCategory>> {
        match kind {
            Some(kind) => self.storage.categories.get_by_kind(kind),
            None => self.storage.categories.get_all(),
        }
    }

    /// List all categories grouped by kind, in display order
    pub fn list_by_kind(&self) -> GestorResult<Vec<KindWithCategories>> {
        let mut result = Vec::with_capacity(3);
        for kind in CategoryKind::all() {
            let categories = self.storage.categories.get_by_kind(kind)?;
            result.push(KindWithCategories { kind, categories });
        }
        Ok(result)
    }

    /// Update a category
    pub fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        section: Option<&str>,
        shared: Option<bool>,
    ) -> GestorResult<FinancialCategory> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| GestorError::category_not_found(id.to_string()))?;

        if let Some(new_name) = name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(GestorError::Validation("Category name cannot be empty".into()));
            }

            if self.storage.categories.name_exists(new_name, Some(id))? {
                return Err(GestorError::Duplicate {
                    entity_type: "Category",
                    identifier: new_name.to_string(),
                });
            }

            category.name = new_name.to_string();
        }

        if let Some(new_section) = section {
            let new_section = new_section.trim();
            category.section = if new_section.is_empty() {
                None
            } else {
                Some(new_section.to_string())
            };
        }

        if let Some(shared) = shared {
            category.shared = shared;
        }

        category.updated_at = chrono::Utc::now();
        category
            .validate()
            .map_err(|e| GestorError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Delete a category
    ///
    /// If the category still has cost records, they must be removed first
    /// unless `force` is given, in which case they are deleted too.
    pub fn delete(&self, id: CategoryId, force: bool) -> GestorResult<()> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| GestorError::category_not_found(id.to_string()))?;

        if self.storage.cost_records.category_has_records(id)? {
            if !force {
                return Err(GestorError::Validation(format!(
                    "Cannot delete category '{}' - it has monthly records. Use --force to delete them.",
                    category.name
                )));
            }
            self.storage.cost_records.delete_by_category(id)?;
            self.storage.cost_records.save()?;
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        Ok(())
    }
}
