//! Financial category model
//!
//! Categories are grouping keys for monthly cost records. Each category has a
//! kind (renda, impostos, despesas), an optional display section, and a flag
//! marking whether its costs enter the shared-cost (rateio) pool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Kind of financial category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Revenue lines
    Renda,
    /// Tax lines (subject to post-termination suppression in reports)
    Impostos,
    /// Expense lines
    Despesas,
}

impl CategoryKind {
    /// Parse a category kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "renda" | "revenue" | "income" => Some(Self::Renda),
            "impostos" | "imposto" | "taxes" | "tax" => Some(Self::Impostos),
            "despesas" | "despesa" | "expenses" | "expense" => Some(Self::Despesas),
            _ => None,
        }
    }

    /// All kinds, in display order
    pub fn all() -> [CategoryKind; 3] {
        [Self::Renda, Self::Impostos, Self::Despesas]
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renda => write!(f, "Renda"),
            Self::Impostos => write!(f, "Impostos"),
            Self::Despesas => write!(f, "Despesas"),
        }
    }
}

/// A financial category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialCategory {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (e.g., "Aluguel")
    pub name: String,

    /// Category kind
    pub kind: CategoryKind,

    /// Optional display section (purely a grouping label)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Whether this category's monthly costs enter the rateio pool
    #[serde(default)]
    pub shared: bool,

    /// Sort order for display
    #[serde(default)]
    pub sort_order: i32,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl FinancialCategory {
    /// Create a new category
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            section: None,
            shared: false,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new category inside a display section
    pub fn with_section(
        name: impl Into<String>,
        kind: CategoryKind,
        section: impl Into<String>,
    ) -> Self {
        let mut category = Self::new(name, kind);
        category.section = Some(section.into());
        category
    }

    /// Mark this category as part of the rateio pool
    pub fn set_shared(&mut self, shared: bool) {
        self.shared = shared;
        self.updated_at = Utc::now();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for FinancialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = FinancialCategory::new("Aluguel", CategoryKind::Despesas);
        assert_eq!(category.name, "Aluguel");
        assert_eq!(category.kind, CategoryKind::Despesas);
        assert!(!category.shared);
        assert!(category.section.is_none());
    }

    #[test]
    fn test_with_section() {
        let category =
            FinancialCategory::with_section("Simples Nacional", CategoryKind::Impostos, "Federais");
        assert_eq!(category.section.as_deref(), Some("Federais"));
    }

    #[test]
    fn test_set_shared() {
        let mut category = FinancialCategory::new("Energia", CategoryKind::Despesas);
        category.set_shared(true);
        assert!(category.shared);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(CategoryKind::parse("renda"), Some(CategoryKind::Renda));
        assert_eq!(CategoryKind::parse("IMPOSTOS"), Some(CategoryKind::Impostos));
        assert_eq!(CategoryKind::parse("expenses"), Some(CategoryKind::Despesas));
        assert_eq!(CategoryKind::parse("nope"), None);
    }

    #[test]
    fn test_validation() {
        let mut category = FinancialCategory::new("Internet", CategoryKind::Despesas);
        assert!(category.validate().is_ok());

        category.name = "  ".into();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(101);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let category = FinancialCategory::new("ISS", CategoryKind::Impostos);
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: FinancialCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(category.id, deserialized.id);
        assert_eq!(category.kind, deserialized.kind);
    }
}
