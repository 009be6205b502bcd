//! Monthly cost record model
//!
//! A cost record holds one category's value for one (year, month) pair.
//! Uniqueness of (category, year, month) is enforced by the repository's
//! upsert, not by the record itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, CostRecordId};
use super::money::Money;

/// A monthly value recorded against a financial category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRecord {
    /// Unique identifier
    pub id: CostRecordId,

    /// Category this record belongs to
    pub category_id: CategoryId,

    /// Calendar year
    pub year: i32,

    /// 1-based calendar month (1-12)
    pub month: u32,

    /// Recorded value
    pub value: Money,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl CostRecord {
    /// Create a new cost record
    pub fn new(category_id: CategoryId, year: i32, month: u32, value: Money) -> Self {
        Self {
            id: CostRecordId::new(),
            category_id,
            year,
            month,
            value,
            updated_at: Utc::now(),
        }
    }

    /// The 0-based month index (January = 0)
    pub fn month_index(&self) -> usize {
        (self.month - 1) as usize
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), CostRecordValidationError> {
        if !(1..=12).contains(&self.month) {
            return Err(CostRecordValidationError::InvalidMonth(self.month));
        }
        Ok(())
    }
}

/// Validation errors for cost records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostRecordValidationError {
    InvalidMonth(u32),
}

impl fmt::Display for CostRecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "Invalid month: {} (expected 1-12)", m),
        }
    }
}

impl std::error::Error for CostRecordValidationError {}
