//! Core data models for gestor
//!
//! This module contains the data structures that represent the domain:
//! contracts, financial categories and their monthly cost records.

pub mod category;
pub mod contract;
pub mod cost_record;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{CategoryKind, FinancialCategory};
pub use contract::{Contract, ContractStatus};
pub use cost_record::CostRecord;
pub use ids::{CategoryId, ContractId, CostRecordId};
pub use money::Money;
pub use month::{parse_date_strict, parse_month_soft, MonthKey};
