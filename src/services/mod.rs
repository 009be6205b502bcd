//! Business logic layer for gestor
//!
//! Services wrap the storage repositories with validation and the rules that
//! keep the data consistent (duplicate checks, lifecycle constraints, guarded
//! deletes).

pub mod category;
pub mod contract;
pub mod cost_record;

pub use category::{CategoryService, KindWithCategories};
pub use contract::ContractService;
pub use cost_record::CostRecordService;
