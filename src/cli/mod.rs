//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod contract;
pub mod cost;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use contract::{handle_contract_command, ContractCommands};
pub use cost::{handle_cost_command, CostCommands};
pub use report::{handle_report_command, ReportCommands};
