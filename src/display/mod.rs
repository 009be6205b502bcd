//! Terminal display formatting for gestor
//!
//! Plain-string renderers used by the CLI handlers. Reports carry their own
//! `format_terminal` methods; this module covers entity views and shared
//! helpers.

pub mod category;
pub mod contract;
pub mod report;

pub use category::{format_category_details, format_category_list, format_category_tree};
pub use contract::{format_contract_details, format_contract_list, format_contract_summary};
pub use report::MONTH_ABBREV;
