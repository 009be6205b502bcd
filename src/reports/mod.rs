//! Reports module for gestor
//!
//! Yearly monthly-aggregation reports over the contract portfolio: boleto
//! issuance fees, shared-cost division (rateio), annual category tables and
//! profit analysis.

pub mod boletos;
pub mod category_year;
pub mod profit;
pub mod rateio;

pub use boletos::BoletoReport;
pub use category_year::{CategoryYearReport, CategoryYearRow};
pub use profit::ProfitReport;
pub use rateio::RateioReport;
