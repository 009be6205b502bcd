//! gestor - Terminal-based contract and financial management application
//!
//! This library provides the core functionality for gestor, a CLI tool for
//! companies that track service contracts, monthly revenue/expense categories,
//! and the recurring reports built on top of them: per-contract billing fees
//! (boletos), shared-cost allocation (rateio), annual category breakdowns and
//! profit analyses.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (contracts, categories, cost records)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (validation + persistence)
//! - `analysis`: Pure monthly-aggregation logic over contract lifecycles
//! - `reports`: Report generation built on `analysis`
//! - `display`: Terminal output formatting
//! - `cli`: Command-line interface handlers

pub mod analysis;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::GestorError;
