//! Cost record CLI commands
//!
//! Implements CLI commands for setting and listing monthly cost values.

use clap::Subcommand;

use crate::error::{GestorError, GestorResult};
use crate::models::Money;
use crate::services::{CategoryService, CostRecordService};
use crate::storage::Storage;

/// Cost record subcommands
#[derive(Subcommand)]
pub enum CostCommands {
    /// Set a category's value for a month (replaces any previous value)
    Set {
        /// Category name or ID
        category: String,
        /// Year (e.g., 2024)
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Value (e.g., "450" or "450.90")
        value: String,
    },

    /// Clear a category's value for a month
    Clear {
        /// Category name or ID
        category: String,
        /// Year
        year: i32,
        /// Month (1-12)
        month: u32,
    },

    /// List a category's recorded values for a year
    List {
        /// Category name or ID
        category: String,
        /// Year
        year: i32,
    },
}

/// Handle a cost command
pub fn handle_cost_command(storage: &Storage, cmd: CostCommands) -> GestorResult<()> {
    let categories = CategoryService::new(storage);
    let service = CostRecordService::new(storage);

    match cmd {
        CostCommands::Set {
            category,
            year,
            month,
            value,
        } => {
            let cat = categories
                .find(&category)?
                .ok_or_else(|| GestorError::category_not_found(&category))?;

            let value = Money::parse(&value)
                .map_err(|e| GestorError::Validation(format!("Invalid value: {}", e)))?;

            let record = service.set(cat.id, year, month, value)?;
            println!(
                "Set {} {}/{} to {}",
                cat.name, record.month, record.year, record.value
            );
        }

        CostCommands::Clear {
            category,
            year,
            month,
        } => {
            let cat = categories
                .find(&category)?
                .ok_or_else(|| GestorError::category_not_found(&category))?;

            if service.clear(cat.id, year, month)? {
                println!("Cleared {} {}/{}", cat.name, month, year);
            } else {
                println!("No value recorded for {} {}/{}", cat.name, month, year);
            }
        }

        CostCommands::List { category, year } => {
            let cat = categories
                .find(&category)?
                .ok_or_else(|| GestorError::category_not_found(&category))?;

            let records = service.list_category_year(cat.id, year)?;
            if records.is_empty() {
                println!("No values recorded for {} in {}.", cat.name, year);
                return Ok(());
            }

            println!("{} - {}", cat.name, year);
            for record in &records {
                println!("  {:>2}/{}: {}", record.month, record.year, record.value);
            }
            let total: Money = records.iter().map(|r| r.value).sum();
            println!("  Total: {}", total);
        }
    }

    Ok(())
}
