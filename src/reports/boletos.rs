//! Boleto Fee Report
//!
//! Projects the yearly cost of boleto issuance: each contract active in a
//! month pays one fixed issuance fee that month.

use crate::analysis::{active_counts_by_month, flat_fee_aggregate, MonthlyAggregate, MONTHS};
use crate::display::report::MONTH_ABBREV;
use crate::error::GestorResult;
use crate::models::Money;
use crate::storage::Storage;
use std::io::Write;

/// Boleto fee report for one calendar year
#[derive(Debug, Clone)]
pub struct BoletoReport {
    /// Report year
    pub year: i32,
    /// Per-contract monthly issuance fee
    pub fee: Money,
    /// Active contract count per month (January at index 0)
    pub monthly_counts: [usize; MONTHS],
    /// Aggregated fee values, total and run-rate average
    pub aggregate: MonthlyAggregate,
}

impl BoletoReport {
    /// Generate the boleto fee report for a year
    pub fn generate(storage: &Storage, year: i32, fee: Money) -> GestorResult<Self> {
        let contracts = storage.contracts.get_all()?;

        Ok(Self {
            year,
            fee,
            monthly_counts: active_counts_by_month(&contracts, year),
            aggregate: flat_fee_aggregate(&contracts, year, fee),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Boleto Fees {} (fee {})\n", self.year, self.fee));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>10} {:>14}\n",
            "Month", "Contracts", "Fees"
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for month_index in 0..MONTHS {
            output.push_str(&format!(
                "{:<6} {:>10} {:>14}\n",
                MONTH_ABBREV[month_index],
                self.monthly_counts[month_index],
                self.aggregate.monthly_values[month_index].to_string()
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>10} {:>14}\n",
            "Total",
            "",
            self.aggregate.total_value.to_string()
        ));
        output.push_str(&format!(
            "{:<6} {:>10} {:>14}\n",
            "Avg/mo",
            "",
            self.aggregate.monthly_average.to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> GestorResult<()> {
        writeln!(writer, "Year,Month,Active Contracts,Fee,Total")
            .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;

        for month_index in 0..MONTHS {
            writeln!(
                writer,
                "{},{},{},{:.2},{:.2}",
                self.year,
                MONTH_ABBREV[month_index],
                self.monthly_counts[month_index],
                self.fee.cents() as f64 / 100.0,
                self.aggregate.monthly_values[month_index].cents() as f64 / 100.0
            )
            .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},TOTAL,,,{:.2}",
            self.year,
            self.aggregate.total_value.cents() as f64 / 100.0
        )
        .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;

        Ok(())
    }
}
