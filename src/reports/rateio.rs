//! Rateio Report
//!
//! Divides the shared monthly cost pool (the recorded values of categories
//! flagged as shared) evenly across the contracts active each month. A month
//! with no active contracts allocates nothing.

use crate::analysis::{
    active_counts_by_month, pooled_monthly_values, shared_cost_aggregate, MonthlyAggregate, MONTHS,
};
use crate::display::report::MONTH_ABBREV;
use crate::error::GestorResult;
use crate::models::Money;
use crate::storage::Storage;
use std::io::Write;

/// Shared-cost division report for one calendar year
#[derive(Debug, Clone)]
pub struct RateioReport {
    /// Report year
    pub year: i32,
    /// Names of the categories feeding the pool
    pub shared_categories: Vec<String>,
    /// Total shared cost per month (January at index 0)
    pub monthly_pool: [Money; MONTHS],
    /// Active contract count per month
    pub monthly_counts: [usize; MONTHS],
    /// Per-contract share, total and run-rate average
    pub aggregate: MonthlyAggregate,
}

impl RateioReport {
    /// Generate the rateio report for a year
    pub fn generate(storage: &Storage, year: i32) -> GestorResult<Self> {
        let contracts = storage.contracts.get_all()?;
        let shared = storage.categories.get_shared()?;
        let records = storage.cost_records.get_by_year(year)?;

        let shared_ids: Vec<_> = shared.iter().map(|c| c.id).collect();
        let monthly_pool = pooled_monthly_values(&records, &shared_ids, year);

        Ok(Self {
            year,
            shared_categories: shared.into_iter().map(|c| c.name).collect(),
            monthly_pool,
            monthly_counts: active_counts_by_month(&contracts, year),
            aggregate: shared_cost_aggregate(&contracts, year, &monthly_pool),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rateio {}\n", self.year));
        if self.shared_categories.is_empty() {
            output.push_str("Pool: (no shared categories)\n");
        } else {
            output.push_str(&format!("Pool: {}\n", self.shared_categories.join(", ")));
        }
        output.push_str(&"=".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>14} {:>10} {:>14}\n",
            "Month", "Pool", "Contracts", "Share"
        ));
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for month_index in 0..MONTHS {
            output.push_str(&format!(
                "{:<6} {:>14} {:>10} {:>14}\n",
                MONTH_ABBREV[month_index],
                self.monthly_pool[month_index].to_string(),
                self.monthly_counts[month_index],
                self.aggregate.monthly_values[month_index].to_string()
            ));
        }

        output.push_str(&"-".repeat(52));
        output.push('\n');
        let pool_total: Money = self.monthly_pool.iter().copied().sum();
        output.push_str(&format!(
            "{:<6} {:>14} {:>10} {:>14}\n",
            "Total",
            pool_total.to_string(),
            "",
            self.aggregate.total_value.to_string()
        ));
        output.push_str(&format!(
            "{:<6} {:>14} {:>10} {:>14}\n",
            "Avg/mo",
            "",
            "",
            self.aggregate.monthly_average.to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> GestorResult<()> {
        writeln!(writer, "Year,Month,Pool,Active Contracts,Share")
            .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;

        for month_index in 0..MONTHS {
            writeln!(
                writer,
                "{},{},{:.2},{},{:.2}",
                self.year,
                MONTH_ABBREV[month_index],
                self.monthly_pool[month_index].cents() as f64 / 100.0,
                self.monthly_counts[month_index],
                self.aggregate.monthly_values[month_index].cents() as f64 / 100.0
            )
            .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
