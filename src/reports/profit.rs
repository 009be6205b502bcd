//! Profit Analysis Report
//!
//! Monthly result for a year: contract revenue (each active contract bills
//! its own monthly fee) plus recorded renda, minus recorded impostos (after
//! post-termination suppression) and despesas.

use crate::analysis::{
    is_active_in_month, pooled_monthly_values, suppress_after_termination, MonthlyAggregate,
    MONTHS,
};
use crate::display::report::MONTH_ABBREV;
use crate::error::GestorResult;
use crate::models::{CategoryKind, Money};
use crate::storage::Storage;
use std::io::Write;

/// Profit analysis for one calendar year
#[derive(Debug, Clone)]
pub struct ProfitReport {
    /// Report year
    pub year: i32,
    /// Contract fees billed per month (January at index 0)
    pub contract_revenue: [Money; MONTHS],
    /// Recorded renda values per month
    pub renda: [Money; MONTHS],
    /// Recorded impostos per month, after suppression
    pub impostos: [Money; MONTHS],
    /// Recorded despesas per month
    pub despesas: [Money; MONTHS],
    /// Monthly profit, total and run-rate average
    pub profit: MonthlyAggregate,
}

impl ProfitReport {
    /// Generate the profit report for a year
    pub fn generate(storage: &Storage, year: i32) -> GestorResult<Self> {
        let contracts = storage.contracts.get_all()?;
        let records = storage.cost_records.get_by_year(year)?;

        let mut contract_revenue = [Money::zero(); MONTHS];
        for (month_index, revenue) in contract_revenue.iter_mut().enumerate() {
            *revenue = contracts
                .iter()
                .filter(|c| is_active_in_month(c, year, month_index as u32))
                .map(|c| c.monthly_fee)
                .sum();
        }

        let kind_values = |kind: CategoryKind| -> GestorResult<[Money; MONTHS]> {
            let ids: Vec<_> = storage
                .categories
                .get_by_kind(kind)?
                .into_iter()
                .map(|c| c.id)
                .collect();
            Ok(pooled_monthly_values(&records, &ids, year))
        };

        let renda = kind_values(CategoryKind::Renda)?;
        let impostos =
            suppress_after_termination(&contracts, year, kind_values(CategoryKind::Impostos)?);
        let despesas = kind_values(CategoryKind::Despesas)?;

        let mut profit = [Money::zero(); MONTHS];
        for month_index in 0..MONTHS {
            profit[month_index] = contract_revenue[month_index] + renda[month_index]
                - impostos[month_index]
                - despesas[month_index];
        }

        Ok(Self {
            year,
            contract_revenue,
            renda,
            impostos,
            despesas,
            profit: MonthlyAggregate::from_values(profit),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Profit Analysis {}\n", self.year));
        output.push_str(&"=".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>13} {:>13} {:>13} {:>13} {:>13}\n",
            "Month", "Contracts", "Renda", "Impostos", "Despesas", "Profit"
        ));
        output.push_str(&"-".repeat(78));
        output.push('\n');

        for month_index in 0..MONTHS {
            output.push_str(&format!(
                "{:<6} {:>13} {:>13} {:>13} {:>13} {:>13}\n",
                MONTH_ABBREV[month_index],
                self.contract_revenue[month_index].to_string(),
                self.renda[month_index].to_string(),
                self.impostos[month_index].to_string(),
                self.despesas[month_index].to_string(),
                self.profit.monthly_values[month_index].to_string()
            ));
        }

        output.push_str(&"-".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>13} {:>13} {:>13} {:>13} {:>13}\n",
            "Total",
            self.contract_revenue.iter().copied().sum::<Money>().to_string(),
            self.renda.iter().copied().sum::<Money>().to_string(),
            self.impostos.iter().copied().sum::<Money>().to_string(),
            self.despesas.iter().copied().sum::<Money>().to_string(),
            self.profit.total_value.to_string()
        ));
        output.push_str(&format!(
            "{:<6} {:>13} {:>13} {:>13} {:>13} {:>13}\n",
            "Avg/mo",
            "",
            "",
            "",
            "",
            self.profit.monthly_average.to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> GestorResult<()> {
        writeln!(
            writer,
            "Year,Month,Contract Revenue,Renda,Impostos,Despesas,Profit"
        )
        .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;

        for month_index in 0..MONTHS {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{:.2},{:.2},{:.2}",
                self.year,
                MONTH_ABBREV[month_index],
                self.contract_revenue[month_index].cents() as f64 / 100.0,
                self.renda[month_index].cents() as f64 / 100.0,
                self.impostos[month_index].cents() as f64 / 100.0,
                self.despesas[month_index].cents() as f64 / 100.0,
                self.profit.monthly_values[month_index].cents() as f64 / 100.0
            )
            .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
