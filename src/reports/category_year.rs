//! Annual Category Report
//!
//! One kind (renda, impostos or despesas) laid out as a year table: a row per
//! category with its twelve monthly values, total and run-rate average, plus
//! column totals. Impostos rows pass through post-termination suppression
//! before display.

use crate::analysis::{
    category_monthly_values, suppress_after_termination, MonthlyAggregate, MONTHS,
};
use crate::display::report::MONTH_ABBREV;
use crate::error::GestorResult;
use crate::models::{CategoryKind, Money};
use crate::storage::Storage;
use std::io::Write;

/// One category's year of values
#[derive(Debug, Clone)]
pub struct CategoryYearRow {
    /// Category name
    pub name: String,
    /// Display section, if any
    pub section: Option<String>,
    /// Monthly values, total and run-rate average
    pub aggregate: MonthlyAggregate,
}

/// Annual report for one category kind
#[derive(Debug, Clone)]
pub struct CategoryYearReport {
    /// Report year
    pub year: i32,
    /// Category kind this table covers
    pub kind: CategoryKind,
    /// One row per category, in display order
    pub rows: Vec<CategoryYearRow>,
    /// Column totals across all rows
    pub totals: MonthlyAggregate,
}

impl CategoryYearReport {
    /// Generate the annual table for one category kind
    pub fn generate(storage: &Storage, year: i32, kind: CategoryKind) -> GestorResult<Self> {
        let categories = storage.categories.get_by_kind(kind)?;
        let records = storage.cost_records.get_by_year(year)?;
        let contracts = storage.contracts.get_all()?;

        let mut rows = Vec::with_capacity(categories.len());
        let mut column_totals = [Money::zero(); MONTHS];

        for category in categories {
            let mut values = category_monthly_values(&records, category.id, year);

            // Tax values stop being owed once a contract has terminated
            if kind == CategoryKind::Impostos {
                values = suppress_after_termination(&contracts, year, values);
            }

            for (total, value) in column_totals.iter_mut().zip(values.iter()) {
                *total += *value;
            }

            rows.push(CategoryYearRow {
                name: category.name,
                section: category.section,
                aggregate: MonthlyAggregate::from_values(values),
            });
        }

        Ok(Self {
            year,
            kind,
            rows,
            totals: MonthlyAggregate::from_values(column_totals),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", self.kind, self.year));
        output.push_str(&"=".repeat(20 + 13 * (MONTHS + 2)));
        output.push('\n');

        output.push_str(&format!("{:<20}", "Category"));
        for abbrev in MONTH_ABBREV {
            output.push_str(&format!(" {:>12}", abbrev));
        }
        output.push_str(&format!(" {:>12} {:>12}\n", "Total", "Avg/mo"));
        output.push_str(&"-".repeat(20 + 13 * (MONTHS + 2)));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("(no categories)\n");
            return output;
        }

        let mut current_section: Option<&str> = None;
        for row in &self.rows {
            if row.section.as_deref() != current_section {
                current_section = row.section.as_deref();
                if let Some(section) = current_section {
                    output.push_str(&format!("{}\n", section.to_uppercase()));
                }
            }

            output.push_str(&format!("{:<20}", row.name));
            for value in &row.aggregate.monthly_values {
                output.push_str(&format!(" {:>12}", value.to_string()));
            }
            output.push_str(&format!(
                " {:>12} {:>12}\n",
                row.aggregate.total_value.to_string(),
                row.aggregate.monthly_average.to_string()
            ));
        }

        output.push_str(&"-".repeat(20 + 13 * (MONTHS + 2)));
        output.push('\n');
        output.push_str(&format!("{:<20}", "Total"));
        for value in &self.totals.monthly_values {
            output.push_str(&format!(" {:>12}", value.to_string()));
        }
        output.push_str(&format!(
            " {:>12} {:>12}\n",
            self.totals.total_value.to_string(),
            self.totals.monthly_average.to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> GestorResult<()> {
        let mut header = String::from("Year,Kind,Category,Section");
        for abbrev in MONTH_ABBREV {
            header.push(',');
            header.push_str(abbrev);
        }
        header.push_str(",Total,Average");
        writeln!(writer, "{}", header)
            .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;

        for row in &self.rows {
            let mut line = format!(
                "{},{},{},{}",
                self.year,
                self.kind,
                row.name,
                row.section.as_deref().unwrap_or("")
            );
            for value in &row.aggregate.monthly_values {
                line.push_str(&format!(",{:.2}", value.cents() as f64 / 100.0));
            }
            line.push_str(&format!(
                ",{:.2},{:.2}",
                row.aggregate.total_value.cents() as f64 / 100.0,
                row.aggregate.monthly_average.cents() as f64 / 100.0
            ));
            writeln!(writer, "{}", line)
                .map_err(|e| crate::error::GestorError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
