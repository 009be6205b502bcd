//! CLI commands for reports
//!
//! Provides commands for generating and exporting the yearly reports.

use crate::config::settings::Settings;
use crate::error::{GestorError, GestorResult};
use crate::models::{CategoryKind, Money};
use crate::reports::{BoletoReport, CategoryYearReport, ProfitReport, RateioReport};
use crate::storage::Storage;
use chrono::Datelike;
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Boleto issuance fee projection for a year
    Boletos {
        /// Report year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Per-contract fee override (e.g., "3.50")
        #[arg(long)]
        fee: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Shared-cost division (rateio) across active contracts
    Rateio {
        /// Report year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Annual table for one category kind
    Annual {
        /// Category kind (renda, impostos, despesas)
        kind: String,

        /// Report year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Monthly profit analysis
    Profit {
        /// Report year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> GestorResult<()> {
    match cmd {
        ReportCommands::Boletos { year, fee, output } => {
            let fee = match fee {
                Some(s) => Money::parse(&s)
                    .map_err(|e| GestorError::Validation(format!("Invalid fee: {}", e)))?,
                None => settings.boleto_fee(),
            };
            let report = BoletoReport::generate(storage, resolve_year(year), fee)?;
            write_report(output, "Boleto report", |w| report.export_csv(w), || {
                report.format_terminal()
            })
        }

        ReportCommands::Rateio { year, output } => {
            let report = RateioReport::generate(storage, resolve_year(year))?;
            write_report(output, "Rateio report", |w| report.export_csv(w), || {
                report.format_terminal()
            })
        }

        ReportCommands::Annual { kind, year, output } => {
            let kind = CategoryKind::parse(&kind).ok_or_else(|| {
                GestorError::Validation(format!(
                    "Unknown category kind '{}'. Use renda, impostos, or despesas.",
                    kind
                ))
            })?;
            let report = CategoryYearReport::generate(storage, resolve_year(year), kind)?;
            write_report(output, "Annual report", |w| report.export_csv(w), || {
                report.format_terminal()
            })
        }

        ReportCommands::Profit { year, output } => {
            let report = ProfitReport::generate(storage, resolve_year(year))?;
            write_report(output, "Profit report", |w| report.export_csv(w), || {
                report.format_terminal()
            })
        }
    }
}

fn resolve_year(year: Option<i32>) -> i32 {
    year.unwrap_or_else(|| chrono::Local::now().year())
}

fn write_report<E, F>(
    output: Option<PathBuf>,
    label: &str,
    export: E,
    format: F,
) -> GestorResult<()>
where
    E: FnOnce(&mut BufWriter<File>) -> GestorResult<()>,
    F: FnOnce() -> String,
{
    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            GestorError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export(&mut writer)?;
        println!("{} exported to: {}", label, path.display());
    } else {
        println!("{}", format());
    }

    Ok(())
}
