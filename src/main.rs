use anyhow::Result;
use clap::{Parser, Subcommand};

use gestor::cli::{
    handle_category_command, handle_contract_command, handle_cost_command, handle_report_command,
};
use gestor::config::{paths::GestorPaths, settings::Settings};
use gestor::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gestor",
    version,
    about = "Terminal-based contract and financial management",
    long_about = "gestor manages service contracts, financial categories and monthly \
                  cost records from the command line, and produces the yearly billing, \
                  cost-division and profit reports over them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Contract management commands
    #[command(subcommand)]
    Contract(gestor::cli::ContractCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(gestor::cli::CategoryCommands),

    /// Monthly cost record commands
    #[command(subcommand)]
    Cost(gestor::cli::CostCommands),

    /// Report commands
    #[command(subcommand)]
    Report(gestor::cli::ReportCommands),

    /// Initialize data files and default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GestorPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Contract(cmd)) => {
            handle_contract_command(&storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Cost(cmd)) => {
            handle_cost_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing gestor at: {}", paths.data_dir().display());
            gestor::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories have been created:");
            println!("  Renda:    Mensalidades");
            println!("  Impostos: Simples Nacional, ISS");
            println!("  Despesas: Aluguel, Energia, Internet, Contabilidade, Combustível");
            println!();
            println!("Run 'gestor category list' to see all categories.");
        }
        Some(Commands::Config) => {
            println!("gestor Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Boleto fee: {}", settings.boleto_fee());
        }
        None => {
            println!("gestor - Contract and financial management");
            println!();
            println!("Run 'gestor --help' for usage information.");
            println!("Run 'gestor init' to set up data files and default categories.");
        }
    }

    Ok(())
}
