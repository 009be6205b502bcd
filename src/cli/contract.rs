//! Contract CLI commands
//!
//! Implements CLI commands for contract lifecycle management.

use clap::Subcommand;

use crate::display::contract::{
    format_contract_details, format_contract_list, format_contract_summary,
};
use crate::error::{GestorError, GestorResult};
use crate::models::{ContractStatus, Money};
use crate::services::ContractService;
use crate::storage::Storage;

/// Contract subcommands
#[derive(Subcommand)]
pub enum ContractCommands {
    /// List all contracts
    List,

    /// Register a new contract
    Add {
        /// Client/company name
        client: String,
        /// Start date (DD/MM/YYYY)
        #[arg(short, long)]
        start: String,
        /// Monthly fee (e.g., "1200" or "1200.50")
        #[arg(short, long)]
        fee: String,
    },

    /// Show contract details
    Show {
        /// Client name or contract ID
        contract: String,
    },

    /// Edit a contract
    Edit {
        /// Client name or contract ID
        contract: String,
        /// New client name
        #[arg(long)]
        client: Option<String>,
        /// New monthly fee
        #[arg(long)]
        fee: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Terminate a contract (it still bills through the termination month)
    Terminate {
        /// Client name or contract ID
        contract: String,
        /// Termination date (DD/MM/YYYY)
        #[arg(short, long)]
        date: String,
    },

    /// Remove a contract's termination date
    Reopen {
        /// Client name or contract ID
        contract: String,
    },

    /// Mark a contract active
    Activate {
        /// Client name or contract ID
        contract: String,
    },

    /// Mark a contract inactive (excluded from all billing months)
    Deactivate {
        /// Client name or contract ID
        contract: String,
    },

    /// Delete a contract
    Delete {
        /// Client name or contract ID
        contract: String,
    },
}

/// Handle a contract command
pub fn handle_contract_command(storage: &Storage, cmd: ContractCommands) -> GestorResult<()> {
    let service = ContractService::new(storage);

    match cmd {
        ContractCommands::List => {
            let contracts = service.list()?;
            print!("{}", format_contract_list(&contracts));
        }

        ContractCommands::Add { client, start, fee } => {
            let fee = Money::parse(&fee)
                .map_err(|e| GestorError::Validation(format!("Invalid fee: {}", e)))?;

            let contract = service.create(&client, &start, fee)?;
            println!("Registered contract: {}", contract.client);
            println!("  Start: {}", contract.start_date);
            println!("  Fee:   {}/month", contract.monthly_fee);
            println!("  ID:    {}", contract.id);
        }

        ContractCommands::Show { contract } => {
            let c = service
                .find(&contract)?
                .ok_or_else(|| GestorError::contract_not_found(&contract))?;
            print!("{}", format_contract_details(&c));
        }

        ContractCommands::Edit {
            contract,
            client,
            fee,
            notes,
        } => {
            let c = service
                .find(&contract)?
                .ok_or_else(|| GestorError::contract_not_found(&contract))?;

            if client.is_none() && fee.is_none() && notes.is_none() {
                println!("No changes specified. Use --client, --fee, or --notes.");
                return Ok(());
            }

            let fee = fee
                .map(|s| {
                    Money::parse(&s)
                        .map_err(|e| GestorError::Validation(format!("Invalid fee: {}", e)))
                })
                .transpose()?;

            let updated = service.update(c.id, client.as_deref(), fee, notes.as_deref())?;
            println!("Updated contract: {}", format_contract_summary(&updated));
        }

        ContractCommands::Terminate { contract, date } => {
            let c = service
                .find(&contract)?
                .ok_or_else(|| GestorError::contract_not_found(&contract))?;

            let terminated = service.terminate(c.id, &date)?;
            println!(
                "Terminated contract '{}' on {}. It still bills through the termination month.",
                terminated.client, date
            );
        }

        ContractCommands::Reopen { contract } => {
            let c = service
                .find(&contract)?
                .ok_or_else(|| GestorError::contract_not_found(&contract))?;

            let reopened = service.reopen(c.id)?;
            println!("Reopened contract: {}", reopened.client);
        }

        ContractCommands::Activate { contract } => {
            let c = service
                .find(&contract)?
                .ok_or_else(|| GestorError::contract_not_found(&contract))?;

            service.set_status(c.id, ContractStatus::Active)?;
            println!("Contract '{}' is now active.", c.client);
        }

        ContractCommands::Deactivate { contract } => {
            let c = service
                .find(&contract)?
                .ok_or_else(|| GestorError::contract_not_found(&contract))?;

            service.set_status(c.id, ContractStatus::Inactive)?;
            println!("Contract '{}' is now inactive.", c.client);
        }

        ContractCommands::Delete { contract } => {
            let c = service
                .find(&contract)?
                .ok_or_else(|| GestorError::contract_not_found(&contract))?;

            service.delete(c.id)?;
            println!("Deleted contract: {}", c.client);
        }
    }

    Ok(())
}
