//! Category CLI commands
//!
//! Implements CLI commands for financial category management.

use clap::Subcommand;

use crate::display::category::{
    format_category_details, format_category_list, format_category_tree,
};
use crate::error::{GestorError, GestorResult};
use crate::models::CategoryKind;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories (organized by kind and section)
    List {
        /// Show only one kind (renda, impostos, despesas)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Category kind (renda, impostos, despesas)
        #[arg(short, long)]
        kind: String,
        /// Display section (e.g., "Fixas")
        #[arg(short, long)]
        section: Option<String>,
        /// Include this category's costs in the rateio pool
        #[arg(long)]
        shared: bool,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New section (empty string clears it)
        #[arg(short, long)]
        section: Option<String>,
        /// Include in the rateio pool
        #[arg(long)]
        shared: bool,
        /// Exclude from the rateio pool
        #[arg(long, conflicts_with = "shared")]
        not_shared: bool,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
        /// Force delete (also deletes the category's monthly records)
        #[arg(long)]
        force: bool,
    },
}

fn parse_kind(s: &str) -> GestorResult<CategoryKind> {
    CategoryKind::parse(s).ok_or_else(|| {
        GestorError::Validation(format!(
            "Unknown category kind '{}'. Use renda, impostos, or despesas.",
            s
        ))
    })
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> GestorResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => match kind {
            Some(kind) => {
                let kind = parse_kind(&kind)?;
                let categories = service.list(Some(kind))?;
                print!("{}", format_category_list(&categories));
            }
            None => {
                let kinds = service.list_by_kind()?;
                print!("{}", format_category_tree(&kinds));
            }
        },

        CategoryCommands::Create {
            name,
            kind,
            section,
            shared,
        } => {
            let kind = parse_kind(&kind)?;
            let category = service.create(&name, kind, section.as_deref(), shared)?;

            println!("Created category: {}", category.name);
            println!("  Kind: {}", category.kind);
            if let Some(section) = &category.section {
                println!("  Section: {}", section);
            }
            if category.shared {
                println!("  Included in the rateio pool");
            }
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| GestorError::category_not_found(&category))?;
            print!("{}", format_category_details(&cat));
        }

        CategoryCommands::Edit {
            category,
            name,
            section,
            shared,
            not_shared,
        } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| GestorError::category_not_found(&category))?;

            if name.is_none() && section.is_none() && !shared && !not_shared {
                println!("No changes specified. Use --name, --section, --shared, or --not-shared.");
                return Ok(());
            }

            let shared_flag = if shared {
                Some(true)
            } else if not_shared {
                Some(false)
            } else {
                None
            };

            let updated = service.update(cat.id, name.as_deref(), section.as_deref(), shared_flag)?;
            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category, force } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| GestorError::category_not_found(&category))?;

            service.delete(cat.id, force)?;
            println!("Deleted category: {}", cat.name);
        }
    }

    Ok(())
}
