//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::GestorPaths;
use crate::error::GestorError;
use crate::models::{CategoryKind, FinancialCategory};

use super::categories::CategoryRepository;

/// Initialize storage for a fresh installation
///
/// Creates the default financial categories and basic structure
pub fn initialize_storage(paths: &GestorPaths) -> Result<(), GestorError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    // Create default categories if categories.json doesn't exist
    if !paths.categories_file().exists() {
        create_default_categories(paths)?;
    }

    Ok(())
}

/// Create the default financial categories
///
/// Shared despesas (aluguel, energia, internet, contabilidade) are flagged
/// for the rateio pool; per-visit costs like combustível are not.
fn create_default_categories(paths: &GestorPaths) -> Result<(), GestorError> {
    let defaults: &[(&str, CategoryKind, &str, bool)] = &[
        ("Mensalidades", CategoryKind::Renda, "Contratos", false),
        ("Simples Nacional", CategoryKind::Impostos, "Federais", false),
        ("ISS", CategoryKind::Impostos, "Municipais", false),
        ("Aluguel", CategoryKind::Despesas, "Fixas", true),
        ("Energia", CategoryKind::Despesas, "Fixas", true),
        ("Internet", CategoryKind::Despesas, "Fixas", true),
        ("Contabilidade", CategoryKind::Despesas, "Fixas", true),
        ("Combustível", CategoryKind::Despesas, "Visitas Técnicas", false),
    ];

    let repo = CategoryRepository::new(paths.categories_file());
    repo.load()?;

    for (i, (name, kind, section, shared)) in defaults.iter().enumerate() {
        let mut category = FinancialCategory::with_section(*name, *kind, *section);
        category.shared = *shared;
        category.sort_order = i as i32;
        repo.upsert(category)?;
    }

    repo.save()
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &GestorPaths) -> bool {
    !paths.categories_file().exists()
}
