//! Category display formatting
//!
//! Formats financial categories for terminal output in tree and table views.

use crate::models::FinancialCategory;
use crate::services::KindWithCategories;

/// Format categories as a tree grouped by kind and section
pub fn format_category_tree(kinds: &[KindWithCategories]) -> String {
    if kinds.iter().all(|k| k.categories.is_empty()) {
        return "No categories found.\n\nRun 'gestor init' to create default categories."
            .to_string();
    }

    let mut output = String::new();

    for (i, kwc) in kinds.iter().enumerate() {
        output.push_str(&format!("{}\n", kwc.kind));

        if kwc.categories.is_empty() {
            output.push_str("  (no categories)\n");
        } else {
            let mut current_section: Option<&str> = None;
            for (j, category) in kwc.categories.iter().enumerate() {
                if category.section.as_deref() != current_section {
                    current_section = category.section.as_deref();
                    if let Some(section) = current_section {
                        output.push_str(&format!("  [{}]\n", section));
                    }
                }

                let is_last = j == kwc.categories.len() - 1;
                let prefix = if is_last { "└── " } else { "├── " };
                let shared = if category.shared { " (rateio)" } else { "" };

                output.push_str(&format!("  {}{}{}\n", prefix, category.name, shared));
            }
        }

        if i < kinds.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format a simple list of categories
pub fn format_category_list(categories: &[FinancialCategory]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<10}  {:<16}  {:<6}  {}\n",
        "Category",
        "Kind",
        "Section",
        "Rateio",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<10}  {:-<16}  {:-<6}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:<10}  {:<16}  {:<6}  {}\n",
            category.name,
            category.kind.to_string(),
            category.section.as_deref().unwrap_or("-"),
            if category.shared { "yes" } else { "no" },
            category.id,
            width = name_width
        ));
    }

    output
}

/// Format category details
pub fn format_category_details(category: &FinancialCategory) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:         {}\n", category.id));
    output.push_str(&format!("  Kind:       {}\n", category.kind));
    output.push_str(&format!(
        "  Section:    {}\n",
        category.section.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "  Rateio:     {}\n",
        if category.shared { "Yes" } else { "No" }
    ));
    output.push_str(&format!("  Sort Order: {}\n", category.sort_order));

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        category.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        category.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
