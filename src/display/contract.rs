//! Contract display formatting
//!
//! Formats contracts for terminal output in table and detail views.

use crate::models::{Contract, ContractStatus};

/// Format a table of contracts
pub fn format_contract_list(contracts: &[Contract]) -> String {
    if contracts.is_empty() {
        return "No contracts found.\n\nRun 'gestor contract add' to register one.".to_string();
    }

    let client_width = contracts
        .iter()
        .map(|c| c.client.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<8}  {:<10}  {:<10}  {:>12}\n",
        "Client",
        "Status",
        "Start",
        "End",
        "Fee",
        width = client_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<8}  {:-<10}  {:-<10}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        width = client_width
    ));

    for contract in contracts {
        output.push_str(&format!(
            "{:<width$}  {:<8}  {:<10}  {:<10}  {:>12}\n",
            contract.client,
            contract.status.to_string(),
            contract.start_date,
            contract.termination_date.as_deref().unwrap_or("-"),
            contract.monthly_fee.to_string(),
            width = client_width
        ));
    }

    output
}

/// Format contract details
pub fn format_contract_details(contract: &Contract) -> String {
    let mut output = String::new();

    output.push_str(&format!("Contract: {}\n", contract.client));
    output.push_str(&format!("  ID:          {}\n", contract.id));
    output.push_str(&format!("  Status:      {}\n", contract.status));
    output.push_str(&format!("  Start:       {}\n", contract.start_date));

    match &contract.termination_date {
        Some(date) => output.push_str(&format!("  Terminated:  {}\n", date)),
        None => output.push_str("  Terminated:  -\n"),
    }

    output.push_str(&format!("  Monthly Fee: {}\n", contract.monthly_fee));

    if !contract.notes.is_empty() {
        output.push_str(&format!("  Notes:       {}\n", contract.notes));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        contract.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        contract.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// One-line summary used after mutations
pub fn format_contract_summary(contract: &Contract) -> String {
    let state = if contract.is_terminated() {
        format!(
            "terminated {}",
            contract.termination_date.as_deref().unwrap_or("?")
        )
    } else if contract.status == ContractStatus::Inactive {
        "inactive".to_string()
    } else {
        "active".to_string()
    };

    format!(
        "{} - {} - {}/month",
        contract.client, state, contract.monthly_fee
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_empty_list() {
        let output = format_contract_list(&[]);
        assert!(output.contains("No contracts found"));
    }

    #[test]
    fn test_format_list() {
        let mut terminated = Contract::new("Beta SA", "01/01/2024", Money::from_cents(50000));
        terminated.terminate("10/09/2024");
        let contracts = vec![
            Contract::new("Acme Ltda", "15/06/2024", Money::from_cents(120000)),
            terminated,
        ];

        let output = format_contract_list(&contracts);
        assert!(output.contains("Acme Ltda"));
        assert!(output.contains("R$1200.00"));
        assert!(output.contains("10/09/2024"));
    }

    #[test]
    fn test_format_details() {
        let contract = Contract::new("Acme Ltda", "15/06/2024", Money::from_cents(120000));
        let output = format_contract_details(&contract);
        assert!(output.contains("Contract: Acme Ltda"));
        assert!(output.contains("Status:      Active"));
        assert!(output.contains("Terminated:  -"));
    }

    #[test]
    fn test_format_summary() {
        let mut contract = Contract::new("Acme Ltda", "15/06/2024", Money::from_cents(120000));
        assert!(format_contract_summary(&contract).contains("active"));

        contract.terminate("10/09/2024");
        assert!(format_contract_summary(&contract).contains("terminated 10/09/2024"));
    }
}
