//! Contract model
//!
//! Represents a service contract with a client: its status, lifecycle dates
//! and monthly fee. Dates are stored as localized `DD/MM/YYYY` strings exactly
//! as entered; month extraction for aggregation is deliberately lenient (see
//! `models::month`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ContractId;
use super::money::Money;
use super::month::{parse_month_soft, MonthKey};

/// Contract status
///
/// Note that termination does not flip the status: a terminated contract
/// stays `Active` and bills through its termination month. The status is an
/// independent switch flipped by explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    /// Contract counts toward billing and cost allocation
    #[default]
    Active,
    /// Contract is excluded from all months
    Inactive,
}

impl ContractStatus {
    /// Parse a status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" | "ativo" => Some(Self::Active),
            "inactive" | "inativo" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
        }
    }
}

/// A service contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier
    pub id: ContractId,

    /// Client/company name (e.g., "Acme Ltda")
    pub client: String,

    /// Current status
    #[serde(default)]
    pub status: ContractStatus,

    /// Contract start date as entered ("DD/MM/YYYY")
    pub start_date: String,

    /// Termination date as entered ("DD/MM/YYYY"), set when the contract is closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,

    /// Monthly contract fee
    pub monthly_fee: Money,

    /// Notes about this contract
    #[serde(default)]
    pub notes: String,

    /// When the contract was registered
    pub created_at: DateTime<Utc>,

    /// When the contract was last modified
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Create a new active contract
    pub fn new(client: impl Into<String>, start_date: impl Into<String>, monthly_fee: Money) -> Self {
        let now = Utc::now();
        Self {
            id: ContractId::new(),
            client: client.into(),
            status: ContractStatus::Active,
            start_date: start_date.into(),
            termination_date: None,
            monthly_fee,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The month the contract starts in, if the stored date parses
    pub fn start_month(&self) -> Option<MonthKey> {
        parse_month_soft(&self.start_date)
    }

    /// The month the contract terminates in, if set and parseable
    pub fn termination_month(&self) -> Option<MonthKey> {
        self.termination_date
            .as_deref()
            .and_then(parse_month_soft)
    }

    /// Whether a termination date has been recorded
    pub fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }

    /// Close the contract on the given date (status is left untouched)
    pub fn terminate(&mut self, date: impl Into<String>) {
        self.termination_date = Some(date.into());
        self.updated_at = Utc::now();
    }

    /// Reopen a closed contract
    pub fn clear_termination(&mut self) {
        self.termination_date = None;
        self.updated_at = Utc::now();
    }

    /// Set the contract status
    pub fn set_status(&mut self, status: ContractStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Validate the contract
    pub fn validate(&self) -> Result<(), ContractValidationError> {
        if self.client.trim().is_empty() {
            return Err(ContractValidationError::EmptyClient);
        }

        if self.client.len() > 120 {
            return Err(ContractValidationError::ClientTooLong(self.client.len()));
        }

        // When both dates carry a parseable month, termination must not
        // precede the start month.
        if let (Some(start), Some(term)) = (self.start_month(), self.termination_month()) {
            if term < start {
                return Err(ContractValidationError::TerminationBeforeStart { start, term });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.client, self.status)
    }
}

/// Validation errors for contracts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractValidationError {
    EmptyClient,
    ClientTooLong(usize),
    TerminationBeforeStart { start: MonthKey, term: MonthKey },
}

impl fmt::Display for ContractValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyClient => write!(f, "Client name cannot be empty"),
            Self::ClientTooLong(len) => {
                write!(f, "Client name too long ({} chars, max 120)", len)
            }
            Self::TerminationBeforeStart { start, term } => write!(
                f,
                "Termination month {} precedes start month {}",
                term, start
            ),
        }
    }
}

impl std::error::Error for ContractValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contract() {
        let contract = Contract::new("Acme Ltda", "15/06/2024", Money::from_cents(120000));
        assert_eq!(contract.client, "Acme Ltda");
        assert_eq!(contract.status, ContractStatus::Active);
        assert!(contract.termination_date.is_none());
        assert_eq!(contract.start_month(), Some(MonthKey::new(2024, 6)));
    }

    #[test]
    fn test_terminate_keeps_status() {
        let mut contract = Contract::new("Acme Ltda", "15/06/2024", Money::zero());
        contract.terminate("10/09/2024");

        assert!(contract.is_terminated());
        assert_eq!(contract.status, ContractStatus::Active);
        assert_eq!(contract.termination_month(), Some(MonthKey::new(2024, 9)));

        contract.clear_termination();
        assert!(!contract.is_terminated());
    }

    #[test]
    fn test_unparseable_dates_yield_no_month() {
        let mut contract = Contract::new("Acme Ltda", "", Money::zero());
        contract.termination_date = Some("whenever".into());

        assert_eq!(contract.start_month(), None);
        assert_eq!(contract.termination_month(), None);
    }

    #[test]
    fn test_validation() {
        let mut contract = Contract::new("Acme Ltda", "15/06/2024", Money::zero());
        assert!(contract.validate().is_ok());

        contract.client = String::new();
        assert_eq!(contract.validate(), Err(ContractValidationError::EmptyClient));
    }

    #[test]
    fn test_validation_termination_before_start() {
        let mut contract = Contract::new("Acme Ltda", "15/06/2024", Money::zero());
        contract.terminate("01/03/2024");

        assert!(matches!(
            contract.validate(),
            Err(ContractValidationError::TerminationBeforeStart { .. })
        ));

        // Same month is allowed
        contract.terminate("30/06/2024");
        assert!(contract.validate().is_ok());
    }

    #[test]
    fn test_validation_skips_unparseable_dates() {
        // Soft-parse failure means no ordering constraint to check
        let mut contract = Contract::new("Acme Ltda", "garbage", Money::zero());
        contract.terminate("01/01/2020");
        assert!(contract.validate().is_ok());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(ContractStatus::parse("active"), Some(ContractStatus::Active));
        assert_eq!(ContractStatus::parse("Ativo"), Some(ContractStatus::Active));
        assert_eq!(ContractStatus::parse("inactive"), Some(ContractStatus::Inactive));
        assert_eq!(ContractStatus::parse("unknown"), None);
    }

    #[test]
    fn test_serialization() {
        let contract = Contract::new("Acme Ltda", "01/02/2024", Money::from_cents(5000));
        let json = serde_json::to_string(&contract).unwrap();
        let deserialized: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(contract.id, deserialized.id);
        assert_eq!(contract.start_date, deserialized.start_date);
    }
}
