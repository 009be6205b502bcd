//! Per-month contract activity predicate
//!
//! Decides whether a contract counts as "active" in a given calendar month
//! for billing and cost-allocation purposes. This is the one boundary rule
//! shared by every aggregation mode:
//!
//! 1. An `Inactive` status excludes the contract from all months.
//! 2. A parseable start date excludes months strictly before the start month.
//! 3. A parseable termination date excludes months strictly after the
//!    termination month - the termination month itself still bills.
//! 4. Unparseable or missing dates impose no constraint on their side.
//!
//! The predicate is total: no input can make it fail.

use crate::models::{Contract, ContractStatus, MonthKey};

/// Whether a contract is active in the given month.
///
/// `month_index` is 0-based (January = 0).
pub fn is_active_in_month(contract: &Contract, year: i32, month_index: u32) -> bool {
    if contract.status != ContractStatus::Active {
        return false;
    }

    let current = MonthKey::from_index(year, month_index);

    if let Some(start) = contract.start_month() {
        if current < start {
            return false;
        }
    }

    if let Some(term) = contract.termination_month() {
        if current > term {
            return false;
        }
    }

    true
}

/// Number of contracts active in the given month
pub fn active_contract_count(contracts: &[Contract], year: i32, month_index: u32) -> usize {
    contracts
        .iter()
        .filter(|c| is_active_in_month(c, year, month_index))
        .count()
}

/// Per-month active-contract counts for a whole year (January at index 0)
pub fn active_counts_by_month(contracts: &[Contract], year: i32) -> [usize; 12] {
    let mut counts = [0usize; 12];
    for (month_index, count) in counts.iter_mut().enumerate() {
        *count = active_contract_count(contracts, year, month_index as u32);
    }
    counts
}

/// Whether ANY contract has a parseable termination month strictly before
/// the given month.
///
/// This drives the cross-cutting suppression rule: once a termination has
/// passed, certain recorded values (tax lines) are forced to zero for the
/// months that follow. Status is deliberately not consulted here - only the
/// recorded termination date matters.
pub fn any_terminated_before(contracts: &[Contract], year: i32, month_index: u32) -> bool {
    let current = MonthKey::from_index(year, month_index);
    contracts
        .iter()
        .filter_map(|c| c.termination_month())
        .any(|term| term < current)
}
