//! Monthly aggregation modes over contract lifecycles
//!
//! All three aggregation modes the reports use consume the same activity
//! predicate from `activity`:
//!
//! - flat-fee: active count x per-contract fee (boleto issuance fees)
//! - rateio: a shared monthly cost pool divided across active contracts
//! - suppression: recorded values forced to zero for months strictly after
//!   any contract termination (tax lines)
//!
//! Everything here is pure computation over already-loaded collections;
//! absent or empty inputs degrade to an all-zero aggregate rather than an
//! error.

use std::collections::HashMap;

use crate::models::{CategoryId, Contract, CostRecord, Money};

use super::activity::{active_contract_count, any_terminated_before};

/// Number of months in an aggregation window
pub const MONTHS: usize = 12;

/// A year's worth of aggregated monthly values
///
/// `monthly_average` is always `total_value / 12`, regardless of how many
/// months had activity. This is a run-rate figure, not an average over
/// active months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyAggregate {
    /// One value per calendar month, January at index 0
    pub monthly_values: [Money; MONTHS],
    /// Sum of all monthly values
    pub total_value: Money,
    /// Run-rate average: total divided by 12
    pub monthly_average: Money,
}

impl MonthlyAggregate {
    /// Build an aggregate from per-month values, deriving total and average
    pub fn from_values(monthly_values: [Money; MONTHS]) -> Self {
        let total_value: Money = monthly_values.iter().copied().sum();
        Self {
            monthly_values,
            total_value,
            monthly_average: total_value.divide(MONTHS as i64),
        }
    }

    /// An all-zero aggregate
    pub fn empty() -> Self {
        Self::from_values([Money::zero(); MONTHS])
    }
}

impl Default for MonthlyAggregate {
    fn default() -> Self {
        Self::empty()
    }
}

/// Flat-fee mode: each active contract pays a fixed fee every month it is
/// active, so `month_value = active_count x fee`.
pub fn flat_fee_aggregate(contracts: &[Contract], year: i32, fee: Money) -> MonthlyAggregate {
    let mut values = [Money::zero(); MONTHS];
    for (month_index, value) in values.iter_mut().enumerate() {
        let count = active_contract_count(contracts, year, month_index as u32);
        *value = fee * count as i64;
    }
    MonthlyAggregate::from_values(values)
}

/// Rateio mode: each month's shared cost pool is divided evenly across the
/// contracts active that month. A month with no active contracts allocates
/// zero (guarded division, not an error).
pub fn shared_cost_aggregate(
    contracts: &[Contract],
    year: i32,
    pool: &[Money; MONTHS],
) -> MonthlyAggregate {
    let mut values = [Money::zero(); MONTHS];
    for (month_index, value) in values.iter_mut().enumerate() {
        let count = active_contract_count(contracts, year, month_index as u32);
        *value = pool[month_index].divide(count as i64);
    }
    MonthlyAggregate::from_values(values)
}

/// Suppression mode: force a month's value to zero when any contract has
/// terminated strictly before that month, overriding whatever was recorded.
///
/// This is a cross-cutting override applied to whole value rows (tax lines),
/// not a per-record computation.
pub fn suppress_after_termination(
    contracts: &[Contract],
    year: i32,
    mut values: [Money; MONTHS],
) -> [Money; MONTHS] {
    for (month_index, value) in values.iter_mut().enumerate() {
        if any_terminated_before(contracts, year, month_index as u32) {
            *value = Money::zero();
        }
    }
    values
}

/// Bucket one category's cost records for a year into month slots.
///
/// Records outside the year or with an out-of-range month are ignored. When
/// duplicates slip in despite the repository's upsert, the last one wins.
pub fn category_monthly_values(
    records: &[CostRecord],
    category_id: CategoryId,
    year: i32,
) -> [Money; MONTHS] {
    let mut values = [Money::zero(); MONTHS];
    for record in records {
        if record.category_id == category_id
            && record.year == year
            && (1..=12).contains(&record.month)
        {
            values[record.month_index()] = record.value;
        }
    }
    values
}

/// Sum cost records across a set of categories into per-month totals.
///
/// Used to build the rateio pool (shared categories) and report columns.
pub fn pooled_monthly_values(
    records: &[CostRecord],
    category_ids: &[CategoryId],
    year: i32,
) -> [Money; MONTHS] {
    let members: HashMap<CategoryId, ()> = category_ids.iter().map(|&id| (id, ())).collect();

    let mut values = [Money::zero(); MONTHS];
    for record in records {
        if record.year == year
            && (1..=12).contains(&record.month)
            && members.contains_key(&record.category_id)
        {
            values[record.month_index()] += record.value;
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contract, ContractStatus};

    fn contract(start: &str) -> Contract {
        Contract::new("Test Client", start, Money::zero())
    }

    #[test]
    fn test_flat_fee_three_contracts_all_year() {
        // 3 active contracts, fee R$3.50: every month R$10.50, total R$126.00,
        // average R$10.50
        let contracts = vec![
            contract("01/01/2023"),
            contract("01/01/2023"),
            contract("01/01/2023"),
        ];

        let agg = flat_fee_aggregate(&contracts, 2024, Money::from_cents(350));

        assert_eq!(agg.monthly_values, [Money::from_cents(1050); 12]);
        assert_eq!(agg.total_value, Money::from_cents(12600));
        assert_eq!(agg.monthly_average, Money::from_cents(1050));
    }

    #[test]
    fn test_flat_fee_respects_lifecycle() {
        let mut terminated = contract("01/01/2024");
        terminated.terminate("10/03/2024");
        let contracts = vec![contract("01/01/2024"), terminated];

        let agg = flat_fee_aggregate(&contracts, 2024, Money::from_cents(350));

        assert_eq!(agg.monthly_values[2], Money::from_cents(700)); // Mar: both
        assert_eq!(agg.monthly_values[3], Money::from_cents(350)); // Apr: one
    }

    #[test]
    fn test_rateio_divides_pool() {
        let contracts = vec![
            contract("01/01/2023"),
            contract("01/01/2023"),
            contract("01/01/2023"),
            contract("01/01/2023"),
        ];
        let pool = [Money::from_cents(100000); 12]; // R$1000.00 per month

        let agg = shared_cost_aggregate(&contracts, 2024, &pool);

        assert_eq!(agg.monthly_values[0], Money::from_cents(25000)); // R$250.00
        assert_eq!(agg.total_value, Money::from_cents(300000));
    }

    #[test]
    fn test_rateio_no_active_contracts_yields_zero() {
        // Shared costs of R$1000 but nobody active: no division-by-zero fault
        let pool = [Money::from_cents(100000); 12];
        let agg = shared_cost_aggregate(&[], 2024, &pool);
        assert_eq!(agg, MonthlyAggregate::empty());

        let mut inactive = contract("01/01/2023");
        inactive.set_status(ContractStatus::Inactive);
        let agg = shared_cost_aggregate(&[inactive], 2024, &pool);
        assert_eq!(agg.total_value, Money::zero());
    }

    #[test]
    fn test_suppression_zeroes_months_after_termination() {
        // Terminated April 2024: values for May 2024 onward are overridden
        // to zero regardless of what was recorded
        let mut c = contract("01/01/2023");
        c.terminate("15/04/2024");
        let contracts = vec![c];

        let recorded = [Money::from_cents(5000); 12];
        let suppressed = suppress_after_termination(&contracts, 2024, recorded);

        for month_index in 0..4 {
            assert_eq!(suppressed[month_index], Money::from_cents(5000));
        }
        for month_index in 4..12 {
            assert_eq!(suppressed[month_index], Money::zero());
        }
    }

    #[test]
    fn test_suppression_without_terminations_is_identity() {
        let contracts = vec![contract("01/01/2023")];
        let recorded = [Money::from_cents(5000); 12];
        assert_eq!(
            suppress_after_termination(&contracts, 2024, recorded),
            recorded
        );
    }

    #[test]
    fn test_run_rate_average_uses_twelve_months() {
        // One active month of R$120: average is 120/12 = R$10, not R$120.
        let mut values = [Money::zero(); 12];
        values[6] = Money::from_cents(12000);
        let agg = MonthlyAggregate::from_values(values);

        assert_eq!(agg.total_value, Money::from_cents(12000));
        assert_eq!(agg.monthly_average, Money::from_cents(1000));
    }

    #[test]
    fn test_empty_inputs_degrade_to_zero() {
        let agg = flat_fee_aggregate(&[], 2024, Money::from_cents(350));
        assert_eq!(agg, MonthlyAggregate::empty());
        assert_eq!(agg.total_value, Money::zero());
        assert_eq!(agg.monthly_average, Money::zero());
    }

    #[test]
    fn test_idempotence() {
        let mut terminated = contract("01/02/2024");
        terminated.terminate("20/08/2024");
        let contracts = vec![contract("01/01/2024"), terminated];
        let pool = [Money::from_cents(33100); 12];

        let a = shared_cost_aggregate(&contracts, 2024, &pool);
        let b = shared_cost_aggregate(&contracts, 2024, &pool);
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_monthly_values() {
        let category_id = CategoryId::new();
        let other_id = CategoryId::new();

        let records = vec![
            CostRecord::new(category_id, 2024, 1, Money::from_cents(1000)),
            CostRecord::new(category_id, 2024, 6, Money::from_cents(2000)),
            CostRecord::new(category_id, 2023, 6, Money::from_cents(9999)), // wrong year
            CostRecord::new(other_id, 2024, 6, Money::from_cents(9999)),    // wrong category
        ];

        let values = category_monthly_values(&records, category_id, 2024);
        assert_eq!(values[0], Money::from_cents(1000));
        assert_eq!(values[5], Money::from_cents(2000));
        assert_eq!(values[1], Money::zero());
    }

    #[test]
    fn test_pooled_monthly_values() {
        let rent = CategoryId::new();
        let power = CategoryId::new();
        let fuel = CategoryId::new(); // not pooled

        let records = vec![
            CostRecord::new(rent, 2024, 1, Money::from_cents(50000)),
            CostRecord::new(power, 2024, 1, Money::from_cents(20000)),
            CostRecord::new(fuel, 2024, 1, Money::from_cents(77777)),
        ];

        let pool = pooled_monthly_values(&records, &[rent, power], 2024);
        assert_eq!(pool[0], Money::from_cents(70000));
        assert_eq!(pool[1], Money::zero());
    }
}
