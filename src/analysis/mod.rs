//! Contract-lifecycle monthly aggregation
//!
//! Pure, synchronous computation over already-loaded contracts and cost
//! records. No I/O, no shared state, no error paths: malformed dates degrade
//! to "no constraint" and empty inputs degrade to all-zero results, so a
//! report can always be rendered.

pub mod activity;
pub mod aggregate;

pub use activity::{
    active_contract_count, active_counts_by_month, any_terminated_before, is_active_in_month,
};
pub use aggregate::{
    category_monthly_values, flat_fee_aggregate, pooled_monthly_values, shared_cost_aggregate,
    suppress_after_termination, MonthlyAggregate, MONTHS,
};
