//! Calendar month references and localized date parsing
//!
//! Contract dates are stored as localized `DD/MM/YYYY` strings exactly as
//! entered. Two parsers operate on them:
//!
//! - `parse_month_soft`: used by the aggregation logic. A malformed or missing
//!   string yields `None`, meaning "no constraint from this date" - it never
//!   fails. This keeps the aggregation total over its input domain.
//! - `parse_date_strict`: used at data entry, where a bad date is rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (year, month) pair identifying one calendar month
///
/// Ordering is chronological: derived ordering compares year first, then
/// month, which is exactly calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based calendar month (January = 1)
    pub month: u32,
}

impl MonthKey {
    /// Create a month key from a year and a 1-based month
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Create a month key from a year and a 0-based month index (January = 0)
    pub fn from_index(year: i32, month_index: u32) -> Self {
        Self {
            year,
            month: month_index + 1,
        }
    }

    /// The 0-based month index (January = 0)
    pub fn index(&self) -> u32 {
        self.month - 1
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Softly parse the month out of a `DD/MM/YYYY` string.
///
/// Returns `None` for anything that is not three numeric slash-separated
/// fields with a month in 1-12. Callers treat `None` as "unbounded on this
/// side" rather than an error.
pub fn parse_month_soft(date: &str) -> Option<MonthKey> {
    let mut parts = date.trim().split('/');

    let day = parts.next()?.trim();
    let month = parts.next()?.trim();
    let year = parts.next()?.trim();
    if parts.next().is_some() {
        return None;
    }

    day.parse::<u32>().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    if !(1..=12).contains(&month) {
        return None;
    }

    Some(MonthKey { year, month })
}

/// Strictly parse a `DD/MM/YYYY` string as a real calendar date.
///
/// Used at data entry; `31/02/2024` is rejected here even though the soft
/// parser would happily extract February from it.
pub fn parse_date_strict(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%d/%m/%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_ordering() {
        let jan = MonthKey::new(2024, 1);
        let jun = MonthKey::new(2024, 6);
        let jan_next = MonthKey::new(2025, 1);

        assert!(jan < jun);
        assert!(jun < jan_next);
        assert_eq!(jan, MonthKey::from_index(2024, 0));
    }

    #[test]
    fn test_month_key_index() {
        assert_eq!(MonthKey::new(2024, 1).index(), 0);
        assert_eq!(MonthKey::from_index(2024, 11).month, 12);
    }

    #[test]
    fn test_parse_month_soft() {
        assert_eq!(parse_month_soft("15/06/2024"), Some(MonthKey::new(2024, 6)));
        assert_eq!(parse_month_soft("01/01/2023"), Some(MonthKey::new(2023, 1)));
        assert_eq!(parse_month_soft(" 10/03/2024 "), Some(MonthKey::new(2024, 3)));
    }

    #[test]
    fn test_parse_month_soft_malformed() {
        assert_eq!(parse_month_soft(""), None);
        assert_eq!(parse_month_soft("not a date"), None);
        assert_eq!(parse_month_soft("2024-06-15"), None);
        assert_eq!(parse_month_soft("15/13/2024"), None);
        assert_eq!(parse_month_soft("15/00/2024"), None);
        assert_eq!(parse_month_soft("15/06"), None);
        assert_eq!(parse_month_soft("15/06/2024/extra"), None);
    }

    #[test]
    fn test_parse_month_soft_tolerates_bad_day_value() {
        // The aggregation only needs the month; an out-of-range day still
        // yields a usable month key, matching the lenient source behavior.
        assert_eq!(parse_month_soft("99/06/2024"), Some(MonthKey::new(2024, 6)));
    }

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(
            parse_date_strict("15/06/2024"),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
        assert_eq!(parse_date_strict("31/02/2024"), None);
        assert_eq!(parse_date_strict("2024-06-15"), None);
        assert_eq!(parse_date_strict(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", MonthKey::new(2024, 3)), "03/2024");
    }

    #[test]
    fn test_serialization() {
        let key = MonthKey::new(2024, 6);
        let json = serde_json::to_string(&key).unwrap();
        let deserialized: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
