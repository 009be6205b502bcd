//! Shared report formatting constants

/// Three-letter month labels, January at index 0
pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_abbrev_layout() {
        assert_eq!(MONTH_ABBREV.len(), 12);
        assert_eq!(MONTH_ABBREV[0], "Jan");
        assert_eq!(MONTH_ABBREV[11], "Dez");
    }
}
