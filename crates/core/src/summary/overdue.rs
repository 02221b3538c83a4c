//! Overdue classification shared by borrowings and lendings.

use chrono::NaiveDate;

/// Classifies an obligation as overdue: unsettled and due on or before
/// `as_of`.
///
/// `as_of` is captured once per aggregation and passed in explicitly, so a
/// single computation stays internally consistent even when it straddles a
/// midnight boundary.
pub fn is_overdue(settled: bool, due_date: NaiveDate, as_of: NaiveDate) -> bool {
    !settled && due_date <= as_of
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_on_reference_date_is_overdue() {
        assert!(is_overdue(false, date(2025, 6, 15), date(2025, 6, 15)));
    }

    #[test]
    fn due_after_reference_date_is_not_overdue() {
        assert!(!is_overdue(false, date(2025, 6, 16), date(2025, 6, 15)));
    }

    #[test]
    fn settled_is_never_overdue() {
        assert!(!is_overdue(true, date(2020, 1, 1), date(2025, 6, 15)));
    }
}
