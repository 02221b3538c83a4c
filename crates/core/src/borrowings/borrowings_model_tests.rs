//! Tests for borrowing model validation and overdue classification.

#[cfg(test)]
mod tests {
    use crate::borrowings::{Borrowing, NewBorrowing};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stamp() -> NaiveDateTime {
        NaiveDateTime::new(date(2025, 1, 1), NaiveTime::from_hms_opt(0, 0, 0).unwrap())
    }

    fn borrowing(due: NaiveDate, settled: bool) -> Borrowing {
        Borrowing {
            id: "b-1".to_string(),
            user_id: "u-1".to_string(),
            counterparty: "Alice".to_string(),
            amount: dec!(200),
            borrow_date: date(2025, 1, 1),
            due_date: due,
            settled,
            created_at: stamp(),
            updated_at: stamp(),
        }
    }

    #[test]
    fn overdue_includes_due_today_and_excludes_tomorrow() {
        let today = date(2025, 6, 15);
        assert!(borrowing(today, false).is_overdue_as_of(today));
        assert!(!borrowing(date(2025, 6, 16), false).is_overdue_as_of(today));
    }

    #[test]
    fn settled_borrowing_is_never_overdue() {
        let today = date(2025, 6, 15);
        assert!(!borrowing(date(2025, 6, 1), true).is_overdue_as_of(today));
    }

    #[test]
    fn new_borrowing_rejects_due_before_borrow_date() {
        let new_borrowing = NewBorrowing {
            id: None,
            counterparty: "Alice".to_string(),
            amount: dec!(200),
            borrow_date: date(2025, 2, 1),
            due_date: date(2025, 1, 1),
        };
        assert!(new_borrowing.validate().is_err());
    }

    #[test]
    fn new_borrowing_accepts_due_on_borrow_date() {
        let new_borrowing = NewBorrowing {
            id: None,
            counterparty: "Alice".to_string(),
            amount: dec!(200),
            borrow_date: date(2025, 2, 1),
            due_date: date(2025, 2, 1),
        };
        assert!(new_borrowing.validate().is_ok());
    }
}
