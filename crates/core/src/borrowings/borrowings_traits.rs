//! Borrowing repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::borrowings_model::{Borrowing, BorrowingUpdate, NewBorrowing};
use crate::errors::Result;

/// Trait defining the contract for Borrowing repository operations.
///
/// Range queries are keyed on the borrow date (origination), not the due
/// date. Sum queries return the additive identity when no rows match.
#[async_trait]
pub trait BorrowingRepositoryTrait: Send + Sync {
    /// Records a new borrowing for the user, unsettled.
    async fn create(&self, user_id: &str, new_borrowing: NewBorrowing) -> Result<Borrowing>;

    /// Updates a borrowing owned by the user, leaving `settled` untouched.
    async fn update(
        &self,
        user_id: &str,
        borrowing_update: BorrowingUpdate,
    ) -> Result<Borrowing>;

    /// Deletes a borrowing owned by the user.
    async fn delete(&self, user_id: &str, borrowing_id: &str) -> Result<()>;

    /// Marks a borrowing settled. Settling an already-settled record is a
    /// no-op.
    async fn mark_settled(&self, user_id: &str, borrowing_id: &str) -> Result<Borrowing>;

    /// Retrieves a single borrowing owned by the user.
    fn get_for_user(&self, user_id: &str, borrowing_id: &str) -> Result<Borrowing>;

    /// Lists all borrowings for the user, settled included.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Borrowing>>;

    /// Lists the user's unsettled borrowings.
    fn list_unsettled_for_user(&self, user_id: &str) -> Result<Vec<Borrowing>>;

    /// Sums all borrowing amounts for the user, settled included.
    fn sum_for_user(&self, user_id: &str) -> Result<Decimal>;

    /// Sums borrowing amounts with borrow date in `[start, end]`,
    /// inclusive.
    fn sum_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal>;

    /// Sums the user's unsettled borrowing amounts.
    fn sum_unsettled_for_user(&self, user_id: &str) -> Result<Decimal>;

    /// Sums the user's unsettled borrowing amounts with due date on or
    /// before `as_of`.
    fn sum_overdue_for_user(&self, user_id: &str, as_of: NaiveDate) -> Result<Decimal>;
}

/// Trait defining the contract for Borrowing service operations.
#[async_trait]
pub trait BorrowingServiceTrait: Send + Sync {
    async fn add_borrowing(
        &self,
        user_id: &str,
        new_borrowing: NewBorrowing,
    ) -> Result<Borrowing>;

    async fn update_borrowing(
        &self,
        user_id: &str,
        borrowing_update: BorrowingUpdate,
    ) -> Result<Borrowing>;

    async fn delete_borrowing(&self, user_id: &str, borrowing_id: &str) -> Result<()>;

    /// Resolves an obligation; the only writer of the settled flag.
    async fn settle_borrowing(&self, user_id: &str, borrowing_id: &str) -> Result<Borrowing>;

    fn get_borrowings(&self, user_id: &str) -> Result<Vec<Borrowing>>;

    fn get_unsettled_borrowings(&self, user_id: &str) -> Result<Vec<Borrowing>>;
}
