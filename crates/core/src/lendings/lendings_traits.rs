//! Lending repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::lendings_model::{Lending, LendingUpdate, NewLending};
use crate::errors::Result;

/// Trait defining the contract for Lending repository operations.
///
/// Range queries are keyed on the lend date (origination), not the due
/// date. Sum queries return the additive identity when no rows match.
#[async_trait]
pub trait LendingRepositoryTrait: Send + Sync {
    /// Records a new lending for the user, unsettled.
    async fn create(&self, user_id: &str, new_lending: NewLending) -> Result<Lending>;

    /// Updates a lending owned by the user, leaving `settled` untouched.
    async fn update(&self, user_id: &str, lending_update: LendingUpdate) -> Result<Lending>;

    /// Deletes a lending owned by the user.
    async fn delete(&self, user_id: &str, lending_id: &str) -> Result<()>;

    /// Marks a lending settled. Settling an already-settled record is a
    /// no-op.
    async fn mark_settled(&self, user_id: &str, lending_id: &str) -> Result<Lending>;

    /// Retrieves a single lending owned by the user.
    fn get_for_user(&self, user_id: &str, lending_id: &str) -> Result<Lending>;

    /// Lists all lendings for the user, settled included.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Lending>>;

    /// Lists the user's unsettled lendings.
    fn list_unsettled_for_user(&self, user_id: &str) -> Result<Vec<Lending>>;

    /// Sums all lending amounts for the user, settled included.
    fn sum_for_user(&self, user_id: &str) -> Result<Decimal>;

    /// Sums lending amounts with lend date in `[start, end]`, inclusive.
    fn sum_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal>;

    /// Sums the user's unsettled lending amounts.
    fn sum_unsettled_for_user(&self, user_id: &str) -> Result<Decimal>;

    /// Sums the user's unsettled lending amounts with due date on or
    /// before `as_of`.
    fn sum_overdue_for_user(&self, user_id: &str, as_of: NaiveDate) -> Result<Decimal>;
}

/// Trait defining the contract for Lending service operations.
#[async_trait]
pub trait LendingServiceTrait: Send + Sync {
    async fn add_lending(&self, user_id: &str, new_lending: NewLending) -> Result<Lending>;

    async fn update_lending(
        &self,
        user_id: &str,
        lending_update: LendingUpdate,
    ) -> Result<Lending>;

    async fn delete_lending(&self, user_id: &str, lending_id: &str) -> Result<()>;

    /// Resolves an obligation; the only writer of the settled flag.
    async fn settle_lending(&self, user_id: &str, lending_id: &str) -> Result<Lending>;

    fn get_lendings(&self, user_id: &str) -> Result<Vec<Lending>>;

    fn get_unsettled_lendings(&self, user_id: &str) -> Result<Vec<Lending>>;
}
