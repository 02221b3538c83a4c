//! Expense repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::errors::Result;

/// Trait defining the contract for Expense repository operations.
///
/// Sum queries return the additive identity, never an absent value, when
/// no rows match.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Records a new expense for the user.
    async fn create(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;

    /// Updates an expense owned by the user.
    async fn update(&self, user_id: &str, expense_update: ExpenseUpdate) -> Result<Expense>;

    /// Deletes an expense owned by the user.
    async fn delete(&self, user_id: &str, expense_id: &str) -> Result<()>;

    /// Retrieves a single expense owned by the user.
    fn get_for_user(&self, user_id: &str, expense_id: &str) -> Result<Expense>;

    /// Lists all expenses for the user.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Expense>>;

    /// Lists expenses whose expense date falls in `[start, end]`, both
    /// bounds inclusive.
    fn list_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;

    /// Sums all expense amounts for the user.
    fn sum_for_user(&self, user_id: &str) -> Result<Decimal>;

    /// Sums expense amounts with expense date in `[start, end]`, inclusive.
    fn sum_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal>;
}

/// Trait defining the contract for Expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;

    async fn update_expense(&self, user_id: &str, expense_update: ExpenseUpdate)
        -> Result<Expense>;

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()>;

    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;

    fn get_expenses_for_month(&self, user_id: &str, year: i32, month: u32) -> Result<Vec<Expense>>;
}
