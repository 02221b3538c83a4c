//! Income repository and service traits.
//!
//! These traits define the contract for income operations without any
//! storage-specific types, allowing for different Ledger Store
//! implementations.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::incomes_model::{Income, IncomeUpdate, NewIncome};
use crate::errors::Result;

/// Trait defining the contract for Income repository operations.
///
/// Every query is scoped to a single record owner; implementations fail
/// with the store's not-found condition when the owner does not exist.
/// Sum queries return the additive identity, never an absent value, when
/// no rows match.
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    /// Records a new income for the user.
    async fn create(&self, user_id: &str, new_income: NewIncome) -> Result<Income>;

    /// Updates an income owned by the user.
    async fn update(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income>;

    /// Deletes an income owned by the user.
    async fn delete(&self, user_id: &str, income_id: &str) -> Result<()>;

    /// Retrieves a single income owned by the user.
    fn get_for_user(&self, user_id: &str, income_id: &str) -> Result<Income>;

    /// Lists all incomes for the user.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Income>>;

    /// Lists incomes whose income date falls in `[start, end]`, both
    /// bounds inclusive.
    fn list_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Income>>;

    /// Sums all income amounts for the user.
    fn sum_for_user(&self, user_id: &str) -> Result<Decimal>;

    /// Sums income amounts with income date in `[start, end]`, inclusive.
    fn sum_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal>;
}

/// Trait defining the contract for Income service operations.
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    /// Records a new income with business validation.
    async fn add_income(&self, user_id: &str, new_income: NewIncome) -> Result<Income>;

    /// Edits an existing income with business validation.
    async fn update_income(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income>;

    /// Deletes an income owned by the user.
    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<()>;

    /// Lists all incomes for the user.
    fn get_incomes(&self, user_id: &str) -> Result<Vec<Income>>;

    /// Lists the user's incomes for one calendar month.
    fn get_incomes_for_month(&self, user_id: &str, year: i32, month: u32) -> Result<Vec<Income>>;
}
