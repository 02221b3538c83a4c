use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::Result;
use crate::utils::time_utils::month_range;

/// Service for managing expense records.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn add_expense(&self, user_id: &str, mut new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        if new_expense.id.is_none() {
            new_expense.id = Some(Uuid::new_v4().to_string());
        }
        debug!(
            "Recording expense in category '{}' for user {}",
            new_expense.category, user_id
        );
        self.repository.create(user_id, new_expense).await
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_update: ExpenseUpdate,
    ) -> Result<Expense> {
        expense_update.validate()?;
        self.repository.update(user_id, expense_update).await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        self.repository.delete(user_id, expense_id).await
    }

    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.repository.list_for_user(user_id)
    }

    fn get_expenses_for_month(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Expense>> {
        let (start, end) = month_range(year, month)?;
        self.repository.list_for_user_in_range(user_id, start, end)
    }
}
