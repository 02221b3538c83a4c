//! Expense repository over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use uuid::Uuid;

use cashtrack_core::errors::{Result, StoreError};
use cashtrack_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};

use crate::store::MemoryLedgerStore;

pub struct MemoryExpenseRepository {
    store: Arc<MemoryLedgerStore>,
}

impl MemoryExpenseRepository {
    pub fn new(store: Arc<MemoryLedgerStore>) -> Self {
        MemoryExpenseRepository { store }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for MemoryExpenseRepository {
    async fn create(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let now = Utc::now().naive_utc();
        let expense = Expense {
            id: new_expense
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            amount: new_expense.amount,
            category: new_expense.category,
            description: new_expense.description,
            expense_date: new_expense.expense_date,
            created_at: now,
            updated_at: now,
        };
        inner.expenses.insert(expense.id.clone(), expense.clone());
        Ok(expense)
    }

    async fn update(&self, user_id: &str, expense_update: ExpenseUpdate) -> Result<Expense> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let expense = inner
            .expenses
            .get_mut(&expense_update.id)
            .filter(|expense| expense.user_id == user_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!(
                    "expense {} for user {user_id}",
                    expense_update.id
                ))
            })?;
        expense.amount = expense_update.amount;
        expense.category = expense_update.category;
        expense.description = expense_update.description;
        expense.expense_date = expense_update.expense_date;
        expense.updated_at = Utc::now().naive_utc();
        Ok(expense.clone())
    }

    async fn delete(&self, user_id: &str, expense_id: &str) -> Result<()> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let owned = inner
            .expenses
            .get(expense_id)
            .is_some_and(|expense| expense.user_id == user_id);
        if !owned {
            return Err(
                StoreError::NotFound(format!("expense {expense_id} for user {user_id}")).into(),
            );
        }
        inner.expenses.remove(expense_id);
        Ok(())
    }

    fn get_for_user(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        let inner = self.store.read();
        inner.ensure_user(user_id)?;
        inner
            .expenses
            .get(expense_id)
            .filter(|expense| expense.user_id == user_id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound(format!("expense {expense_id} for user {user_id}")).into()
            })
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Expense>> {
        let inner = self.store.read();
        inner.ensure_user(user_id)?;
        let mut expenses: Vec<Expense> = inner
            .expenses
            .values()
            .filter(|expense| expense.user_id == user_id)
            .cloned()
            .collect();
        expenses.sort_by(|a, b| a.expense_date.cmp(&b.expense_date).then(a.id.cmp(&b.id)));
        Ok(expenses)
    }

    fn list_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        Ok(self
            .list_for_user(user_id)?
            .into_iter()
            .filter(|expense| expense.expense_date >= start && expense.expense_date <= end)
            .collect())
    }

    fn sum_for_user(&self, user_id: &str) -> Result<Decimal> {
        Ok(self
            .list_for_user(user_id)?
            .iter()
            .fold(Decimal::zero(), |acc, expense| acc + expense.amount))
    }

    fn sum_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        Ok(self
            .list_for_user_in_range(user_id, start, end)?
            .iter()
            .fold(Decimal::zero(), |acc, expense| acc + expense.amount))
    }
}
