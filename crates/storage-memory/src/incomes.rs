//! Income repository over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use uuid::Uuid;

use cashtrack_core::errors::{Result, StoreError};
use cashtrack_core::incomes::{Income, IncomeRepositoryTrait, IncomeUpdate, NewIncome};

use crate::store::MemoryLedgerStore;

pub struct MemoryIncomeRepository {
    store: Arc<MemoryLedgerStore>,
}

impl MemoryIncomeRepository {
    pub fn new(store: Arc<MemoryLedgerStore>) -> Self {
        MemoryIncomeRepository { store }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for MemoryIncomeRepository {
    async fn create(&self, user_id: &str, new_income: NewIncome) -> Result<Income> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let now = Utc::now().naive_utc();
        let income = Income {
            id: new_income
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            amount: new_income.amount,
            source: new_income.source,
            description: new_income.description,
            income_date: new_income.income_date,
            created_at: now,
            updated_at: now,
        };
        inner.incomes.insert(income.id.clone(), income.clone());
        Ok(income)
    }

    async fn update(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let income = inner
            .incomes
            .get_mut(&income_update.id)
            .filter(|income| income.user_id == user_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("income {} for user {user_id}", income_update.id))
            })?;
        income.amount = income_update.amount;
        income.source = income_update.source;
        income.description = income_update.description;
        income.income_date = income_update.income_date;
        income.updated_at = Utc::now().naive_utc();
        Ok(income.clone())
    }

    async fn delete(&self, user_id: &str, income_id: &str) -> Result<()> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let owned = inner
            .incomes
            .get(income_id)
            .is_some_and(|income| income.user_id == user_id);
        if !owned {
            return Err(
                StoreError::NotFound(format!("income {income_id} for user {user_id}")).into(),
            );
        }
        inner.incomes.remove(income_id);
        Ok(())
    }

    fn get_for_user(&self, user_id: &str, income_id: &str) -> Result<Income> {
        let inner = self.store.read();
        inner.ensure_user(user_id)?;
        inner
            .incomes
            .get(income_id)
            .filter(|income| income.user_id == user_id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound(format!("income {income_id} for user {user_id}")).into()
            })
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Income>> {
        let inner = self.store.read();
        inner.ensure_user(user_id)?;
        let mut incomes: Vec<Income> = inner
            .incomes
            .values()
            .filter(|income| income.user_id == user_id)
            .cloned()
            .collect();
        incomes.sort_by(|a, b| a.income_date.cmp(&b.income_date).then(a.id.cmp(&b.id)));
        Ok(incomes)
    }

    fn list_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Income>> {
        Ok(self
            .list_for_user(user_id)?
            .into_iter()
            .filter(|income| income.income_date >= start && income.income_date <= end)
            .collect())
    }

    fn sum_for_user(&self, user_id: &str) -> Result<Decimal> {
        Ok(self
            .list_for_user(user_id)?
            .iter()
            .fold(Decimal::zero(), |acc, income| acc + income.amount))
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
            .fold(Decimal::zero(), |acc, income| acc + income.amount))
    }
}
