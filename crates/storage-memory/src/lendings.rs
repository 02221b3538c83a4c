//! Lending repository over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use uuid::Uuid;

use cashtrack_core::errors::{Result, StoreError};
use cashtrack_core::lendings::{Lending, LendingRepositoryTrait, LendingUpdate, NewLending};

use crate::store::MemoryLedgerStore;

pub struct MemoryLendingRepository {
    store: Arc<MemoryLedgerStore>,
}

impl MemoryLendingRepository {
    pub fn new(store: Arc<MemoryLedgerStore>) -> Self {
        MemoryLendingRepository { store }
    }
}

#[async_trait]
impl LendingRepositoryTrait for MemoryLendingRepository {
    async fn create(&self, user_id: &str, new_lending: NewLending) -> Result<Lending> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let now = Utc::now().naive_utc();
        let lending = Lending {
            id: new_lending
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            counterparty: new_lending.counterparty,
            amount: new_lending.amount,
            lend_date: new_lending.lend_date,
            due_date: new_lending.due_date,
            // New obligations always enter the ledger unsettled.
            settled: false,
            created_at: now,
            updated_at: now,
        };
        inner.lendings.insert(lending.id.clone(), lending.clone());
        Ok(lending)
    }

    async fn update(&self, user_id: &str, lending_update: LendingUpdate) -> Result<Lending> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let lending = inner
            .lendings
            .get_mut(&lending_update.id)
            .filter(|lending| lending.user_id == user_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!(
                    "lending {} for user {user_id}",
                    lending_update.id
                ))
            })?;
        lending.counterparty = lending_update.counterparty;
        lending.amount = lending_update.amount;
        lending.lend_date = lending_update.lend_date;
        lending.due_date = lending_update.due_date;
        lending.updated_at = Utc::now().naive_utc();
        Ok(lending.clone())
    }

    async fn delete(&self, user_id: &str, lending_id: &str) -> Result<()> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let owned = inner
            .lendings
            .get(lending_id)
            .is_some_and(|lending| lending.user_id == user_id);
        if !owned {
            return Err(
                StoreError::NotFound(format!("lending {lending_id} for user {user_id}")).into(),
            );
        }
        inner.lendings.remove(lending_id);
        Ok(())
    }

    async fn mark_settled(&self, user_id: &str, lending_id: &str) -> Result<Lending> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let lending = inner
            .lendings
            .get_mut(lending_id)
            .filter(|lending| lending.user_id == user_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("lending {lending_id} for user {user_id}"))
            })?;
        if !lending.settled {
            debug!("Marking lending {} settled", lending_id);
            lending.settled = true;
            lending.updated_at = Utc::now().naive_utc();
        }
        Ok(lending.clone())
    }

    fn get_for_user(&self, user_id: &str, lending_id: &str) -> Result<Lending> {
        let inner = self.store.read();
        inner.ensure_user(user_id)?;
        inner
            .lendings
            .get(lending_id)
            .filter(|lending| lending.user_id == user_id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound(format!("lending {lending_id} for user {user_id}")).into()
            })
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Lending>> {
        let inner = self.store.read();
        inner.ensure_user(user_id)?;
        let mut lendings: Vec<Lending> = inner
            .lendings
            .values()
            .filter(|lending| lending.user_id == user_id)
            .cloned()
            .collect();
        lendings.sort_by(|a, b| a.lend_date.cmp(&b.lend_date).then(a.id.cmp(&b.id)));
        Ok(lendings)
    }

    fn list_unsettled_for_user(&self, user_id: &str) -> Result<Vec<Lending>> {
        Ok(self
            .list_for_user(user_id)?
            .into_iter()
            .filter(|lending| !lending.settled)
            .collect())
    }

    fn sum_for_user(&self, user_id: &str) -> Result<Decimal> {
        Ok(self
            .list_for_user(user_id)?
            .iter()
            .fold(Decimal::zero(), |acc, lending| acc + lending.amount))
    }

    fn sum_for_user_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        Ok(self
            .list_for_user(user_id)?
            .iter()
            .filter(|lending| lending.lend_date >= start && lending.lend_date <= end)
            .fold(Decimal::zero(), |acc, lending| acc + lending.amount))
    }

    fn sum_unsettled_for_user(&self, user_id: &str) -> Result<Decimal> {
        Ok(self
            .list_unsettled_for_user(user_id)?
            .iter()
            .fold(Decimal::zero(), |acc, lending| acc + lending.amount))
    }

    fn sum_overdue_for_user(&self, user_id: &str, as_of: NaiveDate) -> Result<Decimal> {
        Ok(self
            .list_for_user(user_id)?
            .iter()
            .filter(|lending| lending.is_overdue_as_of(as_of))
            .fold(Decimal::zero(), |acc, lending| acc + lending.amount))
    }
}
