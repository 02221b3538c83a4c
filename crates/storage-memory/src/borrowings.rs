//! Borrowing repository over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use uuid::Uuid;

use cashtrack_core::borrowings::{
    Borrowing, BorrowingRepositoryTrait, BorrowingUpdate, NewBorrowing,
};
use cashtrack_core::errors::{Result, StoreError};

use crate::store::MemoryLedgerStore;

pub struct MemoryBorrowingRepository {
    store: Arc<MemoryLedgerStore>,
}

impl MemoryBorrowingRepository {
    pub fn new(store: Arc<MemoryLedgerStore>) -> Self {
        MemoryBorrowingRepository { store }
    }
}

#[async_trait]
impl BorrowingRepositoryTrait for MemoryBorrowingRepository {
    async fn create(&self, user_id: &str, new_borrowing: NewBorrowing) -> Result<Borrowing> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let now = Utc::now().naive_utc();
        let borrowing = Borrowing {
            id: new_borrowing
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            counterparty: new_borrowing.counterparty,
            amount: new_borrowing.amount,
            borrow_date: new_borrowing.borrow_date,
            due_date: new_borrowing.due_date,
            // New obligations always enter the ledger unsettled.
            settled: false,
            created_at: now,
            updated_at: now,
        };
        inner
            .borrowings
            .insert(borrowing.id.clone(), borrowing.clone());
        Ok(borrowing)
    }

    async fn update(
        &self,
        user_id: &str,
        borrowing_update: BorrowingUpdate,
    ) -> Result<Borrowing> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let borrowing = inner
            .borrowings
            .get_mut(&borrowing_update.id)
            .filter(|borrowing| borrowing.user_id == user_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!(
                    "borrowing {} for user {user_id}",
                    borrowing_update.id
                ))
            })?;
        borrowing.counterparty = borrowing_update.counterparty;
        borrowing.amount = borrowing_update.amount;
        borrowing.borrow_date = borrowing_update.borrow_date;
        borrowing.due_date = borrowing_update.due_date;
        borrowing.updated_at = Utc::now().naive_utc();
        Ok(borrowing.clone())
    }

    async fn delete(&self, user_id: &str, borrowing_id: &str) -> Result<()> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let owned = inner
            .borrowings
            .get(borrowing_id)
            .is_some_and(|borrowing| borrowing.user_id == user_id);
        if !owned {
            return Err(StoreError::NotFound(format!(
                "borrowing {borrowing_id} for user {user_id}"
            ))
            .into());
        }
        inner.borrowings.remove(borrowing_id);
        Ok(())
    }

    async fn mark_settled(&self, user_id: &str, borrowing_id: &str) -> Result<Borrowing> {
        let mut inner = self.store.write();
        inner.ensure_user(user_id)?;

        let borrowing = inner
            .borrowings
            .get_mut(borrowing_id)
            .filter(|borrowing| borrowing.user_id == user_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("borrowing {borrowing_id} for user {user_id}"))
            })?;
        if !borrowing.settled {
            debug!("Marking borrowing {} settled", borrowing_id);
            borrowing.settled = true;
            borrowing.updated_at = Utc::now().naive_utc();
        }
        Ok(borrowing.clone())
    }

    fn get_for_user(&self, user_id: &str, borrowing_id: &str) -> Result<Borrowing> {
        let inner = self.store.read();
        inner.ensure_user(user_id)?;
        inner
            .borrowings
            .get(borrowing_id)
            .filter(|borrowing| borrowing.user_id == user_id)
            .cloned()
            .ok_or_else(|| {
                StoreError::NotFound(format!("borrowing {borrowing_id} for user {user_id}"))
                    .into()
            })
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Borrowing>> {
        let inner = self.store.read();
        inner.ensure_user(user_id)?;
        let mut borrowings: Vec<Borrowing> = inner
            .borrowings
            .values()
            .filter(|borrowing| borrowing.user_id == user_id)
            .cloned()
            .collect();
        borrowings.sort_by(|a, b| a.borrow_date.cmp(&b.borrow_date).then(a.id.cmp(&b.id)));
        Ok(borrowings)
    }

    fn list_unsettled_for_user(&self, user_id: &str) -> Result<Vec<Borrowing>> {
        Ok(self
            .list_for_user(user_id)?
            .into_iter()
            .filter(|borrowing| !borrowing.settled)
            .collect())
    }

    fn sum_for_user(&self, user_id: &str) -> Result<Decimal> {
        Ok(self
            .list_for_user(user_id)?
            .iter()
            .fold(Decimal::zero(), |acc, borrowing| acc + borrowing.amount))
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
            .filter(|borrowing| borrowing.borrow_date >= start && borrowing.borrow_date <= end)
            .fold(Decimal::zero(), |acc, borrowing| acc + borrowing.amount))
    }

    fn sum_unsettled_for_user(&self, user_id: &str) -> Result<Decimal> {
        Ok(self
            .list_unsettled_for_user(user_id)?
            .iter()
            .fold(Decimal::zero(), |acc, borrowing| acc + borrowing.amount))
    }

    fn sum_overdue_for_user(&self, user_id: &str, as_of: NaiveDate) -> Result<Decimal> {
        Ok(self
            .list_for_user(user_id)?
            .iter()
            .filter(|borrowing| borrowing.is_overdue_as_of(as_of))
            .fold(Decimal::zero(), |acc, borrowing| acc + borrowing.amount))
    }
}
