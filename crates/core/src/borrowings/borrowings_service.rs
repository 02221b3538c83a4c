use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::borrowings_model::{Borrowing, BorrowingUpdate, NewBorrowing};
use super::borrowings_traits::{BorrowingRepositoryTrait, BorrowingServiceTrait};
use crate::errors::Result;

/// Service for managing borrowings.
pub struct BorrowingService {
    repository: Arc<dyn BorrowingRepositoryTrait>,
}

impl BorrowingService {
    pub fn new(repository: Arc<dyn BorrowingRepositoryTrait>) -> Self {
        BorrowingService { repository }
    }
}

#[async_trait]
impl BorrowingServiceTrait for BorrowingService {
    async fn add_borrowing(
        &self,
        user_id: &str,
        mut new_borrowing: NewBorrowing,
    ) -> Result<Borrowing> {
        new_borrowing.validate()?;
        if new_borrowing.id.is_none() {
            new_borrowing.id = Some(Uuid::new_v4().to_string());
        }
        debug!(
            "Recording borrowing from '{}' for user {}",
            new_borrowing.counterparty, user_id
        );
        self.repository.create(user_id, new_borrowing).await
    }

    async fn update_borrowing(
        &self,
        user_id: &str,
        borrowing_update: BorrowingUpdate,
    ) -> Result<Borrowing> {
        borrowing_update.validate()?;
        self.repository.update(user_id, borrowing_update).await
    }

    async fn delete_borrowing(&self, user_id: &str, borrowing_id: &str) -> Result<()> {
        self.repository.delete(user_id, borrowing_id).await
    }

    async fn settle_borrowing(&self, user_id: &str, borrowing_id: &str) -> Result<Borrowing> {
        debug!("Settling borrowing {} for user {}", borrowing_id, user_id);
        self.repository.mark_settled(user_id, borrowing_id).await
    }

    fn get_borrowings(&self, user_id: &str) -> Result<Vec<Borrowing>> {
        self.repository.list_for_user(user_id)
    }

    fn get_unsettled_borrowings(&self, user_id: &str) -> Result<Vec<Borrowing>> {
        self.repository.list_unsettled_for_user(user_id)
    }
}
