use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::lendings_model::{Lending, LendingUpdate, NewLending};
use super::lendings_traits::{LendingRepositoryTrait, LendingServiceTrait};
use crate::errors::Result;

/// Service for managing lendings.
pub struct LendingService {
    repository: Arc<dyn LendingRepositoryTrait>,
}

impl LendingService {
    pub fn new(repository: Arc<dyn LendingRepositoryTrait>) -> Self {
        LendingService { repository }
    }
}

#[async_trait]
impl LendingServiceTrait for LendingService {
    async fn add_lending(&self, user_id: &str, mut new_lending: NewLending) -> Result<Lending> {
        new_lending.validate()?;
        if new_lending.id.is_none() {
            new_lending.id = Some(Uuid::new_v4().to_string());
        }
        debug!(
            "Recording lending to '{}' for user {}",
            new_lending.counterparty, user_id
        );
        self.repository.create(user_id, new_lending).await
    }

    async fn update_lending(
        &self,
        user_id: &str,
        lending_update: LendingUpdate,
    ) -> Result<Lending> {
        lending_update.validate()?;
        self.repository.update(user_id, lending_update).await
    }

    async fn delete_lending(&self, user_id: &str, lending_id: &str) -> Result<()> {
        self.repository.delete(user_id, lending_id).await
    }

    async fn settle_lending(&self, user_id: &str, lending_id: &str) -> Result<Lending> {
        debug!("Settling lending {} for user {}", lending_id, user_id);
        self.repository.mark_settled(user_id, lending_id).await
    }

    fn get_lendings(&self, user_id: &str) -> Result<Vec<Lending>> {
        self.repository.list_for_user(user_id)
    }

    fn get_unsettled_lendings(&self, user_id: &str) -> Result<Vec<Lending>> {
        self.repository.list_unsettled_for_user(user_id)
    }
}
