//! User repository over the in-memory store.

use std::sync::Arc;

use cashtrack_core::errors::{Result, StoreError};
use cashtrack_core::users::{User, UserRepositoryTrait};

use crate::store::MemoryLedgerStore;

pub struct MemoryUserRepository {
    store: Arc<MemoryLedgerStore>,
}

impl MemoryUserRepository {
    pub fn new(store: Arc<MemoryLedgerStore>) -> Self {
        MemoryUserRepository { store }
    }
}

impl UserRepositoryTrait for MemoryUserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        self.store
            .read()
            .users
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {user_id}")).into())
    }

    fn get_by_email(&self, email: &str) -> Result<User> {
        self.store
            .read()
            .users
            .values()
            .find(|user| user.email == email)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user with email {email}")).into())
    }
}
