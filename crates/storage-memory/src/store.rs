//! Shared state behind the in-memory repositories.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use cashtrack_core::borrowings::Borrowing;
use cashtrack_core::errors::{Result, StoreError};
use cashtrack_core::expenses::Expense;
use cashtrack_core::incomes::Income;
use cashtrack_core::lendings::Lending;
use cashtrack_core::users::User;

/// Record tables shared by every repository built on one store.
#[derive(Default)]
pub(crate) struct StoreInner {
    pub users: HashMap<String, User>,
    pub incomes: HashMap<String, Income>,
    pub expenses: HashMap<String, Expense>,
    pub borrowings: HashMap<String, Borrowing>,
    pub lendings: HashMap<String, Lending>,
}

impl StoreInner {
    /// Fails with the store's not-found condition when the record owner
    /// does not exist.
    pub fn ensure_user(&self, user_id: &str) -> Result<()> {
        if self.users.contains_key(user_id) {
            return Ok(());
        }
        Err(StoreError::NotFound(format!("user {user_id}")).into())
    }
}

/// Process-local Ledger Store.
///
/// Shared behind an `Arc`; repositories built on the same store use the
/// same tables and observe each other's writes.
#[derive(Default)]
pub struct MemoryLedgerStore {
    pub(crate) inner: RwLock<StoreInner>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user so that records can be attached to them. Intended
    /// for test setup and embedders; identity management itself lives
    /// behind the boundary layer.
    pub fn insert_user(&self, email: &str) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            created_at: Utc::now().naive_utc(),
        };
        debug!("Registering user {} ({})", user.id, user.email);
        self.write().users.insert(user.id.clone(), user.clone());
        user
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap()
    }
}
