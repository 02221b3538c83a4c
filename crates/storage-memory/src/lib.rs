//! In-memory Ledger Store for Cashtrack.
//!
//! This crate implements the repository traits defined in
//! `cashtrack-core` over process-local maps. It backs the integration
//! tests and embedders that need a working Ledger Store without any
//! persistence:
//! - One repository per record kind (incomes, expenses, borrowings,
//!   lendings) plus the read-only user repository
//! - Uuid ids assigned on insert when the caller supplies none
//! - Every per-user query verifies the record owner first and fails with
//!   the store's not-found condition otherwise
//!
//! # Architecture
//!
//! ```text
//! core (domain + engine)
//!          │
//!          ▼
//! storage-memory (this crate)
//!          │
//!          ▼
//!   RwLock<HashMap<..>>
//! ```
//!
//! Reads take a consistent snapshot under the read lock; the store never
//! retries or masks a failure.

mod borrowings;
mod expenses;
mod incomes;
mod lendings;
mod store;
mod users;

pub use borrowings::MemoryBorrowingRepository;
pub use expenses::MemoryExpenseRepository;
pub use incomes::MemoryIncomeRepository;
pub use lendings::MemoryLendingRepository;
pub use store::MemoryLedgerStore;
pub use users::MemoryUserRepository;
