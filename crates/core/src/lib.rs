//! Cashtrack Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Cashtrack: the four
//! ledger record kinds (incomes, expenses, borrowings, lendings) and the
//! aggregation engine that computes dashboard and monthly summaries over
//! them. It is storage-agnostic and defines traits that are implemented
//! by the `storage-memory` crate.

pub mod borrowings;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod incomes;
pub mod lendings;
pub mod reports;
pub mod summary;
pub mod users;
pub mod utils;

// Re-export the aggregation output types
pub use summary::{DashboardSummary, MonthlySummary};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
