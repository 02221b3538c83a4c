//! Borrowings module - domain models, services, and traits.
//!
//! A borrowing is money the user owes to a counterparty. It stays part of
//! the outstanding totals until the explicit settle operation marks it
//! resolved.

mod borrowings_model;
mod borrowings_service;
mod borrowings_traits;

#[cfg(test)]
mod borrowings_model_tests;

pub use borrowings_model::{Borrowing, BorrowingUpdate, NewBorrowing};
pub use borrowings_service::BorrowingService;
pub use borrowings_traits::{BorrowingRepositoryTrait, BorrowingServiceTrait};
