//! Lendings module - domain models, services, and traits.
//!
//! A lending is money owed to the user. It mirrors the borrowing shape,
//! keyed on the lend date instead of the borrow date.

mod lendings_model;
mod lendings_service;
mod lendings_traits;

pub use lendings_model::{Lending, LendingUpdate, NewLending};
pub use lendings_service::LendingService;
pub use lendings_traits::{LendingRepositoryTrait, LendingServiceTrait};
