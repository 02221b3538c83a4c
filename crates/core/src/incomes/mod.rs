//! Incomes module - domain models, services, and traits.

mod incomes_model;
mod incomes_service;
mod incomes_traits;


pub use incomes_model::{Income, IncomeUpdate, NewIncome};
pub use incomes_service::IncomeService;
pub use incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
