//! Users module - identity models and traits.
//!
//! User records are owned by the boundary layer; this crate only ever
//! reads them to resolve record ownership.

mod users_model;
mod users_traits;

pub use users_model::User;
pub use users_traits::UserRepositoryTrait;
