use crate::errors::Result;
use crate::users::users_model::User;

/// Trait for user repository operations.
///
/// Read-only from this crate's perspective: account creation and
/// credential management live behind the boundary layer.
pub trait UserRepositoryTrait: Send + Sync {
    /// Retrieves a user by id, failing with the store's not-found
    /// condition when the owner does not exist.
    fn get_by_id(&self, user_id: &str) -> Result<User>;

    /// Retrieves a user by email address.
    fn get_by_email(&self, email: &str) -> Result<User>;
}
