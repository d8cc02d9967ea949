//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Exact-match lookup
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Insert and return the assigned id. `EmailTaken` on a duplicate email.
    async fn insert(&self, user: &NewUser) -> AuthResult<UserId>;

    /// Overwrite the stored record. `UserNotFound` if it does not exist.
    async fn update(&self, user: &User) -> AuthResult<()>;
}
