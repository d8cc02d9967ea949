//! In-memory Repository
//!
//! Used when no database is configured, and by tests.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    last_id: i64,
}

impl Users {
    fn email_owner(&self, email: &Email) -> Option<&User> {
        self.by_id.values().find(|user| &user.email == email)
    }
}

/// Users held in a map behind an async lock. Clones share the map.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Users>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.email_owner(email).cloned())
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.by_id.get(&user_id).cloned())
    }

    async fn insert(&self, user: &NewUser) -> AuthResult<UserId> {
        let mut users = self.users.write().await;

        if users.email_owner(&user.email).is_some() {
            return Err(AuthError::EmailTaken);
        }

        users.last_id += 1;
        let id = UserId::new(users.last_id);
        users.by_id.insert(id, User::from_new(id, user.clone()));

        Ok(id)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        if !users.by_id.contains_key(&user.id) {
            return Err(AuthError::UserNotFound);
        }
        if users
            .email_owner(&user.email)
            .is_some_and(|owner| owner.id != user.id)
        {
            return Err(AuthError::EmailTaken);
        }

        users.by_id.insert(user.id, user.clone());
        Ok(())
    }
}
