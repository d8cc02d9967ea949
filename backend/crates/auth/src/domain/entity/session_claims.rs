//! Session Claims
//!
//! Token payload. Never persisted; access and refresh tokens carry the
//! same shape and differ only in lifetime.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the user's email
    pub sub: String,
    pub user_id: UserId,
    /// Issued at, Unix seconds
    pub iat: i64,
    /// Expires at, Unix seconds
    pub exp: i64,
}

impl SessionClaims {
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Valid strictly before `exp`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
