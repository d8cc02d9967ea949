//! Refresh Tokens Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::application::token_service::{TokenPair, TokenService};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Trades a valid token for a brand-new pair for the same identity.
///
/// The presented token stays valid until it expires on its own. The owner
/// must still exist, and the new pair carries its current email.
pub struct RefreshTokensUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> RefreshTokensUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let claims = self.tokens.validate_token(refresh_token)?;

        let mut user = self
            .user_repo
            .find_by_id(claims.user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let pair = self.tokens.issue_token_pair(user.id, user.email.as_str())?;

        user.record_refresh(Utc::now());
        self.user_repo.update(&user).await?;

        tracing::debug!(user_id = %user.id, "Tokens refreshed");

        Ok(pair)
    }
}
