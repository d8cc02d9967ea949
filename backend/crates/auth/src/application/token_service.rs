//! Token Service
//!
//! Issues and validates HS256 session tokens. Tokens are never stored;
//! there is no revocation, so a token is good until its `exp`.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::Serialize;

use crate::application::config::AuthConfig;
use crate::domain::entity::session_claims::SessionClaims;
use crate::error::{AuthError, AuthResult};

/// Access + refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against our own clock without leeway.
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            validation,
            access_ttl_secs: ttl_secs(config.access_token_ttl),
            refresh_ttl_secs: ttl_secs(config.refresh_token_ttl),
        }
    }

    pub fn issue_token_pair(&self, user_id: UserId, email: &str) -> AuthResult<TokenPair> {
        self.issue_token_pair_at(user_id, email, Utc::now().timestamp())
    }

    /// Issue both tokens as of `now` (Unix seconds)
    pub fn issue_token_pair_at(
        &self,
        user_id: UserId,
        email: &str,
        now: i64,
    ) -> AuthResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.sign(user_id, email, now, self.access_ttl_secs)?,
            refresh_token: self.sign(user_id, email, now, self.refresh_ttl_secs)?,
        })
    }

    pub fn validate_token(&self, token: &str) -> AuthResult<SessionClaims> {
        self.validate_token_at(token, Utc::now().timestamp())
    }

    /// Signature, shape and expiry failures all collapse to `InvalidToken`.
    pub fn validate_token_at(&self, token: &str, now: i64) -> AuthResult<SessionClaims> {
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AuthError::InvalidToken)?
            .claims;

        if claims.is_expired_at(now) {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    fn sign(&self, user_id: UserId, email: &str, now: i64, ttl_secs: i64) -> AuthResult<String> {
        let claims = SessionClaims {
            sub: email.to_string(),
            user_id,
            iat: now,
            exp: now.saturating_add(ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {}", e)))
    }
}

fn ttl_secs(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}
