//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be a whole number of seconds (got {value:?})")]
    InvalidSeconds { var: &'static str, value: String },

    #[error("{var} must be between 1 and {max} seconds (got {value})")]
    SecondsOutOfRange { var: &'static str, value: u64, max: u64 },

    #[error("access token lifetime ({access:?}) must be shorter than refresh token lifetime ({refresh:?})")]
    AccessNotShorterThanRefresh { access: Duration, refresh: Duration },
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for token signing. Immutable once the service is built.
    pub token_secret: Vec<u8>,
    /// Access token lifetime (15 minutes)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (1 week)
    pub refresh_token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            access_token_ttl: Duration::from_secs(15 * 60),
            refresh_token_ttl: Duration::from_secs(7 * 24 * 3600),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config for development. Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::with_secret(platform::crypto::random_key().to_vec())
    }

    /// Read `JWT_SECRET`, `ACCESS_TOKEN_TTL_SECS`, `REFRESH_TOKEN_TTL_SECS`
    /// and `PASSWORD_PEPPER`. Only the secret is mandatory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let defaults = Self::default();
        let config = Self {
            token_secret: secret.into_bytes(),
            access_token_ttl: parse_ttl(
                "ACCESS_TOKEN_TTL_SECS",
                env::var("ACCESS_TOKEN_TTL_SECS").ok(),
                defaults.access_token_ttl,
            )?,
            refresh_token_ttl: parse_ttl(
                "REFRESH_TOKEN_TTL_SECS",
                env::var("REFRESH_TOKEN_TTL_SECS").ok(),
                defaults.refresh_token_ttl,
            )?,
            password_pepper: env::var("PASSWORD_PEPPER")
                .ok()
                .filter(|p| !p.is_empty())
                .map(String::into_bytes),
        };
        config.validate()?;
        Ok(config)
    }

    /// Access tokens must expire before the refresh token that renews them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token_ttl >= self.refresh_token_ttl {
            return Err(ConfigError::AccessNotShorterThanRefresh {
                access: self.access_token_ttl,
                refresh: self.refresh_token_ttl,
            });
        }
        Ok(())
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

/// Lifetimes end up as `i64` seconds in token claims.
const MAX_TTL_SECS: u64 = i64::MAX as u64;

fn parse_ttl(
    var: &'static str,
    raw: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    let secs = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidSeconds { var, value: value.clone() })?;
    if secs == 0 || secs > MAX_TTL_SECS {
        return Err(ConfigError::SecondsOutOfRange { var, value: secs, max: MAX_TTL_SECS });
    }
    Ok(Duration::from_secs(secs))
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
