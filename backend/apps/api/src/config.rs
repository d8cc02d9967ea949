//! Server configuration
//!
//! Everything here comes from the environment (after `.env` is loaded).

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use auth::AuthConfig;
use auth::application::ConfigError;
use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `None` runs on in-memory stores
    pub database_url: Option<String>,
    pub frontend_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8080")?;

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        Ok(Self {
            bind_addr,
            database_url,
            frontend_origins,
        })
    }
}

/// Comma-separated list; entries that are not valid header values are skipped.
pub fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

/// Token settings. A debug build without `JWT_SECRET` gets a random
/// per-process secret; a release build refuses to start.
pub fn load_auth_config() -> anyhow::Result<AuthConfig> {
    match AuthConfig::from_env() {
        Ok(config) => Ok(config),
        Err(ConfigError::Missing(var)) if cfg!(debug_assertions) => {
            tracing::warn!(
                var,
                "Signing secret not configured, using a random development secret"
            );
            Ok(AuthConfig::development())
        }
        Err(e) => Err(e).context("Invalid auth configuration"),
    }
}
