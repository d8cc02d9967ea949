//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod profile;
pub mod refresh_tokens;
pub mod sign_in;
pub mod sign_up;
pub mod token_service;

// Re-exports
pub use config::{AuthConfig, ConfigError};
pub use profile::{ProfileUseCase, UpdateProfileInput};
pub use refresh_tokens::RefreshTokensUseCase;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token_service::{TokenPair, TokenService};
