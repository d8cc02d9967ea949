//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with email + password and a renter profile
//! - Login returning an access/refresh token pair (HS256 JWT)
//! - Token refresh
//! - Partial profile update for the authenticated user
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Stateless tokens; expired, tampered and malformed tokens are one error
//! - Unknown email and wrong password are indistinguishable to the caller

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token_service::{TokenPair, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::{
    AuthAppState, AuthMiddlewareState, auth_router, middleware::require_bearer_token,
};
