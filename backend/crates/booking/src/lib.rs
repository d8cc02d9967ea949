//! Booking Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Booking entity, status state machine, repository trait
//! - `application/` - Use cases
//! - `infra/` - In-memory and PostgreSQL stores
//! - `presentation/` - HTTP handlers, DTOs, routes
//!
//! ## Lifecycle
//! Every booking starts `Pending` and may leave it exactly once, to
//! `Accepted` or `Declined`. Both are terminal.
//!
//! Users are referenced by id only; this crate never reads user records.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::{Booking, BookingRepository, BookingStatus};
pub use error::{BookingError, BookingResult};
pub use infra::{memory::InMemoryBookingRepository, postgres::PgBookingRepository};
pub use presentation::{BookingAppState, protected_routes, public_routes};
