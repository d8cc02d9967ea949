//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routes.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::BookingAppState;
pub use router::{protected_routes, public_routes};
