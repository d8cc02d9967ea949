//! Infrastructure Layer
//!
//! Booking store implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBookingRepository;
pub use postgres::PgBookingRepository;
