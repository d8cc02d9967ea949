//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::booking::{Booking, BookingDetails, NewBooking};
pub use repository::BookingRepository;
pub use value_object::booking_status::BookingStatus;
