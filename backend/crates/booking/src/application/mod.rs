//! Application Layer
//!
//! Use cases over the booking store.

pub mod create_booking;
pub mod manage_booking;
pub mod review_booking;

// Re-exports
pub use create_booking::CreateBookingUseCase;
pub use manage_booking::{ManageBookingUseCase, UpdateBookingInput};
pub use review_booking::ReviewBookingUseCase;
