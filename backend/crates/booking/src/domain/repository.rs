//! Repository Traits

use kernel::id::{BookingId, UserId};

use crate::domain::entity::booking::{Booking, NewBooking};
use crate::error::BookingResult;

/// Booking store. Single writes are atomic; there is no version check
/// between a read and a later write.
#[trait_variant::make(BookingRepository: Send)]
pub trait LocalBookingRepository {
    /// Insert with status `Pending` and return the assigned id.
    async fn insert(&self, booking: &NewBooking) -> BookingResult<BookingId>;

    async fn find_by_id(&self, booking_id: BookingId) -> BookingResult<Option<Booking>>;

    /// Ascending by id
    async fn find_by_user(&self, user_id: UserId) -> BookingResult<Vec<Booking>>;

    /// Overwrite the stored record. `NotFound` if it does not exist.
    async fn update(&self, booking: &Booking) -> BookingResult<()>;

    /// `false` if there was nothing to delete
    async fn delete(&self, booking_id: BookingId) -> BookingResult<bool>;
}
