//! Create Booking Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entity::booking::{Booking, BookingDetails, NewBooking};
use crate::domain::repository::BookingRepository;
use crate::error::BookingResult;

pub struct CreateBookingUseCase<B>
where
    B: BookingRepository,
{
    booking_repo: Arc<B>,
}

impl<B> CreateBookingUseCase<B>
where
    B: BookingRepository,
{
    pub fn new(booking_repo: Arc<B>) -> Self {
        Self { booking_repo }
    }

    /// Persist a new `Pending` booking. No availability or overlap check.
    pub async fn execute(&self, details: BookingDetails) -> BookingResult<Booking> {
        let new_booking = NewBooking::new(details, Utc::now());
        let booking_id = self.booking_repo.insert(&new_booking).await?;
        let booking = Booking::from_new(booking_id, new_booking);

        tracing::info!(
            booking_id = %booking.id,
            user_id = %booking.user_id,
            car_id = %booking.car_id,
            "Booking created"
        );

        Ok(booking)
    }
}
