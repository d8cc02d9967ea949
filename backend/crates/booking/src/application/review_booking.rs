//! Review Booking Use Case
//!
//! Accept or decline a pending booking. Read, check, write; a concurrent
//! review of the same booking can slip in between and the later write wins.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::BookingId;

use crate::domain::entity::booking::Booking;
use crate::domain::repository::BookingRepository;
use crate::error::{BookingError, BookingResult};

pub struct ReviewBookingUseCase<B>
where
    B: BookingRepository,
{
    booking_repo: Arc<B>,
}

impl<B> ReviewBookingUseCase<B>
where
    B: BookingRepository,
{
    pub fn new(booking_repo: Arc<B>) -> Self {
        Self { booking_repo }
    }

    pub async fn accept(&self, booking_id: BookingId) -> BookingResult<Booking> {
        self.review(booking_id, Booking::accept).await
    }

    pub async fn decline(&self, booking_id: BookingId) -> BookingResult<Booking> {
        self.review(booking_id, Booking::decline).await
    }

    async fn review(
        &self,
        booking_id: BookingId,
        decide: fn(&mut Booking, DateTime<Utc>) -> BookingResult<()>,
    ) -> BookingResult<Booking> {
        let mut booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        decide(&mut booking, Utc::now())?;
        self.booking_repo.update(&booking).await?;

        tracing::info!(booking_id = %booking.id, status = %booking.status, "Booking reviewed");

        Ok(booking)
    }
}
