//! Manage Booking Use Case
//!
//! Plain reads and writes. None of these consult the status state machine.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{BookingId, UserId};

use crate::domain::entity::booking::{Booking, BookingDetails};
use crate::domain::repository::BookingRepository;
use crate::domain::value_object::booking_status::BookingStatus;
use crate::error::{BookingError, BookingResult};

/// Replacement values for a full update
#[derive(Debug, Clone)]
pub struct UpdateBookingInput {
    pub details: BookingDetails,
    pub status: BookingStatus,
}

pub struct ManageBookingUseCase<B>
where
    B: BookingRepository,
{
    booking_repo: Arc<B>,
}

impl<B> ManageBookingUseCase<B>
where
    B: BookingRepository,
{
    pub fn new(booking_repo: Arc<B>) -> Self {
        Self { booking_repo }
    }

    pub async fn get(&self, booking_id: BookingId) -> BookingResult<Booking> {
        self.booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingError::NotFound)
    }

    pub async fn list_for_user(&self, user_id: UserId) -> BookingResult<Vec<Booking>> {
        self.booking_repo.find_by_user(user_id).await
    }

    /// Overwrite a booking, status included. Can move a reviewed booking
    /// back to `Pending`.
    pub async fn update(
        &self,
        booking_id: BookingId,
        input: UpdateBookingInput,
    ) -> BookingResult<Booking> {
        let mut booking = self.get(booking_id).await?;

        if booking.status != input.status {
            tracing::warn!(
                booking_id = %booking_id,
                from = %booking.status,
                to = %input.status,
                "Booking status overwritten without review"
            );
        }

        booking.overwrite(input.details, input.status, Utc::now());
        self.booking_repo.update(&booking).await?;

        Ok(booking)
    }

    pub async fn delete(&self, booking_id: BookingId) -> BookingResult<()> {
        if !self.booking_repo.delete(booking_id).await? {
            return Err(BookingError::NotFound);
        }

        tracing::info!(booking_id = %booking_id, "Booking deleted");
        Ok(())
    }
}
