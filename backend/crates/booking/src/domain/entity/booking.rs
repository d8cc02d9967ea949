//! Booking Entity

use chrono::{DateTime, Utc};
use kernel::id::{BookingId, CarId, UserId};
use serde::Serialize;

use crate::domain::value_object::booking_status::BookingStatus;
use crate::error::BookingResult;

/// Caller-controlled part of a booking
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub user_id: UserId,
    pub car_id: CarId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_amount: f64,
    pub payment_method: String,
}

/// A booking about to be inserted. Carries no status: every booking is
/// created `Pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub details: BookingDetails,
    pub created_at: DateTime<Utc>,
}

impl NewBooking {
    pub fn new(details: BookingDetails, now: DateTime<Utc>) -> Self {
        Self {
            details,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub car_id: CarId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Materialize a freshly inserted booking
    pub fn from_new(id: BookingId, new: NewBooking) -> Self {
        let NewBooking {
            details,
            created_at,
        } = new;

        Self {
            id,
            user_id: details.user_id,
            car_id: details.car_id,
            start_date: details.start_date,
            end_date: details.end_date,
            total_amount: details.total_amount,
            status: BookingStatus::Pending,
            payment_method: details.payment_method,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn accept(&mut self, now: DateTime<Utc>) -> BookingResult<()> {
        self.move_to(BookingStatus::Accepted, now)
    }

    pub fn decline(&mut self, now: DateTime<Utc>) -> BookingResult<()> {
        self.move_to(BookingStatus::Declined, now)
    }

    /// Checked move; on error the booking is untouched.
    fn move_to(&mut self, to: BookingStatus, now: DateTime<Utc>) -> BookingResult<()> {
        self.status = self.status.transition_to(to)?;
        self.updated_at = now;
        Ok(())
    }

    /// Full overwrite of every caller-editable field, status included.
    /// No transition check.
    pub fn overwrite(&mut self, details: BookingDetails, status: BookingStatus, now: DateTime<Utc>) {
        self.user_id = details.user_id;
        self.car_id = details.car_id;
        self.start_date = details.start_date;
        self.end_date = details.end_date;
        self.total_amount = details.total_amount;
        self.payment_method = details.payment_method;
        self.status = status;
        self.updated_at = now;
    }
}
