//! Booking DTOs

use chrono::{DateTime, Utc};
use kernel::id::{CarId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::UpdateBookingInput;
use crate::domain::entity::booking::BookingDetails;
use crate::domain::value_object::booking_status::BookingStatus;

/// POST /bookings
///
/// Any `status` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: UserId,
    pub car_id: CarId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: String,
}

impl From<CreateBookingRequest> for BookingDetails {
    fn from(req: CreateBookingRequest) -> Self {
        BookingDetails {
            user_id: req.user_id,
            car_id: req.car_id,
            start_date: req.start_date,
            end_date: req.end_date,
            total_amount: req.total_amount,
            payment_method: req.payment_method,
        }
    }
}

/// PUT /bookings/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingRequest {
    pub user_id: UserId,
    pub car_id: CarId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: String,
    pub status: BookingStatus,
}

impl From<UpdateBookingRequest> for UpdateBookingInput {
    fn from(req: UpdateBookingRequest) -> Self {
        UpdateBookingInput {
            details: BookingDetails {
                user_id: req.user_id,
                car_id: req.car_id,
                start_date: req.start_date,
                end_date: req.end_date,
                total_amount: req.total_amount,
                payment_method: req.payment_method,
            },
            status: req.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
