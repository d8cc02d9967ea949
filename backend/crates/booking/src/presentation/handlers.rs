//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{AppJson, AppPath};
use kernel::id::BookingId;
use kernel::identity::CurrentUser;

use crate::application::{CreateBookingUseCase, ManageBookingUseCase, ReviewBookingUseCase};
use crate::domain::entity::booking::Booking;
use crate::domain::repository::BookingRepository;
use crate::error::BookingResult;
use crate::presentation::dto::{CreateBookingRequest, MessageResponse, UpdateBookingRequest};

/// Shared state for booking handlers
pub struct BookingAppState<B>
where
    B: BookingRepository + Send + Sync + 'static,
{
    pub repo: Arc<B>,
}

impl<B> BookingAppState<B>
where
    B: BookingRepository + Send + Sync + 'static,
{
    pub fn new(repo: B) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

impl<B> Clone for BookingAppState<B>
where
    B: BookingRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

// ============================================================================
// Public
// ============================================================================

/// POST /bookings
pub async fn create_booking<B>(
    State(state): State<BookingAppState<B>>,
    AppJson(req): AppJson<CreateBookingRequest>,
) -> BookingResult<(StatusCode, Json<Booking>)>
where
    B: BookingRepository + Send + Sync + 'static,
{
    let booking = CreateBookingUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /bookings/{id}
pub async fn get_booking<B>(
    State(state): State<BookingAppState<B>>,
    AppPath(booking_id): AppPath<BookingId>,
) -> BookingResult<Json<Booking>>
where
    B: BookingRepository + Send + Sync + 'static,
{
    let booking = ManageBookingUseCase::new(state.repo.clone())
        .get(booking_id)
        .await?;
    Ok(Json(booking))
}

/// GET /bookings/health
pub async fn health() -> &'static str {
    "Bookings service is running"
}

// ============================================================================
// Protected (bearer token required)
// ============================================================================

/// GET /bookings
pub async fn list_my_bookings<B>(
    State(state): State<BookingAppState<B>>,
    user: CurrentUser,
) -> BookingResult<Json<Vec<Booking>>>
where
    B: BookingRepository + Send + Sync + 'static,
{
    let bookings = ManageBookingUseCase::new(state.repo.clone())
        .list_for_user(user.user_id)
        .await?;
    Ok(Json(bookings))
}

/// PUT /bookings/{id}/accept
pub async fn accept_booking<B>(
    State(state): State<BookingAppState<B>>,
    AppPath(booking_id): AppPath<BookingId>,
) -> BookingResult<Json<MessageResponse>>
where
    B: BookingRepository + Send + Sync + 'static,
{
    ReviewBookingUseCase::new(state.repo.clone())
        .accept(booking_id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Booking accepted",
    }))
}

/// PUT /bookings/{id}/decline
pub async fn decline_booking<B>(
    State(state): State<BookingAppState<B>>,
    AppPath(booking_id): AppPath<BookingId>,
) -> BookingResult<Json<MessageResponse>>
where
    B: BookingRepository + Send + Sync + 'static,
{
    ReviewBookingUseCase::new(state.repo.clone())
        .decline(booking_id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Booking declined",
    }))
}

/// PUT /bookings/{id}
pub async fn update_booking<B>(
    State(state): State<BookingAppState<B>>,
    AppPath(booking_id): AppPath<BookingId>,
    AppJson(req): AppJson<UpdateBookingRequest>,
) -> BookingResult<Json<Booking>>
where
    B: BookingRepository + Send + Sync + 'static,
{
    let booking = ManageBookingUseCase::new(state.repo.clone())
        .update(booking_id, req.into())
        .await?;
    Ok(Json(booking))
}

/// DELETE /bookings/{id}
pub async fn delete_booking<B>(
    State(state): State<BookingAppState<B>>,
    AppPath(booking_id): AppPath<BookingId>,
) -> BookingResult<StatusCode>
where
    B: BookingRepository + Send + Sync + 'static,
{
    ManageBookingUseCase::new(state.repo.clone())
        .delete(booking_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
