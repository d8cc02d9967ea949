//! Booking Routes
//!
//! Split in two so the binary can put its bearer-token gate in front of
//! the protected half. Protected handlers read the caller from
//! [`kernel::identity::CurrentUser`] and answer 401 if the gate is missing.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::domain::repository::BookingRepository;
use crate::presentation::handlers::{self, BookingAppState};

/// `POST /bookings`, `GET /bookings/{id}`, `GET /bookings/health`
pub fn public_routes<B>(state: BookingAppState<B>) -> Router
where
    B: BookingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/bookings", post(handlers::create_booking::<B>))
        .route("/bookings/health", get(handlers::health))
        .route("/bookings/{id}", get(handlers::get_booking::<B>))
        .with_state(state)
}

/// `GET /bookings`, `PUT /bookings/{id}`, `DELETE /bookings/{id}`,
/// `PUT /bookings/{id}/accept`, `PUT /bookings/{id}/decline`
pub fn protected_routes<B>(state: BookingAppState<B>) -> Router
where
    B: BookingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/bookings", get(handlers::list_my_bookings::<B>))
        .route(
            "/bookings/{id}",
            put(handlers::update_booking::<B>).delete(handlers::delete_booking::<B>),
        )
        .route("/bookings/{id}/accept", put(handlers::accept_booking::<B>))
        .route("/bookings/{id}/decline", put(handlers::decline_booking::<B>))
        .with_state(state)
}
