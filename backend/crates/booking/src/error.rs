//! Booking Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::booking_status::BookingStatus;

pub type BookingResult<T> = Result<T, BookingError>;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Booking not found")]
    NotFound,

    /// Only `Pending` bookings can be reviewed
    #[error(
        "booking cannot be {} because it is not in 'Pending' status",
        .to.code().to_ascii_lowercase()
    )]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::NotFound => ErrorKind::NotFound,
            BookingError::InvalidTransition { .. } => ErrorKind::BadRequest,
            BookingError::Database(e) => AppError::from(e).kind(),
            BookingError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Server-side detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        if let BookingError::Database(e) = self {
            return AppError::from(e);
        }
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Internal server error"),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            BookingError::Database(e) => {
                tracing::error!(error = %e, "Booking database error");
            }
            BookingError::Internal(msg) => {
                tracing::error!(message = %msg, "Booking internal error");
            }
            BookingError::InvalidTransition { from, to } => {
                tracing::info!(%from, %to, "Rejected booking transition");
            }
            BookingError::NotFound => {
                tracing::debug!("Booking not found");
            }
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
