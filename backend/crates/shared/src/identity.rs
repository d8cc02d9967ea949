//! Authenticated caller identity
//!
//! Set by the bearer-token middleware, read by protected handlers.
//! Lives in the kernel so domain crates can require a caller without
//! depending on the auth crate.

use serde::Serialize;

use crate::id::UserId;

/// The caller resolved from a valid access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: String,
}

#[cfg(feature = "axum")]
mod extract {
    use axum::extract::FromRequestParts;
    use http::request::Parts;

    use super::CurrentUser;
    use crate::error::app_error::AppError;

    impl<S> FromRequestParts<S> for CurrentUser
    where
        S: Send + Sync,
    {
        type Rejection = AppError;

        async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
            parts
                .extensions
                .get::<CurrentUser>()
                .cloned()
                .ok_or_else(|| AppError::unauthorized("Authentication required"))
        }
    }
}
