//! Auth Middleware
//!
//! Bearer-token gate for protected routes. Runs before the handler; on
//! success the caller's [`CurrentUser`] is placed in request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::identity::CurrentUser;
use std::sync::Arc;

use crate::application::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenService>,
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer_token(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let claims = platform::header::extract_bearer_token(req.headers())
        .ok_or(AuthError::InvalidToken)
        .and_then(|token| state.tokens.validate_token(token))
        .map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(CurrentUser {
        user_id: claims.user_id,
        email: claims.sub,
    });

    Ok(next.run(req).await)
}
