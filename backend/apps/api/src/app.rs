//! Router assembly

use std::time::Duration;

use auth::domain::repository::UserRepository;
use auth::{AuthAppState, auth_router, require_bearer_token};
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware};
use booking::{BookingAppState, BookingRepository, protected_routes, public_routes};
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

const HEALTH_PING_TIMEOUT: Duration = Duration::from_secs(2);

/// All routes. Booking's protected half sits behind the bearer-token gate
/// owned by the auth crate. `db` is pinged by `/health`; without one the
/// stores live in memory and are always reachable.
pub fn build_router<R, B>(
    auth: AuthAppState<R>,
    bookings: BookingAppState<B>,
    db: Option<PgPool>,
) -> Router
where
    R: UserRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    let gate = middleware::from_fn_with_state(auth.middleware_state(), require_bearer_token);

    Router::new()
        .route("/health", get(health))
        .with_state(db)
        .merge(auth_router(auth))
        .merge(public_routes(bookings.clone()))
        .merge(protected_routes(bookings).route_layer(gate))
}

/// GET /health
async fn health(State(db): State<Option<PgPool>>) -> Response {
    let Some(pool) = db else {
        return "OK".into_response();
    };

    let ping = tokio::time::timeout(HEALTH_PING_TIMEOUT, sqlx::query("SELECT 1").execute(&pool));
    match ping.await {
        Ok(Ok(_)) => "OK".into_response(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "Database unreachable").into_response()
        }
        Err(_) => {
            tracing::warn!("Health check timed out");
            (StatusCode::SERVICE_UNAVAILABLE, "Database unreachable").into_response()
        }
    }
}

pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]))
}
