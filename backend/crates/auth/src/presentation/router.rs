//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_bearer_token;

/// Create the Auth router for any repository implementation
///
/// `/register`, `/login` and `/refresh` are public; `/users/me` needs a
/// bearer token.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let protected = Router::new()
        .route(
            "/users/me",
            get(handlers::current_user::<R>).put(handlers::update_current_user::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.middleware_state(),
            require_bearer_token,
        ));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .merge(protected)
        .with_state(state)
}
