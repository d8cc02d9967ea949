//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::identity::CurrentUser;
use kernel::extract::AppJson;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ProfileUseCase, RefreshTokensUseCase, SignInInput, SignInUseCase, SignUpUseCase, TokenService,
};
use crate::domain::entity::user::UserPublicView;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, RefreshRequest, RegisterRequest, TokenResponse, UpdateProfileRequest,
};
use crate::presentation::middleware::AuthMiddlewareState;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        let tokens = Arc::new(TokenService::new(&config));
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            tokens,
        }
    }

    /// State for the bearer-token gate, sharing this state's signing key
    pub fn middleware_state(&self) -> AuthMiddlewareState {
        AuthMiddlewareState {
            tokens: self.tokens.clone(),
        }
    }
}

// Manual impl: the repository itself need not be Clone.
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

// ============================================================================
// Register / Login / Refresh
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<UserPublicView>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    let view = use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let pair = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(pair.into()))
}

/// POST /refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<RefreshRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let pair = RefreshTokensUseCase::new(state.repo.clone(), state.tokens.clone())
        .execute(&req.refresh_token)
        .await?;
    Ok(Json(pair.into()))
}

// ============================================================================
// Current user (requires authentication)
// ============================================================================

/// GET /users/me
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    user: CurrentUser,
) -> AuthResult<Json<UserPublicView>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone(), state.config.clone());
    Ok(Json(use_case.get(user.user_id).await?))
}

/// PUT /users/me
pub async fn update_current_user<R>(
    State(state): State<AuthAppState<R>>,
    user: CurrentUser,
    AppJson(req): AppJson<UpdateProfileRequest>,
) -> AuthResult<Json<UserPublicView>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone(), state.config.clone());
    Ok(Json(use_case.update(user.user_id, req.into()).await?))
}
