//! Use-case and HTTP tests for the auth crate

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use crate::application::{AuthConfig, SignUpInput};
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::AuthAppState;

    pub fn config() -> AuthConfig {
        AuthConfig::with_secret("test-secret")
    }

    pub fn state() -> AuthAppState<InMemoryUserRepository> {
        AuthAppState::new(InMemoryUserRepository::new(), config())
    }

    pub fn repo_and_config() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>) {
        (Arc::new(InMemoryUserRepository::new()), Arc::new(config()))
    }

    pub fn sign_up_input(email: &str) -> SignUpInput {
        SignUpInput {
            first_name: "Ama".into(),
            last_name: "Mensah".into(),
            email: email.into(),
            password: "pw123456".into(),
            phone_number: "+233200000000".into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod sign_up_tests {
    use super::support::*;
    use crate::application::SignUpUseCase;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{email::Email, user_role::UserRole};
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_register_applies_defaults() {
        let (repo, config) = repo_and_config();
        let view = SignUpUseCase::new(repo.clone(), config)
            .execute(sign_up_input("a@x.com"))
            .await
            .unwrap();

        assert_eq!(view.email, "a@x.com");
        assert_eq!(view.role, UserRole::Customer);

        let stored = repo.find_by_id(view.id).await.unwrap().unwrap();
        assert!(!stored.is_verified);
        assert!(stored.is_active);
        assert_ne!(stored.password.as_phc_string(), "pw123456");
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let (repo, config) = repo_and_config();
        let use_case = SignUpUseCase::new(repo, config);

        let cases: [(fn(&mut crate::application::SignUpInput), &str); 5] = [
            (|i| i.first_name.clear(), "first_name"),
            (|i| i.last_name.clear(), "last_name"),
            (|i| i.email.clear(), "email"),
            (|i| i.password.clear(), "password"),
            (|i| i.phone_number.clear(), "phone_number"),
        ];

        for (blank, field) in cases {
            let mut input = sign_up_input("a@x.com");
            blank(&mut input);
            match use_case.execute(input).await {
                Err(AuthError::MissingField(missing)) => assert_eq!(missing, field),
                other => panic!("expected MissingField({field}), got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (repo, config) = repo_and_config();
        let use_case = SignUpUseCase::new(repo, config);

        use_case.execute(sign_up_input("a@x.com")).await.unwrap();
        let err = use_case.execute(sign_up_input("a@x.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));

        // Emails are case-sensitive
        assert!(use_case.execute(sign_up_input("A@x.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_register_rejects_bad_dates() {
        let (repo, config) = repo_and_config();
        let use_case = SignUpUseCase::new(repo.clone(), config);

        let mut input = sign_up_input("a@x.com");
        input.drivers_license_expiration = Some("2030/01/01".into());
        assert!(matches!(
            use_case.execute(input).await,
            Err(AuthError::InvalidDate(_))
        ));
        assert!(
            repo.find_by_email(&Email::from_db("a@x.com"))
                .await
                .unwrap()
                .is_none()
        );

        let mut input = sign_up_input("a@x.com");
        input.date_of_birth = Some("1990-04-12".into());
        input.drivers_license_expiration = Some(String::new());
        let view = use_case.execute(input).await.unwrap();
        let stored = repo.find_by_id(view.id).await.unwrap().unwrap();
        assert!(stored.profile.date_of_birth.is_some());
        assert!(stored.profile.drivers_license_expiration.is_none());
    }
}

#[cfg(test)]
mod sign_in_tests {
    use std::sync::Arc;

    use super::support::*;
    use crate::application::{SignInInput, SignInUseCase, SignUpUseCase, TokenService};
    use crate::domain::repository::UserRepository;
    use crate::error::AuthError;

    fn sign_in(email: &str, password: &str) -> SignInInput {
        SignInInput {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_identical() {
        let (repo, config) = repo_and_config();
        let tokens = Arc::new(TokenService::new(&config));
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("a@x.com"))
            .await
            .unwrap();

        let use_case = SignInUseCase::new(repo, tokens, config);
        let unknown = use_case.execute(sign_in("b@x.com", "pw123456")).await.unwrap_err();
        let wrong = use_case.execute(sign_in("a@x.com", "wrongpw")).await.unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(
            unknown.to_app_error().message(),
            wrong.to_app_error().message()
        );
    }

    #[tokio::test]
    async fn test_sign_in_issues_tokens_and_records_login() {
        let (repo, config) = repo_and_config();
        let tokens = Arc::new(TokenService::new(&config));
        let view = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("a@x.com"))
            .await
            .unwrap();

        let pair = SignInUseCase::new(repo.clone(), tokens.clone(), config)
            .execute(sign_in("a@x.com", "pw123456"))
            .await
            .unwrap();

        let claims = tokens.validate_token(&pair.access_token).unwrap();
        assert_eq!(claims.user_id, view.id);
        assert_eq!(claims.sub, "a@x.com");

        let stored = repo.find_by_id(view.id).await.unwrap().unwrap();
        assert!(stored.last_login_date.is_some());
    }
}

#[cfg(test)]
mod refresh_tests {
    use std::sync::Arc;

    use kernel::id::UserId;

    use super::support::*;
    use crate::application::{RefreshTokensUseCase, SignUpUseCase, TokenService};
    use crate::domain::repository::UserRepository;
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_refresh_issues_new_pair_and_keeps_old_valid() {
        let (repo, config) = repo_and_config();
        let tokens = Arc::new(TokenService::new(&config));
        let user = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("a@x.com"))
            .await
            .unwrap();
        let before = repo.find_by_id(user.id).await.unwrap().unwrap();

        let issued = chrono::Utc::now().timestamp() - 60;
        let original = tokens
            .issue_token_pair_at(user.id, "a@x.com", issued)
            .unwrap();

        let refreshed = RefreshTokensUseCase::new(repo.clone(), tokens.clone())
            .execute(&original.refresh_token)
            .await
            .unwrap();

        assert_ne!(refreshed.refresh_token, original.refresh_token);
        let claims = tokens.validate_token(&refreshed.access_token).unwrap();
        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.sub, "a@x.com");

        // Written through to the store
        let after = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert!(after.updated_at >= before.updated_at);
        assert_eq!(after.last_login_date, before.last_login_date);

        // No revocation
        assert!(tokens.validate_token(&original.refresh_token).is_ok());
    }

    #[tokio::test]
    async fn test_refresh_for_unknown_user_is_invalid_token() {
        let (repo, config) = repo_and_config();
        let tokens = Arc::new(TokenService::new(&config));
        let orphan = tokens.issue_token_pair(UserId::new(42), "gone@x.com").unwrap();

        let err = RefreshTokensUseCase::new(repo, tokens)
            .execute(&orphan.refresh_token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_refresh_rejects_garbage() {
        let (repo, config) = repo_and_config();
        let use_case = RefreshTokensUseCase::new(repo, Arc::new(TokenService::new(&config)));
        assert!(matches!(
            use_case.execute("garbage").await,
            Err(AuthError::InvalidToken)
        ));
    }
}

#[cfg(test)]
mod profile_tests {
    use kernel::id::UserId;

    use super::support::*;
    use crate::application::{ProfileUseCase, SignUpUseCase, UpdateProfileInput};
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{patch::Patch, user_password::RawPassword};
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_update_missing_user() {
        let (repo, config) = repo_and_config();
        let err = ProfileUseCase::new(repo, config)
            .update(UserId::new(99), UpdateProfileInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_update_email_collision() {
        let (repo, config) = repo_and_config();
        let sign_up = SignUpUseCase::new(repo.clone(), config.clone());
        let a = sign_up.execute(sign_up_input("a@x.com")).await.unwrap();
        sign_up.execute(sign_up_input("b@x.com")).await.unwrap();

        let profile = ProfileUseCase::new(repo, config);

        // Own email is fine
        let view = profile
            .update(
                a.id,
                UpdateProfileInput {
                    email: Patch::Set("a@x.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(view.email, "a@x.com");

        let err = profile
            .update(
                a.id,
                UpdateProfileInput {
                    email: Patch::Set("b@x.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_update_rehashes_password_and_replaces_fields() {
        let (repo, config) = repo_and_config();
        let a = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("a@x.com"))
            .await
            .unwrap();

        ProfileUseCase::new(repo.clone(), config)
            .update(
                a.id,
                UpdateProfileInput {
                    password: Patch::Set("newpass99".into()),
                    city: Patch::Set("Kumasi".into()),
                    postal_code: Patch::Set(String::new()),
                    drivers_license_expiration: Patch::Set("2031-06-30".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = repo.find_by_id(a.id).await.unwrap().unwrap();
        let new_raw = RawPassword::new("newpass99".to_string()).unwrap();
        assert_ne!(stored.password.as_phc_string(), "newpass99");
        assert!(stored.password.verify(&new_raw, None));
        assert_eq!(stored.profile.city, "Kumasi");
        assert_eq!(stored.profile.phone_number, "+233200000000");
        assert_eq!(
            stored.profile.drivers_license_expiration,
            chrono::NaiveDate::from_ymd_opt(2031, 6, 30)
        );
    }

    #[tokio::test]
    async fn test_invalid_date_writes_nothing() {
        let (repo, config) = repo_and_config();
        let a = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(sign_up_input("a@x.com"))
            .await
            .unwrap();

        let err = ProfileUseCase::new(repo.clone(), config)
            .update(
                a.id,
                UpdateProfileInput {
                    city: Patch::Set("Tamale".into()),
                    drivers_license_expiration: Patch::Set("next year".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidDate(_)));

        let stored = repo.find_by_id(a.id).await.unwrap().unwrap();
        assert_eq!(stored.profile.city, "");
    }
}

#[cfg(test)]
mod http_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::*;
    use crate::presentation::auth_router;

    fn app() -> Router {
        auth_router(state())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn registration() -> Value {
        json!({
            "first_name": "Ama",
            "last_name": "Mensah",
            "email": "a@x.com",
            "password": "pw123456",
            "phone_number": "+233200000000"
        })
    }

    #[tokio::test]
    async fn test_register_then_login_flow() {
        let app = app();

        let (status, body) = send(&app, post_json("/register", registration())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["role"], "customer");
        assert!(body.get("password").is_none());

        let (status, _) = send(&app, post_json("/register", registration())).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(
            &app,
            post_json("/login", json!({"email": "a@x.com", "password": "wrongpw"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, tokens) = send(
            &app,
            post_json("/login", json!({"email": "a@x.com", "password": "pw123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let access = tokens["access_token"].as_str().unwrap();

        let req = Request::get("/users/me")
            .header(header::AUTHORIZATION, format!("Bearer {access}"))
            .body(Body::empty())
            .unwrap();
        let (status, me) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["first_name"], "Ama");

        let (status, refreshed) = send(
            &app,
            post_json("/refresh", json!({"refresh_token": tokens["refresh_token"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(refreshed["access_token"].is_string());
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let app = app();

        let req = Request::get("/users/me").body(Body::empty()).unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let req = Request::put("/users/me")
            .header(header::AUTHORIZATION, "Bearer not-a-token")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app();
        let req = Request::post("/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let app = app();
        let mut body = registration();
        body["phone_number"] = json!("");
        let (status, _) = send(&app, post_json("/register", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
