//! Use-case and HTTP tests for the booking crate

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use kernel::id::{CarId, UserId};

    use crate::domain::entity::booking::BookingDetails;
    use crate::infra::memory::InMemoryBookingRepository;

    pub fn repo() -> Arc<InMemoryBookingRepository> {
        Arc::new(InMemoryBookingRepository::new())
    }

    pub fn details(user: i64, car: i64) -> BookingDetails {
        let start = Utc.with_ymd_and_hms(2030, 5, 1, 10, 0, 0).unwrap();
        BookingDetails {
            user_id: UserId::new(user),
            car_id: CarId::new(car),
            start_date: start,
            end_date: start + Duration::days(2),
            total_amount: 180.0,
            payment_method: "card".into(),
        }
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::support::*;
    use crate::application::{CreateBookingUseCase, ManageBookingUseCase, ReviewBookingUseCase};
    use crate::domain::value_object::booking_status::BookingStatus;
    use crate::error::BookingError;
    use kernel::id::BookingId;

    #[tokio::test]
    async fn test_create_assigns_id_and_pending() {
        let repo = repo();
        let create = CreateBookingUseCase::new(repo.clone());

        let first = create.execute(details(1, 1)).await.unwrap();
        let second = create.execute(details(1, 2)).await.unwrap();

        assert_eq!(first.status, BookingStatus::Pending);
        assert_eq!(second.status, BookingStatus::Pending);
        assert!(second.id > first.id);

        let stored = ManageBookingUseCase::new(repo).get(first.id).await.unwrap();
        assert_eq!(stored, first);
    }

    #[tokio::test]
    async fn test_accept_is_once_only() {
        let repo = repo();
        let booking = CreateBookingUseCase::new(repo.clone())
            .execute(details(1, 1))
            .await
            .unwrap();
        let review = ReviewBookingUseCase::new(repo.clone());

        let accepted = review.accept(booking.id).await.unwrap();
        assert_eq!(accepted.status, BookingStatus::Accepted);
        assert!(accepted.updated_at >= booking.updated_at);
        assert_eq!(accepted.created_at, booking.created_at);

        let err = review.accept(booking.id).await.unwrap_err();
        assert!(matches!(err, BookingError::InvalidTransition { .. }));
        let err = review.decline(booking.id).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "booking cannot be declined because it is not in 'Pending' status"
        );

        let stored = ManageBookingUseCase::new(repo).get(booking.id).await.unwrap();
        assert_eq!(stored.status, BookingStatus::Accepted);
    }

    #[tokio::test]
    async fn test_decline_is_once_only() {
        let repo = repo();
        let booking = CreateBookingUseCase::new(repo.clone())
            .execute(details(1, 1))
            .await
            .unwrap();
        let review = ReviewBookingUseCase::new(repo.clone());

        review.decline(booking.id).await.unwrap();
        assert!(review.decline(booking.id).await.is_err());
        assert!(review.accept(booking.id).await.is_err());

        let stored = ManageBookingUseCase::new(repo).get(booking.id).await.unwrap();
        assert_eq!(stored.status, BookingStatus::Declined);
    }

    #[tokio::test]
    async fn test_review_missing_booking() {
        let review = ReviewBookingUseCase::new(repo());
        assert!(matches!(
            review.accept(BookingId::new(404)).await,
            Err(BookingError::NotFound)
        ));
        assert!(matches!(
            review.decline(BookingId::new(404)).await,
            Err(BookingError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_for_user_only_returns_own() {
        let repo = repo();
        let create = CreateBookingUseCase::new(repo.clone());
        let a = create.execute(details(1, 1)).await.unwrap();
        create.execute(details(2, 1)).await.unwrap();
        let c = create.execute(details(1, 3)).await.unwrap();

        let mine = ManageBookingUseCase::new(repo)
            .list_for_user(a.user_id)
            .await
            .unwrap();
        let ids: Vec<_> = mine.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[tokio::test]
    async fn test_update_overwrites_and_bypasses_review() {
        let repo = repo();
        let booking = CreateBookingUseCase::new(repo.clone())
            .execute(details(1, 1))
            .await
            .unwrap();
        ReviewBookingUseCase::new(repo.clone())
            .decline(booking.id)
            .await
            .unwrap();

        let manage = ManageBookingUseCase::new(repo);
        let mut changed = details(1, 9);
        changed.total_amount = 75.25;
        let updated = manage
            .update(
                booking.id,
                crate::application::UpdateBookingInput {
                    details: changed,
                    status: BookingStatus::Accepted,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, BookingStatus::Accepted);
        assert_eq!(updated.car_id.get(), 9);
        assert_eq!(updated.created_at, booking.created_at);
        assert_eq!(manage.get(booking.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo();
        let booking = CreateBookingUseCase::new(repo.clone())
            .execute(details(1, 1))
            .await
            .unwrap();
        let manage = ManageBookingUseCase::new(repo);

        manage.delete(booking.id).await.unwrap();
        assert!(matches!(manage.get(booking.id).await, Err(BookingError::NotFound)));
        assert!(matches!(
            manage.delete(booking.id).await,
            Err(BookingError::NotFound)
        ));
    }
}

#[cfg(test)]
mod race_tests {
    use std::sync::Arc;

    use kernel::id::{BookingId, UserId};
    use tokio::sync::Barrier;

    use super::support::*;
    use crate::application::{CreateBookingUseCase, ReviewBookingUseCase};
    use crate::domain::entity::booking::{Booking, NewBooking};
    use crate::domain::repository::BookingRepository;
    use crate::domain::value_object::booking_status::BookingStatus;
    use crate::error::BookingResult;
    use crate::infra::memory::InMemoryBookingRepository;

    /// Holds every reader until two have read, so both reviews see `Pending`.
    struct InterleavingRepository {
        inner: InMemoryBookingRepository,
        barrier: Barrier,
    }

    impl BookingRepository for InterleavingRepository {
        async fn insert(&self, booking: &NewBooking) -> BookingResult<BookingId> {
            self.inner.insert(booking).await
        }

        async fn find_by_id(&self, booking_id: BookingId) -> BookingResult<Option<Booking>> {
            let found = self.inner.find_by_id(booking_id).await;
            self.barrier.wait().await;
            found
        }

        async fn find_by_user(&self, user_id: UserId) -> BookingResult<Vec<Booking>> {
            self.inner.find_by_user(user_id).await
        }

        async fn update(&self, booking: &Booking) -> BookingResult<()> {
            self.inner.update(booking).await
        }

        async fn delete(&self, booking_id: BookingId) -> BookingResult<bool> {
            self.inner.delete(booking_id).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_reviews_last_write_wins() {
        let store = InMemoryBookingRepository::new();
        let booking = CreateBookingUseCase::new(Arc::new(store.clone()))
            .execute(details(1, 1))
            .await
            .unwrap();

        let repo = Arc::new(InterleavingRepository {
            inner: store.clone(),
            barrier: Barrier::new(2),
        });
        let review = ReviewBookingUseCase::new(repo);

        let (accepted, declined) =
            tokio::join!(review.accept(booking.id), review.decline(booking.id));

        // No version check: both callers are told they succeeded.
        let accepted = accepted.unwrap();
        let declined = declined.unwrap();
        assert_eq!(accepted.status, BookingStatus::Accepted);
        assert_eq!(declined.status, BookingStatus::Declined);

        let stored = store.find_by_id(booking.id).await.unwrap().unwrap();
        assert!(stored == accepted || stored == declined);
    }
}

#[cfg(test)]
mod http_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use kernel::id::UserId;
    use kernel::identity::CurrentUser;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryBookingRepository;
    use crate::presentation::{BookingAppState, protected_routes, public_routes};

    /// Stand-in for the bearer-token gate: every caller is user 1.
    async fn as_user_one(mut req: Request<Body>, next: Next) -> Response {
        req.extensions_mut().insert(CurrentUser {
            user_id: UserId::new(1),
            email: "a@x.com".into(),
        });
        next.run(req).await
    }

    fn app() -> Router {
        let state = BookingAppState::new(InMemoryBookingRepository::new());
        public_routes(state.clone())
            .merge(protected_routes(state).route_layer(middleware::from_fn(as_user_one)))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn booking_body(user_id: i64) -> Value {
        json!({
            "user_id": user_id,
            "car_id": 1,
            "start_date": "2030-05-01T10:00:00Z",
            "end_date": "2030-05-03T10:00:00Z",
            "total_amount": 180.0,
            "payment_method": "card",
            "status": "Accepted"
        })
    }

    #[tokio::test]
    async fn test_create_ignores_status_and_review_flow() {
        let app = app();

        let (status, created) = send(&app, json_request("POST", "/bookings", booking_body(1))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "Pending");
        let id = created["id"].as_i64().unwrap();

        let (status, body) =
            send(&app, empty_request("PUT", &format!("/bookings/{id}/accept"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Booking accepted");

        let (status, body) =
            send(&app, empty_request("PUT", &format!("/bookings/{id}/decline"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "booking cannot be declined because it is not in 'Pending' status"
        );

        let (status, fetched) = send(&app, empty_request("GET", &format!("/bookings/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["status"], "Accepted");
    }

    #[tokio::test]
    async fn test_get_missing_and_bad_id() {
        let app = app();

        let (status, _) = send(&app, empty_request("GET", "/bookings/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, empty_request("GET", "/bookings/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_list_returns_callers_bookings() {
        let app = app();
        send(&app, json_request("POST", "/bookings", booking_body(1))).await;
        send(&app, json_request("POST", "/bookings", booking_body(2))).await;

        let (status, list) = send(&app, empty_request("GET", "/bookings")).await;
        assert_eq!(status, StatusCode::OK);
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["user_id"], 1);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let app = app();
        let (_, created) = send(&app, json_request("POST", "/bookings", booking_body(1))).await;
        let id = created["id"].as_i64().unwrap();

        let mut update = booking_body(1);
        update["status"] = json!("Declined");
        update["total_amount"] = json!(50.0);
        let (status, updated) =
            send(&app, json_request("PUT", &format!("/bookings/{id}"), update)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "Declined");
        assert_eq!(updated["total_amount"], 50.0);

        let mut bad = booking_body(1);
        bad["status"] = json!("Completed");
        let (status, _) = send(&app, json_request("PUT", &format!("/bookings/{id}"), bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, empty_request("DELETE", &format!("/bookings/{id}"))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, empty_request("GET", &format!("/bookings/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_protected_routes_need_identity() {
        let state = BookingAppState::new(InMemoryBookingRepository::new());
        let app = public_routes(state.clone()).merge(protected_routes(state));

        let (status, _) = send(&app, empty_request("GET", "/bookings")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_health() {
        let res = app()
            .oneshot(empty_request("GET", "/bookings/health"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Bookings service is running");
    }
}
