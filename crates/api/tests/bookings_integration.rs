//! Booking ticket lifecycle integration tests.

mod common;

use axum::http::StatusCode;
use common::*;
use tower::util::ServiceExt;

async fn create_event(app: &axum::Router, admin: &str, club_id: i32) -> String {
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "POST",
            "/api/admin/events",
            admin,
            serde_json::json!({
                "club_id": club_id,
                "is_association_event": false,
                "title": "Toubkal Ascent",
                "description": "Two-day guided ascent",
                "location": "Imlil",
                "price": 1200
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn booking_lifecycle_pending_to_confirmed() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let admin = create_admin(&app, &pool, &unique("admin")).await;
    let club_id = create_club(&app, &admin, &unique("Atlas Hikers")).await;
    let event_id = create_event(&app, &admin, club_id).await;

    let (user_a, _) = register_user(&app, &unique("usera")).await;

    // Create a ticket: status starts pending with a server-generated reference
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "POST",
            "/api/bookings",
            &user_a,
            serde_json::json!({
                "event_id": event_id,
                "customer_name": "Amina B",
                "customer_email": "amina@example.com",
                "number_of_participants": 2,
                "event_date": "2026-09-12T08:00:00Z",
                "total_price": 100.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let ticket = response_json(response).await;

    let reference = ticket["booking_reference"].as_str().unwrap().to_string();
    let pattern = regex::Regex::new(r"^BKG-\d+-[A-Z0-9]{6}$").unwrap();
    assert!(pattern.is_match(&reference), "bad reference: {}", reference);
    assert_eq!(ticket["status"], "pending");
    assert_eq!(ticket["payment_status"], "pending");
    assert!(ticket["confirmed_at"].is_null());

    // Confirm: payment completes, confirmation time is stamped, reference is
    // untouched
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            &format!("/api/admin/bookings/{}/status", reference),
            &admin,
            serde_json::json!({ "status": "confirmed", "payment_method": "card" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let confirmed = response_json(response).await;

    assert_eq!(confirmed["status"], "confirmed");
    assert_eq!(confirmed["payment_status"], "completed");
    assert!(!confirmed["confirmed_at"].is_null());
    assert_eq!(confirmed["payment_method"], "card");
    assert_eq!(confirmed["booking_reference"], reference.as_str());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn cancelling_stamps_time_and_keeps_reason_semantics() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let admin = create_admin(&app, &pool, &unique("admin")).await;
    let club_id = create_club(&app, &admin, &unique("Atlas Hikers")).await;
    let event_id = create_event(&app, &admin, club_id).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/bookings",
            serde_json::json!({
                "event_id": event_id,
                "customer_name": "Youssef K",
                "customer_email": "youssef@example.com",
                "number_of_participants": 1,
                "event_date": "2026-09-12T08:00:00Z",
                "total_price": 1200.0
            }),
        ))
        .await
        .unwrap();
    let ticket = response_json(response).await;
    let reference = ticket["booking_reference"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            &format!("/api/admin/bookings/{}/status", reference),
            &admin,
            serde_json::json!({
                "status": "cancelled",
                "cancellation_reason": "Trail closed by storm"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cancelled = response_json(response).await;

    assert_eq!(cancelled["status"], "cancelled");
    assert!(!cancelled["cancelled_at"].is_null());
    assert_eq!(cancelled["cancellation_reason"], "Trail closed by storm");
    // Cancelling does not complete payment
    assert_eq!(cancelled["payment_status"], "pending");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn updating_an_unknown_reference_fails_without_writing() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let admin = create_admin(&app, &pool, &unique("admin")).await;

    let before: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM booking_tickets")
        .fetch_one(&pool)
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            "/api/admin/bookings/BKG-0-NOSUCH/status",
            &admin,
            serde_json::json!({ "status": "confirmed" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let after: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM booking_tickets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn booking_for_a_missing_event_is_rejected() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/bookings",
            serde_json::json!({
                "event_id": "no-such-event",
                "customer_name": "Amina B",
                "customer_email": "amina@example.com",
                "number_of_participants": 1,
                "event_date": "2026-09-12T08:00:00Z",
                "total_price": 50.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn event_scope_invariant_is_enforced_on_create() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let admin = create_admin(&app, &pool, &unique("admin")).await;
    let club_id = create_club(&app, &admin, &unique("Atlas Hikers")).await;

    // Club event without a club reference
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "POST",
            "/api/admin/events",
            &admin,
            serde_json::json!({
                "is_association_event": false,
                "title": "Orphan Event",
                "description": "No club",
                "location": "Nowhere",
                "price": 10
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Association event carrying a club reference
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "POST",
            "/api/admin/events",
            &admin,
            serde_json::json!({
                "club_id": club_id,
                "is_association_event": true,
                "title": "Confused Event",
                "description": "Both scopes",
                "location": "Everywhere",
                "price": 10
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn booking_lookup_by_reference() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let admin = create_admin(&app, &pool, &unique("admin")).await;
    let club_id = create_club(&app, &admin, &unique("Atlas Hikers")).await;
    let event_id = create_event(&app, &admin, club_id).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/bookings",
            serde_json::json!({
                "event_id": event_id,
                "customer_name": "Lina T",
                "customer_email": "lina@example.com",
                "number_of_participants": 3,
                "event_date": "2026-10-01T09:00:00Z",
                "total_price": 3600.0
            }),
        ))
        .await
        .unwrap();
    let ticket = response_json(response).await;
    let reference = ticket["booking_reference"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(bare_request(
            "GET",
            &format!("/api/bookings/{}", reference),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = response_json(response).await;
    assert_eq!(fetched["customer_name"], "Lina T");
    assert_eq!(fetched["number_of_participants"], 3);

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/bookings/BKG-0-MISSING", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
