//! Authentication and session integration tests.

mod common;

use axum::http::StatusCode;
use common::*;
use tower::util::ServiceExt;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn register_login_logout_roundtrip() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let username = unique("amina");
    let (cookie, _) = register_user(&app, &username).await;

    // The registration session works immediately
    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/user", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["username"], username.as_str());
    assert_eq!(body["is_admin"], false);
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    // A fresh login issues a different session token
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            serde_json::json!({
                "username": username,
                "password": "test-password-123"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let second_cookie = session_cookie(&response);
    assert_ne!(cookie, second_cookie);

    // Logout invalidates exactly that session
    let response = app
        .clone()
        .oneshot(bare_request("POST", "/api/logout", Some(&second_cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/user", Some(&second_cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The first session is still live
    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/user", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn wrong_credentials_are_rejected() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let username = unique("youssef");
    register_user(&app, &username).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            serde_json::json!({
                "username": username,
                "password": "wrong-password"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            serde_json::json!({
                "username": unique("ghost"),
                "password": "any-password"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn duplicate_usernames_conflict() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let username = unique("taken");
    register_user(&app, &username).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/register",
            serde_json::json!({
                "username": username,
                "email": format!("{}2@example.com", username),
                "password": "another-password-123"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn short_passwords_fail_validation() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/register",
            serde_json::json!({
                "username": unique("shorty"),
                "email": "shorty@example.com",
                "password": "short"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn profile_update_is_partial() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let (cookie, _) = register_user(&app, &unique("profile")).await;

    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            "/api/auth/user",
            &cookie,
            serde_json::json!({
                "bio": "Mountain guide",
                "interests": ["hiking", "photography"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            "/api/auth/user",
            &cookie,
            serde_json::json!({ "location": "Marrakesh" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    // Earlier fields survive the later partial update
    assert_eq!(body["bio"], "Mountain guide");
    assert_eq!(body["location"], "Marrakesh");
    assert_eq!(body["interests"][0], "hiking");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn admin_routes_reject_non_admin_sessions() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    // Anonymous -> 401
    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/admin/bookings", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Authenticated non-admin -> 403
    let (cookie, _) = register_user(&app, &unique("plain")).await;
    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/admin/bookings", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Admin -> 200
    let admin = create_admin(&app, &pool, &unique("admin")).await;
    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/admin/bookings", Some(&admin)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn sessions_survive_app_rebuild() {
    // Sessions live in the database, so a new router (fresh process in
    // production) accepts cookies issued before it existed.
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let (cookie, _) = register_user(&app, &unique("durable")).await;

    let rebuilt = build_app(pool.clone()).await;
    let response = rebuilt
        .oneshot(bare_request("GET", "/api/user", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
