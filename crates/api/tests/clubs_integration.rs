//! Club and membership integration tests.
//!
//! The central invariant: after any sequence of join/leave calls, a club's
//! cached member_count equals the count of its active membership rows.

mod common;

use axum::http::StatusCode;
use common::*;
use tower::util::ServiceExt;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn member_count_tracks_joins_and_leaves() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let (owner_cookie, _) = register_user(&app, &unique("owner")).await;
    let club_id = create_club(&app, &owner_cookie, &unique("Atlas Hikers")).await;
    assert_eq!(member_count(&pool, club_id).await, 0);

    let (user_a, _) = register_user(&app, &unique("usera")).await;
    let (user_b, _) = register_user(&app, &unique("userb")).await;

    // A joins -> 1
    let response = app
        .clone()
        .oneshot(bare_request(
            "POST",
            &format!("/api/clubs/{}/join", club_id),
            Some(&user_a),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(member_count(&pool, club_id).await, 1);

    // B joins -> 2
    app.clone()
        .oneshot(bare_request(
            "POST",
            &format!("/api/clubs/{}/join", club_id),
            Some(&user_b),
        ))
        .await
        .unwrap();
    assert_eq!(member_count(&pool, club_id).await, 2);

    // A leaves -> 1
    let response = app
        .clone()
        .oneshot(bare_request(
            "POST",
            &format!("/api/clubs/{}/leave", club_id),
            Some(&user_a),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(member_count(&pool, club_id).await, 1);

    // Cached count always equals the live row count
    assert_eq!(
        member_count(&pool, club_id).await as i64,
        active_memberships(&pool, club_id).await
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn rejoining_is_idempotent_and_reuses_the_row() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let (owner_cookie, _) = register_user(&app, &unique("owner")).await;
    let club_id = create_club(&app, &owner_cookie, &unique("Desert Explorers")).await;
    let (user_a, _) = register_user(&app, &unique("usera")).await;

    let join = |cookie: String| {
        let app = app.clone();
        let uri = format!("/api/clubs/{}/join", club_id);
        async move {
            app.oneshot(bare_request("POST", &uri, Some(&cookie)))
                .await
                .unwrap()
        }
    };

    let first = response_json(join(user_a.clone()).await).await;
    let membership_id = first["id"].as_i64().unwrap();
    assert_eq!(member_count(&pool, club_id).await, 1);

    // Joining again must not double-count or create a second row
    let second = response_json(join(user_a.clone()).await).await;
    assert_eq!(second["id"].as_i64().unwrap(), membership_id);
    assert_eq!(member_count(&pool, club_id).await, 1);

    let total_rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM club_memberships WHERE club_id = $1",
    )
    .bind(club_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(total_rows, 1);

    // Leave, then re-join: the original row is reactivated
    app.clone()
        .oneshot(bare_request(
            "POST",
            &format!("/api/clubs/{}/leave", club_id),
            Some(&user_a),
        ))
        .await
        .unwrap();
    assert_eq!(member_count(&pool, club_id).await, 0);

    let rejoined = response_json(join(user_a).await).await;
    assert_eq!(rejoined["id"].as_i64().unwrap(), membership_id);
    assert_eq!(member_count(&pool, club_id).await, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn leaving_a_club_never_joined_is_a_noop() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let (owner_cookie, _) = register_user(&app, &unique("owner")).await;
    let club_id = create_club(&app, &owner_cookie, &unique("Coastal Riders")).await;

    let (member, _) = register_user(&app, &unique("member")).await;
    app.clone()
        .oneshot(bare_request(
            "POST",
            &format!("/api/clubs/{}/join", club_id),
            Some(&member),
        ))
        .await
        .unwrap();
    assert_eq!(member_count(&pool, club_id).await, 1);

    // A stranger leaving must not decrement below the true count
    let (stranger, _) = register_user(&app, &unique("stranger")).await;
    let response = app
        .clone()
        .oneshot(bare_request(
            "POST",
            &format!("/api/clubs/{}/leave", club_id),
            Some(&stranger),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(member_count(&pool, club_id).await, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn concurrent_joins_serialize_on_the_club_row() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let (owner_cookie, _) = register_user(&app, &unique("owner")).await;
    let club_id = create_club(&app, &owner_cookie, &unique("Summit Crew")).await;

    let mut cookies = Vec::new();
    for i in 0..8 {
        let (cookie, _) = register_user(&app, &unique(&format!("user{}", i))).await;
        cookies.push(cookie);
    }

    let mut handles = Vec::new();
    for cookie in cookies {
        let app = app.clone();
        let uri = format!("/api/clubs/{}/join", club_id);
        handles.push(tokio::spawn(async move {
            app.oneshot(bare_request("POST", &uri, Some(&cookie)))
                .await
                .unwrap()
                .status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    assert_eq!(member_count(&pool, club_id).await, 8);
    assert_eq!(active_memberships(&pool, club_id).await, 8);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn soft_deleted_clubs_disappear_from_default_reads() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let (owner_cookie, _) = register_user(&app, &unique("owner")).await;
    let name = unique("Hidden Club");
    let club_id = create_club(&app, &owner_cookie, &name).await;

    let response = app
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/clubs/{}", club_id),
            Some(&owner_cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Get-by-id now 404s
    let response = app
        .clone()
        .oneshot(bare_request(
            "GET",
            &format!("/api/clubs/{}", club_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And the list no longer contains it
    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/clubs", None))
        .await
        .unwrap();
    let body = response_json(response).await;
    let found = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"].as_i64() == Some(club_id as i64));
    assert!(!found);

    // The row itself survives (referential integrity for past bookings)
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clubs WHERE id = $1)")
        .bind(club_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(exists);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn only_the_owner_or_admin_can_mutate_a_club() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    let (owner_cookie, _) = register_user(&app, &unique("owner")).await;
    let club_id = create_club(&app, &owner_cookie, &unique("Guarded Club")).await;

    let (other, _) = register_user(&app, &unique("other")).await;
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            &format!("/api/clubs/{}", club_id),
            &other,
            serde_json::json!({ "description": "hijacked" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            &format!("/api/clubs/{}", club_id),
            &owner_cookie,
            serde_json::json!({ "description": "updated by owner" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["description"], "updated by owner");
}
