//! CMS integration tests: singleton defaults and upserts, ordered
//! collections, and soft-delete visibility.

mod common;

use axum::http::StatusCode;
use common::*;
use tower::util::ServiceExt;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn hero_read_returns_defaults_before_any_write() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    // Make sure no row is in the way from a previous run
    sqlx::query("DELETE FROM hero_settings")
        .execute(&pool)
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/cms/hero", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    assert_eq!(body["id"], "default");
    assert!(body["title"].as_str().unwrap().contains("Adventure"));
    assert_eq!(body["primary_button_text"], "Start Your Journey");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn singleton_upsert_is_partial_and_race_free() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;
    let admin = create_admin(&app, &pool, &unique("admin")).await;

    sqlx::query("DELETE FROM theme_settings")
        .execute(&pool)
        .await
        .unwrap();

    // Two concurrent first-writes must land on a single row
    let mut handles = Vec::new();
    for color in ["#101010", "#202020"] {
        let app = app.clone();
        let admin = admin.clone();
        handles.push(tokio::spawn(async move {
            app.oneshot(json_request_with_session(
                "PUT",
                "/api/admin/cms/theme",
                &admin,
                serde_json::json!({ "primary_color": color }),
            ))
            .await
            .unwrap()
            .status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM theme_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    // Partial update: untouched fields keep their values
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            "/api/admin/cms/theme",
            &admin,
            serde_json::json!({ "secondary_color": "#aabbcc" }),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["secondary_color"], "#aabbcc");
    let primary = body["primary_color"].as_str().unwrap();
    assert!(primary == "#101010" || primary == "#202020");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn singleton_writes_require_an_admin_session() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;

    // Anonymous
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/admin/cms/theme",
            serde_json::json!({ "primary_color": "#123456" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Plain user
    let (user, _) = register_user(&app, &unique("plain")).await;
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            "/api/admin/cms/theme",
            &user,
            serde_json::json!({ "primary_color": "#123456" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn navbar_rejects_malformed_navigation_links_with_400() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;
    let admin = create_admin(&app, &pool, &unique("admin")).await;

    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            "/api/admin/cms/navbar",
            &admin,
            serde_json::json!({ "navigation_links": [{ "label": "Home" }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn stats_are_ordered_and_soft_delete_hides_them() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;
    let admin = create_admin(&app, &pool, &unique("admin")).await;

    let make_stat = |label: String, ordering: i32| {
        let app = app.clone();
        let admin = admin.clone();
        async move {
            let response = app
                .oneshot(json_request_with_session(
                    "POST",
                    "/api/admin/cms/stats",
                    &admin,
                    serde_json::json!({
                        "label": label,
                        "value": "100",
                        "ordering": ordering
                    }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            response_json(response).await["id"].as_i64().unwrap()
        }
    };

    let label_second = unique("Members");
    let label_first = unique("Treks");
    let second_id = make_stat(label_second.clone(), 20).await;
    let first_id = make_stat(label_first.clone(), 10).await;

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/cms/stats", None))
        .await
        .unwrap();
    let body = response_json(response).await;
    let labels: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| {
            let id = s["id"].as_i64().unwrap();
            id == first_id || id == second_id
        })
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec![label_first.as_str(), label_second.as_str()]);

    // Soft delete the first; it disappears from the public list but the row
    // survives
    let response = app
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/admin/cms/stats/{}", first_id),
            Some(&admin),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/cms/stats", None))
        .await
        .unwrap();
    let body = response_json(response).await;
    let still_there = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"].as_i64() == Some(first_id));
    assert!(!still_there);

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM site_stats WHERE id = $1)")
            .bind(first_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(exists);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn unapproved_testimonials_are_hidden_from_the_public_list() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;
    let admin = create_admin(&app, &pool, &unique("admin")).await;

    let name = unique("Pending Reviewer");
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "POST",
            "/api/admin/cms/testimonials",
            &admin,
            serde_json::json!({
                "name": name,
                "feedback": "Waiting for moderation",
                "is_approved": false
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = response_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/cms/testimonials", None))
        .await
        .unwrap();
    let body = response_json(response).await;
    let public_has_it = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].as_i64() == Some(id));
    assert!(!public_has_it);

    // The admin list includes it for moderation
    let response = app
        .clone()
        .oneshot(bare_request(
            "GET",
            "/api/admin/cms/testimonials",
            Some(&admin),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    let admin_has_it = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].as_i64() == Some(id));
    assert!(admin_has_it);

    // Approving makes it public
    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "PUT",
            &format!("/api/admin/cms/testimonials/{}", id),
            &admin,
            serde_json::json!({ "is_approved": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/cms/testimonials", None))
        .await
        .unwrap();
    let body = response_json(response).await;
    let public_has_it = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["id"].as_i64() == Some(id));
    assert!(public_has_it);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn section_blocks_are_scoped_to_their_section() {
    let pool = create_test_pool().await;
    let app = build_app(pool.clone()).await;
    let admin = create_admin(&app, &pool, &unique("admin")).await;

    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "POST",
            "/api/admin/cms/sections",
            &admin,
            serde_json::json!({
                "slug": unique("our-focus"),
                "title": "Our Focus",
                "section_type": "focus"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let section_id = response_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request_with_session(
            "POST",
            "/api/admin/cms/blocks",
            &admin,
            serde_json::json!({
                "section_id": section_id,
                "block_type": "text",
                "content": { "body": "Sustainable journeys" }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(bare_request(
            "GET",
            &format!("/api/cms/sections/{}/blocks", section_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["content"]["body"], "Sustainable journeys");
}
