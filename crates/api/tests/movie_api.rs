//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    auth_token, body_bytes, body_json, build_test_app, delete, get, patch_json, patch_json_auth,
    post_json,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create + read round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_movie_returns_201_with_id(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/movies", json!({"title": "Inception"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Inception");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_then_get_round_trips(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/movies",
        json!({"title": "Inception", "year": 2010, "duration_mins": 148}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("public, max-age=3600")
    );

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Inception");
    assert_eq!(json["year"], 2010);
    assert_eq!(json["duration_mins"], 148);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_movie_returns_404_with_empty_body(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_invalid_movie_returns_422_and_no_mutation(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/movies",
        json!({"title": "", "year": 1200}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_FAILED");
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0]["field"], "title");
    assert!(violations[0]["message"].is_string());
    assert_eq!(violations[1]["field"], "year");

    // No row was written.
    let app = build_test_app(pool);
    let listing = body_json(get(app, "/api/v1/movies").await).await;
    assert_eq!(listing["total"], 0);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_movie_returns_204_then_get_404(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/movies", json!({"title": "Delete Me"})).await)
        .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_movie_returns_404_with_empty_body(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/v1/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_changes_exactly_the_provided_fields(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/movies",
            json!({
                "title": "Inception",
                "year": 2010,
                "description": "A heist inside dreams",
                "duration_mins": 148
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/movies/{id}"),
        json!({"title": "Inception 2"}),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Inception 2");
    // Everything else keeps its pre-patch value.
    assert_eq!(json["year"], 2010);
    assert_eq!(json["description"], "A heist inside dreams");
    assert_eq!(json["duration_mins"], 148);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_missing_movie_returns_404_with_empty_body(pool: PgPool) {
    let app = build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/api/v1/movies/999999",
        json!({"title": "Ghost"}),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_missing_movie_reports_404_before_validation(pool: PgPool) {
    // The body is invalid, but the miss on the id wins.
    let app = build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/api/v1/movies/999999",
        json!({"title": ""}),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_without_token_returns_401(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/movies", json!({"title": "Locked"})).await)
        .await;
    let id = created["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = patch_json(app, &format!("/api/v1/movies/{id}"), json!({"title": "X"})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The movie is untouched.
    let app = build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/movies/{id}")).await).await;
    assert_eq!(json["title"], "Locked");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_validates_only_provided_fields(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/movies", json!({"title": "Valid"})).await)
        .await;
    let id = created["id"].as_i64().unwrap();

    // A patch omitting the title entirely is fine...
    let app = build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/movies/{id}"),
        json!({"year": 1999}),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // ...but a provided field is still checked.
    let app = build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/movies/{id}"),
        json!({"title": ""}),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["violations"][0]["field"], "title");
}

// ---------------------------------------------------------------------------
// Cache invalidation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_invalidates_cached_representation(pool: PgPool) {
    // One app instance throughout, so the in-process response cache persists
    // across requests.
    let app = build_test_app(pool);

    let created = body_json(
        post_json(app.clone(), "/api/v1/movies", json!({"title": "Before"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Prime the cache.
    let first = body_json(get(app.clone(), &format!("/api/v1/movies/{id}")).await).await;
    assert_eq!(first["title"], "Before");

    let response = patch_json_auth(
        app.clone(),
        &format!("/api/v1/movies/{id}"),
        json!({"title": "After"}),
        &auth_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The cached body must not be served stale.
    let second = body_json(get(app, &format!("/api/v1/movies/{id}")).await).await;
    assert_eq!(second["title"], "After");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_invalidates_cached_representation(pool: PgPool) {
    let app = build_test_app(pool);

    let created = body_json(
        post_json(app.clone(), "/api/v1/movies", json!({"title": "Cached"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Prime the cache, then delete.
    let response = get(app.clone(), &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = delete(app.clone(), &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
