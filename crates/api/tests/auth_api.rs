//! Integration tests for registration, login, and token-guarded routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, register_user};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn register_returns_token_and_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/register",
        None,
        json!({
            "email": "new@example.com",
            "username": "newuser",
            "password": "password123",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["email"], "new@example.com");
    assert_eq!(body["user"]["username"], "newuser");
    assert!(body["expires_in"].as_i64().unwrap() > 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(&app, "dup@example.com").await;

    let response = post_json(
        &app,
        "/api/v1/auth/register",
        None,
        json!({
            "email": "dup@example.com",
            "username": "other",
            "password": "password123",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool);

    for bad in [
        json!({"email": "not-an-email", "username": "user", "password": "password123"}),
        json!({"email": "a@example.com", "username": "ab", "password": "password123"}),
        json!({"email": "a@example.com", "username": "user", "password": "tiny"}),
    ] {
        let response = post_json(&app, "/api/v1/auth/register", None, bad).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_correct_credentials(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(&app, "login@example.com").await;

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({"email": "login@example.com", "password": "password123"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["token"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_rejects_wrong_password_without_hints(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(&app, "login@example.com").await;

    let wrong_password = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({"email": "login@example.com", "password": "wrong-password"}),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body = body_json(wrong_password).await;

    let unknown_email = post_json(
        &app,
        "/api/v1/auth/login",
        None,
        json!({"email": "nobody@example.com", "password": "password123"}),
    )
    .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email_body = body_json(unknown_email).await;

    // Same message either way: no hint which field was wrong.
    assert_eq!(wrong_password_body["error"], unknown_email_body["error"]);
}

// ---------------------------------------------------------------------------
// Token-guarded routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn me_returns_profile_for_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_user(&app, "me@example.com").await;

    let response = get_auth(&app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "me@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn guarded_route_rejects_missing_or_bad_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let missing = get(&app, "/api/v1/auth/me").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let garbage = get_auth(&app, "/api/v1/auth/me", "not-a-real-token").await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(garbage).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}
