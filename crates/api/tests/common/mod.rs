//! Shared helpers for API integration tests.
//!
//! Builds the production router via [`build_app_router`] so every test
//! exercises the same middleware stack (CORS, request ID, timeout, panic
//! recovery) the binary uses. The media client points at an unroutable
//! address, so cover lookups fail fast and leave covers absent.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use trackvote_api::auth::jwt::JwtConfig;
use trackvote_api::config::ServerConfig;
use trackvote_api::media::MediaClient;
use trackvote_api::router::build_app_router;
use trackvote_api::state::AppState;
use trackvote_db::models::artist::CreateArtist;
use trackvote_db::models::track::CreateTrack;
use trackvote_db::repositories::{ArtistRepo, TrackRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        // Nothing listens on port 9; every lookup fails fast with None.
        media: Arc::new(MediaClient::with_base_url("http://127.0.0.1:9")),
    };
    build_app_router(state, &config)
}

/// Send a request through the router, optionally authenticated and with a
/// JSON body.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    request(app, Method::DELETE, uri, token, None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API, returning their access token.
pub async fn register_user(app: &Router, email: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/register",
        None,
        serde_json::json!({
            "email": email,
            "username": "testuser",
            "password": "password123",
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "registration must succeed");
    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

/// Seed an artist directly through the repository.
pub async fn seed_artist(pool: &PgPool, name: &str) -> Uuid {
    ArtistRepo::create(
        pool,
        &CreateArtist {
            name: name.to_string(),
            image_url: Some("https://img.example/a.jpg".to_string()),
        },
    )
    .await
    .unwrap()
    .id
}

/// Seed a track directly through the repository.
pub async fn seed_track(pool: &PgPool, artist_id: Uuid, title: &str) -> Uuid {
    TrackRepo::create(
        pool,
        &CreateTrack {
            title: title.to_string(),
            artist_id,
            cover_url: Some("https://img.example/c.jpg".to_string()),
            spotify_url: None,
            youtube_url: None,
            release_date: None,
        },
    )
    .await
    .unwrap()
    .id
}
