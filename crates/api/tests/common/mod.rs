#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use paddock_core::clock::{Clock, FixedClock};
use paddock_core::types::Timestamp;
use paddock_db::repositories::{EventRepo, RaceRepo};
use tower::ServiceExt;

use paddock_api::config::ServerConfig;
use paddock_api::router::build_app_router;
use paddock_api::services::{RacingService, SportsService};
use paddock_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        query_timeout_ms: 5_000,
        json_logs: false,
    }
}

/// Instant the catalogs are seeded at, and the time every test reads at.
pub fn test_now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Build application state over a private in-memory database.
///
/// The catalogs are left uninitialised when `init` is false.
pub async fn build_test_state(init: bool) -> AppState {
    let config = test_config();
    let pool = paddock_db::create_in_memory_pool().await.unwrap();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(test_now()));

    let races = Arc::new(
        RaceRepo::new(pool.clone(), Arc::clone(&clock)).with_query_timeout(config.query_timeout()),
    );
    let events = Arc::new(
        EventRepo::new(pool.clone(), Arc::clone(&clock)).with_query_timeout(config.query_timeout()),
    );

    if init {
        races.init().await.unwrap();
        events.init().await.unwrap();
    }

    AppState {
        pool,
        racing: Arc::new(RacingService::new(races)),
        sports: Arc::new(SportsService::new(events)),
    }
}

/// Build the full application router with seeded catalogs.
///
/// Uses the same middleware stack as `main.rs`.
pub async fn build_test_app() -> Router {
    build_app_router(build_test_state(true).await, &test_config())
}

/// Same as [`build_test_app`] but with catalogs that were never initialised.
pub async fn build_uninitialised_app() -> Router {
    build_app_router(build_test_state(false).await, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
