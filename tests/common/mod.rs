// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tower::ServiceExt;
use training_api::config::Config;
use training_api::routes::create_router;
use training_api::services::{FixedClock, SequenceRandom};
use training_api::AppState;

/// Instant every test app reports as "now".
#[allow(dead_code)]
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 27, 12, 0, 0).unwrap()
}

/// Create a test app with a frozen clock and neutral random draws.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Config::default(), SequenceRandom::constant(0.5))
}

/// Create a test app with explicit config and random draws.
#[allow(dead_code)]
pub fn create_test_app_with(
    config: Config,
    random: SequenceRandom,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(
        config,
        Arc::new(FixedClock(test_now())),
        Arc::new(random),
    ));
    (create_router(state.clone()), state)
}

/// Send a request and decode the JSON response body.
#[allow(dead_code)]
pub async fn send_json(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
