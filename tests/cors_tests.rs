// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cross-origin access tests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use training_api::config::Config;
use training_api::services::SequenceRandom;

mod common;

/// POST a prediction with the given `Origin` and return the allowed origin, if any.
async fn allowed_origin(app: axum::Router, origin: &str) -> Option<String> {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/predict-weight")
                .header(header::ORIGIN, origin)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"weight_data": [], "days_ahead": 1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|value| value.to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_configured_frontend_allowed() {
    let config = Config {
        frontend_url: "https://training.example.com".to_string(),
        ..Config::default()
    };
    let (app, _state) = common::create_test_app_with(config, SequenceRandom::constant(0.5));

    assert_eq!(
        allowed_origin(app, "https://training.example.com").await.as_deref(),
        Some("https://training.example.com")
    );
}

#[tokio::test]
async fn test_localhost_with_port_allowed() {
    let (app, _state) = common::create_test_app();

    assert_eq!(
        allowed_origin(app.clone(), "http://localhost:5173").await.as_deref(),
        Some("http://localhost:5173")
    );
    assert_eq!(
        allowed_origin(app, "http://127.0.0.1:3000").await.as_deref(),
        Some("http://127.0.0.1:3000")
    );
}

#[tokio::test]
async fn test_lookalike_local_hosts_rejected() {
    let (app, _state) = common::create_test_app();

    assert_eq!(allowed_origin(app.clone(), "http://localhost.evil.example").await, None);
    assert_eq!(allowed_origin(app.clone(), "http://127.0.0.1.nip.io").await, None);
    assert_eq!(allowed_origin(app, "https://other.example.com").await, None);
}

#[tokio::test]
async fn test_preflight_from_frontend() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/generate-routine")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
}
