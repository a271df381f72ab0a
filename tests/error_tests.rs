// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error response tests: wrong methods and unreadable bodies.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use training_api::config::Config;
use training_api::services::SequenceRandom;

mod common;

#[tokio::test]
async fn test_get_generate_routine_not_allowed() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send_json(app, "GET", "/api/generate-routine", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_put_predict_weight_not_allowed() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send_json(
        app,
        "PUT",
        "/api/predict-weight",
        Some(json!({"weight_data": [], "days_ahead": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_missing_weight_data_is_internal_error() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send_json(
        app,
        "POST",
        "/api/predict-weight",
        Some(json!({"days_ahead": 3})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn test_invalid_json_is_internal_error() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate-routine")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"available_days\": 3,"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

/// The permissive variant echoes parser messages to the client. This leaks
/// internals (field names, positions) and is only enabled by configuration.
#[tokio::test]
async fn test_permissive_mode_leaks_error_details() {
    let config = Config {
        expose_error_details: true,
        ..Config::default()
    };
    let (app, _state) = common::create_test_app_with(config, SequenceRandom::constant(0.5));

    let (status, body) = common::send_json(
        app,
        "POST",
        "/api/generate-routine",
        Some(json!({"fitness_level": "beginner"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("available_days"), "details: {details}");
}

#[tokio::test]
async fn test_error_responses_carry_security_headers() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/generate-routine")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
}
