// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Turns handler panics into the same 500 body as any other failure.

use crate::error::AppError;
use axum::response::{IntoResponse, Response};
use std::any::Any;

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(
    expose_details: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |payload| {
        let message = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };

        AppError::computation(format!("handler panicked: {message}"))
            .exposing_details(expose_details)
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::{routing::get, Router};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn panicking() -> &'static str {
        panic!("table index out of range")
    }

    async fn call(expose: bool) -> (StatusCode, serde_json::Value) {
        let app = Router::new()
            .route("/", get(panicking))
            .layer(CatchPanicLayer::custom(panic_response(expose)));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_panic_becomes_500_without_details() {
        let (status, json) = call(false).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_panic_details_when_permissive() {
        let (_, json) = call(true).await;
        assert_eq!(
            json["details"],
            "handler panicked: table index out of range"
        );
    }
}
