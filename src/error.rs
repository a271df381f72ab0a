// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Any failure while reading the request or building the response.
    ///
    /// `expose` controls whether `message` reaches the client. Leaking it
    /// is the permissive behavior and is off unless configured.
    #[error("Computation failed: {message}")]
    Computation { message: String, expose: bool },
}

impl AppError {
    pub fn computation(message: impl Into<String>) -> Self {
        AppError::Computation {
            message: message.into(),
            expose: false,
        }
    }

    /// Set whether a computation error echoes its message to the client.
    /// Other variants are returned unchanged.
    pub fn exposing_details(self, expose: bool) -> Self {
        match self {
            AppError::Computation { message, .. } => AppError::Computation { message, expose },
            other => other,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", Some(msg)),
            AppError::Computation { message, expose } => {
                tracing::error!(error = %message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    expose.then_some(message),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
