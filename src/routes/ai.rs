// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Routine generation and weight projection routes.

use crate::error::{AppError, Result};
use crate::models::{
    PredictionRequest, PredictionResponse, RoutineResponse, UserFitnessProfile,
    WeightPrediction, WeightSample,
};
use crate::AppState;
use axum::{
    extract::{FromRequest, Request, State},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Number of predictions included in the self-test report.
const SELF_TEST_PREVIEW: usize = 3;

/// AI routes. Only the listed method is accepted on each path.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/generate-routine",
            post(generate_routine).fallback(method_not_allowed),
        )
        .route(
            "/api/predict-weight",
            post(predict_weight).fallback(method_not_allowed),
        )
        .route(
            "/api/ai/test",
            get(self_test).fallback(method_not_allowed),
        )
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

// ─── Body Extraction ─────────────────────────────────────────

/// JSON body whose rejection is reported as a computation failure.
///
/// Any problem reading the body ends in the same 500 as a failure while
/// computing the response; the parser message is included only when
/// error details are exposed.
pub struct ApiJson<T>(pub T);

impl<T> FromRequest<Arc<AppState>> for ApiJson<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request,
        state: &Arc<AppState>,
    ) -> std::result::Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "Rejected request body");
                Err(AppError::computation(rejection.body_text())
                    .exposing_details(state.config.expose_error_details))
            }
        }
    }
}

// ─── Routine Generation ──────────────────────────────────────

/// Generate a weekly routine from a fitness profile.
async fn generate_routine(
    State(state): State<Arc<AppState>>,
    ApiJson(profile): ApiJson<UserFitnessProfile>,
) -> Json<RoutineResponse> {
    Json(state.routine_generator.generate(&profile))
}

// ─── Weight Projection ───────────────────────────────────────

/// Project weight forward from recorded history.
async fn predict_weight(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<PredictionRequest>,
) -> Result<Json<PredictionResponse>> {
    let max_days = state.config.max_prediction_days;
    if request.days_ahead > max_days {
        return Err(AppError::BadRequest(format!(
            "days_ahead must be at most {max_days}"
        )));
    }

    state
        .weight_projector
        .project(&request.weight_data, request.days_ahead)
        .map(Json)
        .map_err(|err| err.exposing_details(state.config.expose_error_details))
}

// ─── Self Test ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct RoutineSelfTest {
    pub status: &'static str,
    pub sample_routine: RoutineResponse,
}

#[derive(Serialize)]
pub struct PredictionSelfTest {
    pub status: &'static str,
    pub sample_predictions: Vec<WeightPrediction>,
}

/// Self-test report.
#[derive(Serialize)]
pub struct SelfTestResponse {
    pub routine_test: RoutineSelfTest,
    pub weight_prediction_test: PredictionSelfTest,
}

fn sample_profile() -> UserFitnessProfile {
    UserFitnessProfile {
        fitness_level: Some("beginner".to_string()),
        goal: Some("weight_loss".to_string()),
        available_days: 3,
        time_per_session: 45,
        preferred_days: Vec::new(),
    }
}

fn sample_weights() -> Vec<WeightSample> {
    [
        ("2025-01-01", 70.0),
        ("2025-01-02", 69.8),
        ("2025-01-03", 69.5),
        ("2025-01-04", 69.7),
        ("2025-01-05", 69.3),
        ("2025-01-06", 69.1),
        ("2025-01-07", 68.9),
    ]
    .into_iter()
    .map(|(date, weight)| WeightSample::new(date, weight))
    .collect()
}

/// Run both generators on fixed sample input.
async fn self_test(State(state): State<Arc<AppState>>) -> Result<Json<SelfTestResponse>> {
    let sample_routine = state.routine_generator.generate(&sample_profile());

    let mut projection = state
        .weight_projector
        .project(&sample_weights(), 7)
        .map_err(|err| err.exposing_details(state.config.expose_error_details))?;
    projection.predictions.truncate(SELF_TEST_PREVIEW);

    Ok(Json(SelfTestResponse {
        routine_test: RoutineSelfTest {
            status: "success",
            sample_routine,
        },
        weight_prediction_test: PredictionSelfTest {
            status: "success",
            sample_predictions: projection.predictions,
        },
    }))
}
