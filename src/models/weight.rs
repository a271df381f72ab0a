// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weight history and projection models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Days projected when the request does not say.
pub const DEFAULT_DAYS_AHEAD: u32 = 14;

/// One recorded weight.
///
/// Deserialization never fails on the shape of a single sample: anything
/// that is not an object with a numeric `weight` becomes a sample with no
/// usable weight, and the projector falls back to its baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct WeightSample {
    pub date: Option<String>,
    pub weight: Option<f64>,
}

impl From<Value> for WeightSample {
    fn from(value: Value) -> Self {
        Self {
            date: value.get("date").and_then(Value::as_str).map(str::to_string),
            weight: value.get("weight").and_then(Value::as_f64),
        }
    }
}

impl WeightSample {
    pub fn new(date: &str, weight: f64) -> Self {
        Self {
            date: Some(date.to_string()),
            weight: Some(weight),
        }
    }

    /// Weight usable as a projection baseline.
    ///
    /// Zero counts as missing, matching how the frontend treats a blank entry.
    pub fn usable_weight(&self) -> Option<f64> {
        self.weight.filter(|w| w.is_finite() && *w != 0.0)
    }
}

/// Request body for `POST /api/predict-weight`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    /// Oldest first; order is not checked
    pub weight_data: Vec<WeightSample>,
    #[serde(default = "default_days_ahead")]
    pub days_ahead: u32,
}

fn default_days_ahead() -> u32 {
    DEFAULT_DAYS_AHEAD
}

/// A single projected day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeightPrediction {
    /// YYYY-MM-DD
    pub date: String,
    pub predicted_weight: f64,
}

/// Response body for `POST /api/predict-weight`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PredictionResponse {
    pub predictions: Vec<WeightPrediction>,
    pub input_data_count: usize,
    pub prediction_days: u32,
}
