// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Naive forward weight projection.
//!
//! Each projected day perturbs the same baseline (the most recent weight)
//! by a uniform draw in ±0.25 kg. The perturbation is not carried forward,
//! so the series does not drift.

use std::sync::Arc;

use chrono::Days;

use crate::error::{AppError, Result};
use crate::models::{PredictionResponse, WeightPrediction, WeightSample};
use crate::services::clock::Clock;
use crate::services::random::RandomSource;
use crate::time_utils::format_iso_date;

/// Baseline when no usable weight was recorded (kg).
pub const DEFAULT_BASELINE_WEIGHT: f64 = 70.0;

/// Total width of the uniform perturbation (kg).
const PERTURBATION_SPAN: f64 = 0.5;

/// Baseline for the projection: the last sample's weight, or
/// [`DEFAULT_BASELINE_WEIGHT`] when the series is empty or the last sample
/// is malformed.
pub fn baseline_weight(samples: &[WeightSample]) -> f64 {
    samples
        .last()
        .and_then(WeightSample::usable_weight)
        .unwrap_or(DEFAULT_BASELINE_WEIGHT)
}

/// Round half-up to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Projects weight a number of days ahead.
#[derive(Clone)]
pub struct WeightProjector {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl WeightProjector {
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self { clock, random }
    }

    /// Project `days_ahead` days starting tomorrow (UTC).
    pub fn project(&self, samples: &[WeightSample], days_ahead: u32) -> Result<PredictionResponse> {
        let baseline = baseline_weight(samples);
        let today = self.clock.today();

        let predictions = (1..=u64::from(days_ahead))
            .map(|offset| {
                let date = today.checked_add_days(Days::new(offset)).ok_or_else(|| {
                    AppError::computation(format!("date overflow {offset} days after {today}"))
                })?;
                let draw = self.random.next_unit();
                Ok(WeightPrediction {
                    date: format_iso_date(date),
                    predicted_weight: round_one_decimal(
                        baseline + (draw - 0.5) * PERTURBATION_SPAN,
                    ),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            samples = samples.len(),
            days_ahead,
            baseline,
            "Projected weight"
        );

        Ok(PredictionResponse {
            predictions,
            input_data_count: samples.len(),
            prediction_days: days_ahead,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use crate::services::random::{SequenceRandom, ThreadRandom};
    use chrono::{TimeZone, Utc};

    fn projector(random: Arc<dyn RandomSource>) -> WeightProjector {
        let now = Utc.with_ymd_and_hms(2024, 12, 30, 18, 0, 0).unwrap();
        WeightProjector::new(Arc::new(FixedClock(now)), random)
    }

    #[test]
    fn test_dates_cross_year_boundary() {
        let response = projector(Arc::new(SequenceRandom::constant(0.5)))
            .project(&[WeightSample::new("2024-12-29", 80.0)], 3)
            .unwrap();

        let dates: Vec<_> = response.predictions.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-12-31", "2025-01-01", "2025-01-02"]);
        assert_eq!(response.input_data_count, 1);
        assert_eq!(response.prediction_days, 3);
    }

    #[test]
    fn test_pinned_draws_give_exact_weights() {
        let response = projector(Arc::new(SequenceRandom::new(vec![0.0, 0.5, 0.9])))
            .project(&[WeightSample::new("2024-12-29", 70.0)], 3)
            .unwrap();

        let weights: Vec<_> = response
            .predictions
            .iter()
            .map(|p| p.predicted_weight)
            .collect();
        // 70 - 0.25 = 69.75 rounds up; 70 + 0.2 = 70.2
        assert_eq!(weights, vec![69.8, 70.0, 70.2]);
    }

    #[test]
    fn test_perturbation_not_carried_forward() {
        let response = projector(Arc::new(SequenceRandom::constant(0.99)))
            .project(&[WeightSample::new("2024-12-29", 65.0)], 10)
            .unwrap();

        assert!(response
            .predictions
            .iter()
            .all(|p| p.predicted_weight == 65.2));
    }

    #[test]
    fn test_random_weights_within_bound() {
        let response = projector(Arc::new(ThreadRandom))
            .project(&[WeightSample::new("2024-01-01", 70.0)], 200)
            .unwrap();

        assert_eq!(response.predictions.len(), 200);
        for prediction in &response.predictions {
            assert!(
                (69.7..=70.3).contains(&prediction.predicted_weight),
                "out of bound: {}",
                prediction.predicted_weight
            );
        }
    }

    #[test]
    fn test_baseline_falls_back_when_empty_or_malformed() {
        assert_eq!(baseline_weight(&[]), DEFAULT_BASELINE_WEIGHT);

        let malformed = WeightSample {
            date: Some("2024-01-02".to_string()),
            weight: None,
        };
        assert_eq!(
            baseline_weight(&[WeightSample::new("2024-01-01", 82.0), malformed]),
            DEFAULT_BASELINE_WEIGHT
        );
        assert_eq!(
            baseline_weight(&[WeightSample::new("2024-01-01", 82.0)]),
            82.0
        );
    }

    #[test]
    fn test_zero_days_is_empty() {
        let response = projector(Arc::new(ThreadRandom)).project(&[], 0).unwrap();
        assert!(response.predictions.is_empty());
        assert_eq!(response.input_data_count, 0);
    }

    #[test]
    fn test_round_one_decimal_half_up() {
        assert_eq!(round_one_decimal(70.25), 70.3);
        assert_eq!(round_one_decimal(69.75), 69.8);
        assert_eq!(round_one_decimal(70.04), 70.0);
    }
}
