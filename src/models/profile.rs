// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User fitness profile submitted to the routine generator.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Profile as submitted by the frontend.
///
/// Level and goal stay as raw strings so the response can echo exactly what
/// was sent; lookups go through [`FitnessLevel::parse`] and [`Goal::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserFitnessProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Number of days to schedule (not clamped to a week)
    pub available_days: u32,
    /// Minutes per session
    pub time_per_session: u32,
    /// Day names in the order the user picked them (Korean or English)
    #[serde(default)]
    pub preferred_days: Vec<String>,
}

impl UserFitnessProfile {
    /// Recognized fitness level, if any.
    pub fn level(&self) -> Option<FitnessLevel> {
        self.fitness_level.as_deref().and_then(FitnessLevel::parse)
    }

    /// Recognized goal, if any.
    pub fn goal(&self) -> Option<Goal> {
        self.goal.as_deref().and_then(Goal::parse)
    }
}

/// Training experience level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Training goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Endurance,
}

impl Goal {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "weight_loss" => Some(Self::WeightLoss),
            "muscle_gain" => Some(Self::MuscleGain),
            "maintenance" => Some(Self::Maintenance),
            "endurance" => Some(Self::Endurance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
            Self::Endurance => "endurance",
        }
    }
}
