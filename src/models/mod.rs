// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod profile;
pub mod routine;
pub mod weight;

pub use profile::{FitnessLevel, Goal, UserFitnessProfile};
pub use routine::{
    DaySchedule, Exercise, ExerciseKind, ExerciseLoad, RoutineResponse, ScheduleInfo,
    WeeklyRoutine, WorkoutType,
};
pub use weight::{PredictionRequest, PredictionResponse, WeightPrediction, WeightSample};
