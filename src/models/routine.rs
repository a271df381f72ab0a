// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly routine response model.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::UserFitnessProfile;

/// Archetype of a training day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutType {
    Cardio,
    Strength,
    Hiit,
    Flexibility,
}

/// Category of a single exercise within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ExerciseKind {
    Cardio,
    Strength,
    Stretch,
}

/// How an exercise is dosed: by time, or by sets and reps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ExerciseLoad {
    Timed { duration: String },
    Sets { sets: String, reps: String },
}

/// One exercise in a day's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    pub name: String,
    #[serde(flatten)]
    pub load: ExerciseLoad,
}

impl Exercise {
    pub fn timed(kind: ExerciseKind, name: &str, duration: String) -> Self {
        Self {
            kind,
            name: name.to_string(),
            load: ExerciseLoad::Timed { duration },
        }
    }

    pub fn sets(kind: ExerciseKind, name: &str, sets: &str, reps: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            load: ExerciseLoad::Sets {
                sets: sets.to_string(),
                reps: reps.to_string(),
            },
        }
    }

    /// Duration string for timed exercises.
    pub fn duration(&self) -> Option<&str> {
        match &self.load {
            ExerciseLoad::Timed { duration } => Some(duration),
            ExerciseLoad::Sets { .. } => None,
        }
    }
}

/// Plan for a single training day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DaySchedule {
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub total_time: String,
    pub exercises: Vec<Exercise>,
}

/// Day identifier → schedule, kept in schedule order.
///
/// Serializes as a JSON object whose keys follow insertion order rather than
/// calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyRoutine {
    days: Vec<(String, DaySchedule)>,
}

impl WeeklyRoutine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a day. A repeated day replaces the earlier schedule in place.
    pub fn insert(&mut self, day: String, schedule: DaySchedule) {
        match self.days.iter_mut().find(|(existing, _)| *existing == day) {
            Some((_, slot)) => *slot = schedule,
            None => self.days.push((day, schedule)),
        }
    }

    pub fn get(&self, day: &str) -> Option<&DaySchedule> {
        self.days
            .iter()
            .find(|(existing, _)| existing == day)
            .map(|(_, schedule)| schedule)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DaySchedule)> {
        self.days.iter().map(|(day, schedule)| (day.as_str(), schedule))
    }
}

impl Serialize for WeeklyRoutine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, schedule) in &self.days {
            map.serialize_entry(day, schedule)?;
        }
        map.end()
    }
}

/// How the schedule was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ScheduleInfo {
    pub total_days: u32,
    /// Preferred days exactly as submitted
    pub preferred_days: Vec<String>,
    /// Canonical day identifiers the routine was laid out on
    pub scheduled_days: Vec<String>,
}

/// Response body for `POST /api/generate-routine`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RoutineResponse {
    pub user_profile: UserFitnessProfile,
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<string, DaySchedule>")
    )]
    pub weekly_routine: WeeklyRoutine,
    pub recommendations: Vec<String>,
    /// RFC 3339 UTC timestamp
    pub generated_at: String,
    pub schedule_info: ScheduleInfo,
}
