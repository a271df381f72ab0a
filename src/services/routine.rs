// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly routine generation.
//!
//! Every decision is a table lookup: goal → workout-type cycle, level →
//! intensity, workout type → exercise template. The only arithmetic is the
//! proportional split of the session length and the modulo walk through the
//! cycle.

use std::sync::Arc;

use crate::models::{
    DaySchedule, Exercise, ExerciseKind, FitnessLevel, Goal, RoutineResponse, ScheduleInfo,
    UserFitnessProfile, WeeklyRoutine, WorkoutType,
};
use crate::services::clock::Clock;
use crate::services::schedule::resolve_schedule_days;
use crate::time_utils::format_utc_rfc3339;

// ─── Lookup Tables ───────────────────────────────────────────

/// Workout types cycled across scheduled days, per goal.
const GOAL_CYCLES: [(Goal, [WorkoutType; 3]); 4] = [
    (
        Goal::WeightLoss,
        [WorkoutType::Cardio, WorkoutType::Strength, WorkoutType::Hiit],
    ),
    (
        Goal::MuscleGain,
        [WorkoutType::Strength, WorkoutType::Hiit, WorkoutType::Strength],
    ),
    (
        Goal::Maintenance,
        [
            WorkoutType::Cardio,
            WorkoutType::Strength,
            WorkoutType::Flexibility,
        ],
    ),
    (
        Goal::Endurance,
        [WorkoutType::Cardio, WorkoutType::Hiit, WorkoutType::Cardio],
    ),
];

/// Cycle for a missing or unrecognized goal.
pub const FALLBACK_CYCLE: [WorkoutType; 3] = [
    WorkoutType::Cardio,
    WorkoutType::Strength,
    WorkoutType::Flexibility,
];

/// Strength parameters for one fitness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intensity {
    pub reps: &'static str,
    pub sets: &'static str,
    /// Reference session length for the level
    pub duration: &'static str,
}

impl Intensity {
    /// Leading number of the sets range (`"2-3세트"` → 2).
    pub fn first_set_count(&self) -> u32 {
        let digits: String = self.sets.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().unwrap_or(1)
    }
}

const INTENSITY_TABLE: [(FitnessLevel, Intensity); 3] = [
    (
        FitnessLevel::Beginner,
        Intensity {
            reps: "8-10회",
            sets: "2-3세트",
            duration: "20분",
        },
    ),
    (
        FitnessLevel::Intermediate,
        Intensity {
            reps: "10-12회",
            sets: "3-4세트",
            duration: "30분",
        },
    ),
    (
        FitnessLevel::Advanced,
        Intensity {
            reps: "12-15회",
            sets: "4-5세트",
            duration: "40분",
        },
    ),
];

/// Intensity for a missing or unrecognized level (same as beginner).
pub const FALLBACK_INTENSITY: Intensity = INTENSITY_TABLE[0].1;

/// How an exercise in a template is dosed.
#[derive(Debug, Clone, Copy)]
enum Dose {
    /// Share of the session, floored to whole minutes
    Share(f64),
    /// Sets and reps from the intensity table
    SetsReps,
    /// `⌊t/10⌋` minutes held for the first number of the sets range
    Hold,
}

#[derive(Debug, Clone, Copy)]
struct TemplateEntry {
    kind: ExerciseKind,
    name: &'static str,
    dose: Dose,
}

const fn entry(kind: ExerciseKind, name: &'static str, dose: Dose) -> TemplateEntry {
    TemplateEntry { kind, name, dose }
}

const CARDIO_TEMPLATE: [TemplateEntry; 2] = [
    entry(ExerciseKind::Cardio, "조깅", Dose::Share(0.7)),
    entry(ExerciseKind::Stretch, "스트레칭", Dose::Share(0.3)),
];

const STRENGTH_TEMPLATE: [TemplateEntry; 3] = [
    entry(ExerciseKind::Strength, "스쿼트", Dose::SetsReps),
    entry(ExerciseKind::Strength, "푸시업", Dose::SetsReps),
    entry(ExerciseKind::Strength, "플랭크", Dose::Hold),
];

const HIIT_TEMPLATE: [TemplateEntry; 3] = [
    entry(ExerciseKind::Cardio, "인터벌 러닝", Dose::Share(0.6)),
    entry(ExerciseKind::Strength, "버피", Dose::SetsReps),
    entry(ExerciseKind::Stretch, "쿨다운 스트레칭", Dose::Share(0.2)),
];

const FLEXIBILITY_TEMPLATE: [TemplateEntry; 2] = [
    entry(ExerciseKind::Stretch, "요가 스트레칭", Dose::Share(0.7)),
    entry(ExerciseKind::Cardio, "걷기", Dose::Share(0.3)),
];

const BASELINE_RECOMMENDATIONS: [&str; 3] = [
    "규칙적인 운동 습관을 만들어보세요!",
    "충분한 휴식과 영양 섭취를 잊지 마세요.",
    "점진적으로 운동 강도를 높여가세요.",
];

const GOAL_RECOMMENDATIONS: [(Goal, [&str; 3]); 4] = [
    (
        Goal::WeightLoss,
        [
            "유산소 운동 후 근력 운동을 하면 지방 연소에 더 효과적입니다.",
            "운동 전후 충분한 수분 섭취를 권장합니다.",
            "일주일에 150분 이상의 중강도 유산소 운동을 권장합니다.",
        ],
    ),
    (
        Goal::MuscleGain,
        [
            "근력 운동 후 30분 내 단백질 섭취를 권장합니다.",
            "충분한 휴식과 수면이 근육 성장에 중요합니다.",
            "같은 근육군은 48-72시간 휴식 후 다시 운동하세요.",
        ],
    ),
    (
        Goal::Maintenance,
        [
            "현재 운동량을 꾸준히 유지하는 것이 가장 중요합니다.",
            "유산소와 근력 운동을 균형 있게 배분하세요.",
            "한 달에 한 번 운동 기록을 돌아보며 루틴을 점검하세요.",
        ],
    ),
    (
        Goal::Endurance,
        [
            "심박수를 모니터링하며 목표 심박수 구간에서 운동하세요.",
            "장시간 운동 시 중간중간 수분과 전해질을 보충하세요.",
            "주 1회는 장거리 저강도 운동으로 지구력 기반을 다지세요.",
        ],
    ),
];

// ─── Lookups ─────────────────────────────────────────────────

/// Workout-type cycle for a goal.
pub fn workout_cycle(goal: Option<Goal>) -> [WorkoutType; 3] {
    goal.and_then(|goal| {
        GOAL_CYCLES
            .iter()
            .find(|(candidate, _)| *candidate == goal)
            .map(|(_, cycle)| *cycle)
    })
    .unwrap_or(FALLBACK_CYCLE)
}

/// Intensity parameters for a fitness level.
pub fn intensity_for(level: Option<FitnessLevel>) -> Intensity {
    level
        .and_then(|level| {
            INTENSITY_TABLE
                .iter()
                .find(|(candidate, _)| *candidate == level)
                .map(|(_, intensity)| *intensity)
        })
        .unwrap_or(FALLBACK_INTENSITY)
}

/// Baseline recommendations followed by the goal's own.
pub fn recommendations_for(goal: Option<Goal>) -> Vec<String> {
    let goal_specific = goal
        .and_then(|goal| {
            GOAL_RECOMMENDATIONS
                .iter()
                .find(|(candidate, _)| *candidate == goal)
        })
        .map(|(_, lines)| lines.as_slice())
        .unwrap_or_default();

    BASELINE_RECOMMENDATIONS
        .iter()
        .chain(goal_specific)
        .map(|line| line.to_string())
        .collect()
}

fn template_for(workout_type: WorkoutType) -> &'static [TemplateEntry] {
    match workout_type {
        WorkoutType::Cardio => &CARDIO_TEMPLATE,
        WorkoutType::Strength => &STRENGTH_TEMPLATE,
        WorkoutType::Hiit => &HIIT_TEMPLATE,
        WorkoutType::Flexibility => &FLEXIBILITY_TEMPLATE,
    }
}

/// Whole minutes of a session share, floored.
pub fn share_minutes(time_per_session: u32, fraction: f64) -> u32 {
    // Both factors are non-negative and the product stays well inside u32.
    (f64::from(time_per_session) * fraction).floor() as u32
}

/// Build one day's exercises from its template.
pub fn build_day(
    workout_type: WorkoutType,
    time_per_session: u32,
    intensity: &Intensity,
) -> DaySchedule {
    let exercises = template_for(workout_type)
        .iter()
        .map(|entry| match entry.dose {
            Dose::Share(fraction) => Exercise::timed(
                entry.kind,
                entry.name,
                format!("{}분", share_minutes(time_per_session, fraction)),
            ),
            Dose::SetsReps => Exercise::sets(entry.kind, entry.name, intensity.sets, intensity.reps),
            Dose::Hold => Exercise::timed(
                entry.kind,
                entry.name,
                format!(
                    "{}분 x {}세트",
                    time_per_session / 10,
                    intensity.first_set_count()
                ),
            ),
        })
        .collect();

    DaySchedule {
        workout_type,
        total_time: format!("{time_per_session}분"),
        exercises,
    }
}

// ─── Generator ───────────────────────────────────────────────

/// Maps a fitness profile to a weekly routine.
#[derive(Clone)]
pub struct RoutineGenerator {
    clock: Arc<dyn Clock>,
}

impl RoutineGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Generate the routine for `profile`.
    pub fn generate(&self, profile: &UserFitnessProfile) -> RoutineResponse {
        let goal = profile.goal();
        let level = profile.level();
        let cycle = workout_cycle(goal);
        let intensity = intensity_for(level);
        let scheduled_days =
            resolve_schedule_days(&profile.preferred_days, profile.available_days);

        let mut weekly_routine = WeeklyRoutine::new();
        for (index, day) in scheduled_days.iter().enumerate() {
            let workout_type = cycle[index % cycle.len()];
            weekly_routine.insert(
                day.clone(),
                build_day(workout_type, profile.time_per_session, &intensity),
            );
        }

        tracing::info!(
            goal = goal.map(|g| g.as_str()).unwrap_or("unrecognized"),
            level = level.unwrap_or_default().as_str(),
            scheduled = scheduled_days.len(),
            minutes = profile.time_per_session,
            "Generated weekly routine"
        );

        RoutineResponse {
            user_profile: profile.clone(),
            weekly_routine,
            recommendations: recommendations_for(goal),
            generated_at: format_utc_rfc3339(self.clock.now()),
            schedule_info: ScheduleInfo {
                total_days: profile.available_days,
                preferred_days: profile.preferred_days.clone(),
                scheduled_days,
            },
        }
    }
}
