// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Day-name translation and schedule-day resolution.

/// Localized day name → canonical identifier.
const DAY_NAMES: &[(&str, &str)] = &[
    ("월요일", "monday"),
    ("화요일", "tuesday"),
    ("수요일", "wednesday"),
    ("목요일", "thursday"),
    ("금요일", "friday"),
    ("토요일", "saturday"),
    ("일요일", "sunday"),
    ("월", "monday"),
    ("화", "tuesday"),
    ("수", "wednesday"),
    ("목", "thursday"),
    ("금", "friday"),
    ("토", "saturday"),
    ("일", "sunday"),
];

/// Used when the user has no preferred days.
pub const DEFAULT_SCHEDULE: [&str; 3] = ["monday", "wednesday", "friday"];

/// Translate a day name to its canonical lowercase English identifier.
///
/// Names missing from the table are lowercased unchanged, so English input
/// such as `"Tuesday"` still resolves.
pub fn translate_day(name: &str) -> String {
    DAY_NAMES
        .iter()
        .find(|(localized, _)| *localized == name)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| name.to_lowercase())
}

/// Resolve the ordered days the routine is laid out on.
///
/// Takes the first `available_days` translated preferred days, or the first
/// `available_days` of [`DEFAULT_SCHEDULE`] when none were given. The result
/// is shorter than `available_days` when the source runs out.
pub fn resolve_schedule_days(preferred_days: &[String], available_days: u32) -> Vec<String> {
    let limit = usize::try_from(available_days).unwrap_or(usize::MAX);

    if preferred_days.is_empty() {
        return DEFAULT_SCHEDULE
            .iter()
            .take(limit)
            .map(|day| day.to_string())
            .collect();
    }

    preferred_days
        .iter()
        .take(limit)
        .map(|day| translate_day(day))
        .collect()
}
