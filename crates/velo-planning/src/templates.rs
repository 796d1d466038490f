// ABOUTME: Static workout catalog keyed by day class and training phase
// ABOUTME: Weekend long rides and weekday intensity sessions for each phase, plus a recovery fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Templates
//!
//! Days are classified by weekday name, never by a numeric index:
//!
//! | Weekday              | Class       |
//! |----------------------|-------------|
//! | Saturday, Sunday     | `Weekend`   |
//! | Tuesday, Thursday    | `Intensity` |
//! | any other            | `Easy`      |
//!
//! `Weekend` and `Intensity` each have one template per phase. `Easy` days
//! always get the recovery ride, whatever the phase.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use velo_core::models::{LeafStep, RepeatGroup, StepKind, StepNode, TrainingPhase};

/// Classification of a weekday for template selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Saturday or Sunday: long ride
    Weekend,
    /// Tuesday or Thursday: structured intervals
    Intensity,
    /// Any other weekday: recovery ride
    Easy,
}

impl DayClass {
    /// Classify a weekday
    #[must_use]
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            Weekday::Tue | Weekday::Thu => Self::Intensity,
            Weekday::Mon | Weekday::Wed | Weekday::Fri => Self::Easy,
        }
    }
}

/// Abstract workout selected for a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Title shown in the calendar
    pub title: String,
    /// Short coaching description
    pub description: String,
    /// Planned total duration in seconds
    pub nominal_duration_secs: u32,
    /// Step tree
    pub steps: Vec<StepNode>,
}

impl WorkoutTemplate {
    fn new(title: &str, description: &str, nominal_duration_secs: u32, steps: Vec<StepNode>) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            nominal_duration_secs,
            steps,
        }
    }
}

/// Template for `weekday` in `phase`
#[must_use]
pub fn template_for_day(weekday: Weekday, phase: TrainingPhase) -> WorkoutTemplate {
    match (DayClass::from_weekday(weekday), phase) {
        (DayClass::Weekend, TrainingPhase::Base) => weekend_base(),
        (DayClass::Weekend, TrainingPhase::Build) => weekend_build(),
        (DayClass::Weekend, TrainingPhase::Peak) => weekend_peak(),
        (DayClass::Weekend, TrainingPhase::Taper) => weekend_taper(),
        (DayClass::Intensity, TrainingPhase::Base) => intensity_base(),
        (DayClass::Intensity, TrainingPhase::Build) => intensity_build(),
        (DayClass::Intensity, TrainingPhase::Peak) => intensity_peak(),
        (DayClass::Intensity, TrainingPhase::Taper) => intensity_taper(),
        (DayClass::Easy, _) => recovery_ride(),
    }
}

fn step(kind: StepKind, duration: &str, zone: &str) -> StepNode {
    LeafStep::timed(kind, duration, zone).into()
}

/// Repeat group of `COUNT` iterations; a zero count does not compile
fn repeat<const COUNT: u32>(steps: Vec<StepNode>) -> StepNode {
    let count = const {
        assert!(COUNT > 0, "repeat count must be at least 1");
        match NonZeroU32::new(COUNT) {
            Some(count) => count,
            None => NonZeroU32::MIN,
        }
    };
    RepeatGroup::new(count, steps).into()
}

fn weekend_base() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Sortie Longue - Endurance",
        "Endurance fondamentale (Z2).",
        10_800,
        vec![
            step(StepKind::Warmup, "10:00", "ZONE_1"),
            step(StepKind::Interval, "160:00", "ZONE_2"),
            step(StepKind::Cooldown, "10:00", "ZONE_1"),
        ],
    )
}

fn weekend_build() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Sortie Longue - Endurance + Tempo",
        "Endurance avec 3x15min tempo (Z3).",
        12_600,
        vec![
            step(StepKind::Warmup, "20:00", "ZONE_2"),
            repeat::<3>(vec![
                step(StepKind::Interval, "15:00", "ZONE_3"),
                step(StepKind::Recovery, "5:00", "ZONE_1"),
            ]),
            step(StepKind::Cooldown, "10:00", "ZONE_2"),
        ],
    )
}

fn weekend_peak() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Sortie Flandrienne",
        "Simulation course. Bosses courtes à haute intensité.",
        14_400,
        vec![
            step(StepKind::Warmup, "30:00", "ZONE_2"),
            repeat::<10>(vec![
                step(StepKind::Interval, "1:00", "ZONE_5"),
                step(StepKind::Recovery, "5:00", "ZONE_2"),
            ]),
            step(StepKind::Cooldown, "30:00", "ZONE_2"),
        ],
    )
}

fn weekend_taper() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Maintien",
        "Sortie souple + quelques accélérations.",
        7_200,
        vec![
            step(StepKind::Warmup, "15:00", "ZONE_2"),
            repeat::<4>(vec![
                step(StepKind::Interval, "0:30", "ZONE_5"),
                step(StepKind::Recovery, "4:30", "ZONE_1"),
            ]),
            step(StepKind::Cooldown, "10:00", "ZONE_2"),
        ],
    )
}

fn intensity_base() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Vélocité / Force",
        "Travail de cadence (100rpm+) ou force (50rpm) en Z3.",
        4_500,
        vec![
            step(StepKind::Warmup, "15:00", "ZONE_1"),
            LeafStep::timed(StepKind::Interval, "10:00", "ZONE_3")
                .with_description("Cadence haute")
                .into(),
            step(StepKind::Recovery, "5:00", "ZONE_1"),
            LeafStep::timed(StepKind::Interval, "10:00", "ZONE_3")
                .with_description("Force basse cadence")
                .into(),
            step(StepKind::Cooldown, "15:00", "ZONE_1"),
        ],
    )
}

fn intensity_build() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Seuil (Z4)",
        "2 x 15min au seuil anaérobie.",
        5_400,
        vec![
            step(StepKind::Warmup, "15:00", "ZONE_1"),
            repeat::<2>(vec![
                step(StepKind::Interval, "15:00", "ZONE_4"),
                step(StepKind::Recovery, "5:00", "ZONE_1"),
            ]),
            step(StepKind::Cooldown, "15:00", "ZONE_1"),
        ],
    )
}

fn intensity_peak() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "PMA / VO2 Max",
        "3 séries de (30s/30s) x 10.",
        4_500,
        vec![
            step(StepKind::Warmup, "15:00", "ZONE_1"),
            repeat::<3>(vec![
                repeat::<10>(vec![
                    step(StepKind::Interval, "0:30", "ZONE_5"),
                    step(StepKind::Recovery, "0:30", "ZONE_1"),
                ]),
                step(StepKind::Recovery, "5:00", "ZONE_1"),
            ]),
            step(StepKind::Cooldown, "10:00", "ZONE_1"),
        ],
    )
}

fn intensity_taper() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Rappels d'intensité",
        "2 x 5min au seuil.",
        3_600,
        vec![
            step(StepKind::Warmup, "15:00", "ZONE_1"),
            repeat::<2>(vec![
                step(StepKind::Interval, "5:00", "ZONE_4"),
                step(StepKind::Recovery, "5:00", "ZONE_1"),
            ]),
            step(StepKind::Cooldown, "10:00", "ZONE_1"),
        ],
    )
}

fn recovery_ride() -> WorkoutTemplate {
    WorkoutTemplate::new(
        "Récupération",
        "Zone 1-2 souple.",
        3_600,
        vec![step(StepKind::Run, "60:00", "ZONE_1")],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_keeps_literal_count() {
        let StepNode::Repeat(group) = repeat::<10>(vec![]) else {
            unreachable!("repeat always builds a group");
        };
        assert_eq!(group.count.get(), 10);
    }

    #[test]
    fn test_catalog_json_shape() {
        let template = intensity_taper();
        let value = serde_json::to_value(&template.steps).unwrap_or_default();
        assert_eq!(
            value[1],
            serde_json::json!({
                "type": "repeat",
                "count": 2,
                "steps": [
                    {"type": "interval", "duration": "5:00", "target": "ZONE_4"},
                    {"type": "recovery", "duration": "5:00", "target": "ZONE_1"}
                ]
            })
        );
    }

    #[test]
    fn test_day_classes_by_name() {
        assert_eq!(DayClass::from_weekday(Weekday::Sat), DayClass::Weekend);
        assert_eq!(DayClass::from_weekday(Weekday::Sun), DayClass::Weekend);
        assert_eq!(DayClass::from_weekday(Weekday::Tue), DayClass::Intensity);
        assert_eq!(DayClass::from_weekday(Weekday::Thu), DayClass::Intensity);
        assert_eq!(DayClass::from_weekday(Weekday::Mon), DayClass::Easy);
        assert_eq!(DayClass::from_weekday(Weekday::Wed), DayClass::Easy);
        assert_eq!(DayClass::from_weekday(Weekday::Fri), DayClass::Easy);
    }
}
