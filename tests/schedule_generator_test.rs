// ABOUTME: Tests for the calendar walk producing day plans between start and race dates
// ABOUTME: Validates day counts, race entry placement, degenerate ranges and template selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use velo_core::models::{DayPlan, TrainingPhase};
use velo_planning::{effective_start, generate_schedule, template_for_day, ScheduleRequest};

const TRAINING_DAYS: [Weekday; 4] = [Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Sat];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn default_season() -> Vec<DayPlan> {
    generate_schedule(date(2026, 1, 1), date(2026, 4, 5), &TRAINING_DAYS)
}

#[test]
fn test_one_plan_per_training_day_plus_race() {
    let schedule = default_season();

    // 13 full weeks of 4 sessions, then Thu 2 Apr and Sat 4 Apr, then the race
    assert_eq!(schedule.len(), 55);

    let training = schedule.iter().filter(|day| !day.is_race).count();
    assert_eq!(training, 54);
    assert!(schedule
        .iter()
        .filter(|day| !day.is_race)
        .all(|day| TRAINING_DAYS.contains(&day.date.weekday())));
}

#[test]
fn test_race_entry_is_last_and_unique() {
    let schedule = default_season();
    let race = schedule.last().unwrap();

    assert!(race.is_race);
    assert_eq!(race.date, date(2026, 4, 5));
    assert_eq!(race.title, "TOUR DES FLANDRES 2026");
    assert_eq!(race.description, "Race Day!");
    assert!(race.steps.is_empty());
    assert!(race.phase.is_none());
    assert_eq!(schedule.iter().filter(|day| day.is_race).count(), 1);
}

#[test]
fn test_dates_are_unique_and_ordered() {
    let schedule = default_season();
    let dates: HashSet<NaiveDate> = schedule.iter().map(|day| day.date).collect();
    assert_eq!(dates.len(), schedule.len());
    assert!(schedule.windows(2).all(|pair| pair[0].date < pair[1].date));
}

#[test]
fn test_race_on_a_training_day_is_only_the_race() {
    // Saturday race
    let schedule = generate_schedule(date(2026, 3, 30), date(2026, 4, 4), &TRAINING_DAYS);
    let on_race_day: Vec<_> = schedule
        .iter()
        .filter(|day| day.date == date(2026, 4, 4))
        .collect();
    assert_eq!(on_race_day.len(), 1);
    assert!(on_race_day[0].is_race);
}

#[test]
fn test_degenerate_ranges() {
    assert!(generate_schedule(date(2026, 4, 6), date(2026, 4, 5), &TRAINING_DAYS).is_empty());

    let same_day = generate_schedule(date(2026, 4, 5), date(2026, 4, 5), &TRAINING_DAYS);
    assert_eq!(same_day.len(), 1);
    assert!(same_day[0].is_race);

    let no_training = generate_schedule(date(2026, 1, 1), date(2026, 4, 5), &[]);
    assert_eq!(no_training.len(), 1);
    assert!(no_training[0].is_race);
}

#[test]
fn test_plans_follow_phase_templates() {
    let schedule = default_season();

    // Tue 10 Feb 2026 is 7 weeks and 5 days out: build phase
    let tuesday = schedule
        .iter()
        .find(|day| day.date == date(2026, 2, 10))
        .unwrap();
    assert_eq!(tuesday.phase, Some(TrainingPhase::Build));
    assert_eq!(tuesday.title, "Seuil (Z4)");

    // Mondays always get the recovery ride
    for monday in schedule.iter().filter(|day| day.date.weekday() == Weekday::Mon) {
        assert_eq!(monday.title, "Récupération");
    }

    for day in schedule.iter().filter(|day| !day.is_race) {
        let template = template_for_day(day.date.weekday(), day.phase.unwrap());
        assert_eq!(day.title, template.title);
        assert_eq!(day.steps, template.steps);
    }
}

#[test]
fn test_request_race_title_and_effective_start() {
    let today = date(2026, 3, 1);
    let start = effective_start(date(2026, 1, 1), today);
    assert_eq!(start, today);
    assert_eq!(effective_start(date(2026, 3, 10), today), date(2026, 3, 10));

    let schedule = ScheduleRequest::new(start, date(2026, 4, 5), TRAINING_DAYS.to_vec())
        .with_race_title("Ronde van Vlaanderen")
        .generate();
    assert!(schedule.iter().all(|day| day.date >= today));
    assert_eq!(schedule.last().unwrap().title, "Ronde van Vlaanderen");
}

#[test]
fn test_plan_json_shape() {
    let schedule = default_season();
    let value = serde_json::to_value(&schedule[0]).unwrap();

    assert_eq!(value["date"], "2026-01-01");
    assert_eq!(value["is_race"], false);
    assert_eq!(value["phase"], "BASE");
    assert_eq!(value["steps"][0]["type"], "warmup");

    let race = serde_json::to_value(schedule.last().unwrap()).unwrap();
    assert!(race.get("phase").is_none());
    assert_eq!(race["steps"], serde_json::json!([]));
}
