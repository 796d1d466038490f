// ABOUTME: Calendar walk from start date to race date emitting one plan per training day
// ABOUTME: Race day terminates the walk with a step-less entry, rest days emit nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use velo_core::constants::plan_defaults;
use velo_core::models::DayPlan;

use crate::phase::phase_for_date;
use crate::templates::template_for_day;

/// Parameters of a schedule generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// First day considered
    pub start_date: NaiveDate,
    /// Race day, last day considered
    pub race_date: NaiveDate,
    /// Weekdays that receive a workout
    pub training_days: Vec<Weekday>,
    /// Title of the race entry
    pub race_title: String,
}

impl ScheduleRequest {
    /// Request with the default race title
    #[must_use]
    pub fn new(start_date: NaiveDate, race_date: NaiveDate, training_days: Vec<Weekday>) -> Self {
        Self {
            start_date,
            race_date,
            training_days,
            race_title: plan_defaults::RACE_TITLE.to_owned(),
        }
    }

    /// Override the race entry title
    #[must_use]
    pub fn with_race_title(mut self, race_title: impl Into<String>) -> Self {
        self.race_title = race_title.into();
        self
    }

    /// Walk the calendar and build the plan
    ///
    /// Produces an empty plan when `start_date` is after `race_date`.
    #[must_use]
    pub fn generate(&self) -> Vec<DayPlan> {
        let mut plan = Vec::new();
        let mut current = self.start_date;

        while current <= self.race_date {
            if current == self.race_date {
                plan.push(self.race_entry());
                break;
            }

            let weekday = current.weekday();
            if self.training_days.contains(&weekday) {
                let phase = phase_for_date(current, self.race_date);
                let template = template_for_day(weekday, phase);
                debug!(date = %current, %phase, title = %template.title, "Planned workout");
                plan.push(DayPlan {
                    date: current,
                    title: template.title,
                    description: template.description,
                    steps: template.steps,
                    is_race: false,
                    phase: Some(phase),
                });
            }

            let Some(next) = current.succ_opt() else {
                break;
            };
            current = next;
        }

        info!(
            start = %self.start_date,
            race = %self.race_date,
            days = plan.len(),
            "Generated training schedule"
        );
        plan
    }

    fn race_entry(&self) -> DayPlan {
        DayPlan {
            date: self.race_date,
            title: self.race_title.clone(),
            description: plan_defaults::RACE_DESCRIPTION.to_owned(),
            steps: Vec::new(),
            is_race: true,
            phase: None,
        }
    }
}

/// Build the plan between `start_date` and `race_date` inclusive
#[must_use]
pub fn generate_schedule(
    start_date: NaiveDate,
    race_date: NaiveDate,
    training_days: &[Weekday],
) -> Vec<DayPlan> {
    ScheduleRequest::new(start_date, race_date, training_days.to_vec()).generate()
}

/// First day to plan: the configured start, or today if that is later
#[must_use]
pub fn effective_start(configured_start: NaiveDate, today: NaiveDate) -> NaiveDate {
    configured_start.max(today)
}
