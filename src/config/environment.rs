// ABOUTME: Environment-based configuration for the plan generator and the sync orchestrator
// ABOUTME: Reads VELO_* variables with defaults and reports malformed values as config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Weekday};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use velo_core::constants::{env_config, plan_defaults};
use velo_core::errors::{AppError, AppResult};
use velo_planning::{effective_start, ScheduleRequest};

use crate::sync::SyncOptions;

/// Settings of the schedule generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// Race day
    pub race_date: NaiveDate,
    /// Configured first day of the plan
    pub start_date: NaiveDate,
    /// Weekdays that receive a workout
    pub training_days: Vec<Weekday>,
    /// Title of the race entry
    pub race_title: String,
    /// JSON plan to sync instead of generating one
    pub plan_file: Option<PathBuf>,
}

impl PlanConfig {
    /// Load plan settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a date or the weekday list cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading plan configuration from environment variables");

        let config = Self {
            race_date: date_var(env_config::RACE_DATE, plan_defaults::RACE_DATE)?,
            start_date: date_var(env_config::START_DATE, plan_defaults::START_DATE)?,
            training_days: parse_training_days(&env_var_or(
                env_config::TRAINING_DAYS,
                plan_defaults::TRAINING_DAYS,
            ))?,
            race_title: env_var_or(env_config::RACE_TITLE, plan_defaults::RACE_TITLE),
            plan_file: env::var(env_config::PLAN_FILE)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        debug!(
            race_date = %config.race_date,
            start_date = %config.start_date,
            training_days = ?config.training_days,
            "Plan configuration loaded"
        );
        Ok(config)
    }

    /// Generator request starting at the later of the configured start and `today`
    #[must_use]
    pub fn schedule_request(&self, today: NaiveDate) -> ScheduleRequest {
        ScheduleRequest::new(
            effective_start(self.start_date, today),
            self.race_date,
            self.training_days.clone(),
        )
        .with_race_title(self.race_title.clone())
    }
}

/// Settings of the sync orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Pause after each successful submission
    pub delay: Duration,
    /// Entries whose title contains this marker are never synced
    pub excluded_title_marker: String,
}

impl SyncConfig {
    /// Load sync settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the delay is not a non-negative integer
    pub fn from_env() -> AppResult<Self> {
        let delay_ms = match env::var(env_config::SYNC_DELAY_MS) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::config_invalid(env_config::SYNC_DELAY_MS, &raw, e)
            })?,
            Err(_) => plan_defaults::SYNC_DELAY_MS,
        };

        Ok(Self {
            delay: Duration::from_millis(delay_ms),
            excluded_title_marker: env_var_or(
                env_config::EXCLUDED_TITLE_MARKER,
                plan_defaults::EXCLUDED_TITLE_MARKER,
            ),
        })
    }

    /// Orchestrator options for a run on `today`
    #[must_use]
    pub fn options(&self, today: NaiveDate) -> SyncOptions {
        SyncOptions::new(today)
            .with_delay(self.delay)
            .with_excluded_title_marker(self.excluded_title_marker.clone())
    }
}

/// Parse a comma separated weekday list such as "mon,tue,thu,sat"
///
/// Names are case-insensitive and may be abbreviated or spelled out.
/// Duplicates collapse, blank entries are ignored.
///
/// # Errors
///
/// Returns `ConfigInvalid` for an entry that is not a weekday name
pub fn parse_training_days(raw: &str) -> AppResult<Vec<Weekday>> {
    let mut days = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let day = entry.parse::<Weekday>().map_err(|_| {
            AppError::config_invalid(env_config::TRAINING_DAYS, raw, format!("unknown weekday {entry:?}"))
        })?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    Ok(days)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn date_var(key: &str, default: &str) -> AppResult<NaiveDate> {
    let raw = env_var_or(key, default);
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::config_invalid(key, &raw, e))
}
