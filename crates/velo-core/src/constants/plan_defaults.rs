// ABOUTME: Default values for plan generation and workout sync
// ABOUTME: Race calendar, training week, throttling delay and exclusion marker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Race date used when none is configured
pub const RACE_DATE: &str = "2026-04-05";
/// Start date used when none is configured
pub const START_DATE: &str = "2026-01-01";
/// Training week used when none is configured
pub const TRAINING_DAYS: &str = "mon,tue,thu,sat";
/// Title of the race-day entry
pub const RACE_TITLE: &str = "TOUR DES FLANDRES 2026";
/// Description of the race-day entry
pub const RACE_DESCRIPTION: &str = "Race Day!";
/// Pause after each successful submission
pub const SYNC_DELAY_MS: u64 = 500;
/// Entries whose title contains this marker are commutes and never synced
pub const EXCLUDED_TITLE_MARKER: &str = "Vélotaf";
/// Raw endpoint used when a transport cannot schedule natively
pub const SCHEDULE_ENDPOINT_PREFIX: &str = "workout-service/schedule";

/// Phase boundaries, in whole weeks remaining until the race
pub mod phase_weeks {
    /// At or below this many weeks the plan tapers
    pub const TAPER_MAX: i64 = 2;
    /// At or below this many weeks the plan peaks
    pub const PEAK_MAX: i64 = 6;
    /// At or below this many weeks the plan builds
    pub const BUILD_MAX: i64 = 10;
}
