// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Workout platform codes, transport identifiers, and training-plan defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Numeric and key codes understood by the workout platform
pub mod workout_codes;

/// Defaults for plan generation and sync
pub mod plan_defaults;

/// Transport identifiers used in logs and errors
pub mod transports {
    /// In-memory transport used for dry runs and tests
    pub const SYNTHETIC: &str = "synthetic";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Race date (ISO 8601)
    pub const RACE_DATE: &str = "VELO_RACE_DATE";
    /// First day considered by the generator (ISO 8601)
    pub const START_DATE: &str = "VELO_START_DATE";
    /// Comma separated weekday names
    pub const TRAINING_DAYS: &str = "VELO_TRAINING_DAYS";
    /// Title of the race entry
    pub const RACE_TITLE: &str = "VELO_RACE_TITLE";
    /// Pause between two submissions, in milliseconds
    pub const SYNC_DELAY_MS: &str = "VELO_SYNC_DELAY_MS";
    /// Title marker excluding an entry from sync
    pub const EXCLUDED_TITLE_MARKER: &str = "VELO_EXCLUDED_TITLE_MARKER";
    /// Optional JSON plan to sync instead of generating one
    pub const PLAN_FILE: &str = "VELO_PLAN_FILE";
}
