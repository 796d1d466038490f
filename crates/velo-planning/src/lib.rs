// ABOUTME: Periodized training-plan generation from a race date and a training week
// ABOUTME: Phase selector, workout template catalog and day-by-day schedule generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training-plan generation.
//!
//! Everything in this crate is a pure function of dates and configuration:
//! the phase is recomputed for every day, templates are static content and
//! the generator walks the calendar one day at a time.

/// Weeks-to-race phase selection
pub mod phase;
/// Day-plan generation over a date range
pub mod schedule;
/// Static workout catalog keyed by day class and phase
pub mod templates;

pub use phase::{phase_for_date, weeks_until_race};
pub use schedule::{effective_start, generate_schedule, ScheduleRequest};
pub use templates::{template_for_day, DayClass, WorkoutTemplate};
