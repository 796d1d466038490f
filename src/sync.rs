// ABOUTME: Sync orchestrator uploading and scheduling eligible plan days through a workout transport
// ABOUTME: Isolates per-workout failures, falls back to the raw schedule endpoint, and paces submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Sync
//!
//! A day is eligible when all of the following hold:
//!
//! - it is not the race entry
//! - it has at least one step
//! - its date is today or later
//! - its title does not contain the excluded marker (an empty marker excludes nothing)
//!
//! Eligible days are submitted one at a time in schedule order. A failure is
//! recorded against its day and the run moves on; the batch never aborts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use velo_core::constants::plan_defaults;
use velo_core::errors::provider::ProviderResult;
use velo_core::models::{DayPlan, SyncResult, SyncStatus, WorkoutPayload};
use velo_providers::{
    build_workout_payload, schedule_endpoint, workout_name_for, WorkoutId, WorkoutTransport,
};

/// Parameters of a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Days before this date are never submitted
    pub today: NaiveDate,
    /// Pause after each successful submission, zero disables it
    pub delay: Duration,
    /// Titles containing this marker are never submitted
    pub excluded_title_marker: String,
    /// Workout names already present remotely; matching days are skipped
    pub skip_existing: HashSet<String>,
}

impl SyncOptions {
    /// Options with the default delay and marker and no known workouts
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            delay: Duration::from_millis(plan_defaults::SYNC_DELAY_MS),
            excluded_title_marker: plan_defaults::EXCLUDED_TITLE_MARKER.to_owned(),
            skip_existing: HashSet::new(),
        }
    }

    /// Override the pause between submissions
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Override the excluded title marker
    #[must_use]
    pub fn with_excluded_title_marker(mut self, marker: impl Into<String>) -> Self {
        self.excluded_title_marker = marker.into();
        self
    }

    /// Skip days whose workout name is already known to exist remotely
    #[must_use]
    pub fn with_existing_workouts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_existing.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Outcome counts of a sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    /// Workouts uploaded and scheduled
    pub succeeded: usize,
    /// Workouts that failed at either step
    pub failed: usize,
    /// Workouts skipped as already present
    pub skipped: usize,
}

impl SyncSummary {
    /// Count the outcomes of `results`
    #[must_use]
    pub fn from_results(results: &[SyncResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.status {
                    SyncStatus::Success => summary.succeeded += 1,
                    SyncStatus::Error => summary.failed += 1,
                    SyncStatus::Skipped => summary.skipped += 1,
                }
                summary
            })
    }

    /// Number of processed workouts
    #[must_use]
    pub const fn total(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }
}

/// Whether `plan` should be submitted in a run configured by `options`
#[must_use]
pub fn is_eligible(plan: &DayPlan, options: &SyncOptions) -> bool {
    let excluded = !options.excluded_title_marker.is_empty()
        && plan.title.contains(options.excluded_title_marker.as_str());
    !plan.is_race && !plan.steps.is_empty() && plan.date >= options.today && !excluded
}

/// Upload payload for `plan`, named "{date} - {title}"
#[must_use]
pub fn prepare_payload(plan: &DayPlan) -> WorkoutPayload {
    let mut payload = build_workout_payload(plan);
    payload.workout_name = workout_name_for(plan);
    payload
}

/// Submit every eligible day of `schedule` through `transport`
///
/// Returns one result per eligible day, in schedule order. Ineligible days
/// produce no result.
pub async fn sync<T>(schedule: &[DayPlan], transport: &T, options: &SyncOptions) -> Vec<SyncResult>
where
    T: WorkoutTransport + ?Sized,
{
    let mut results = Vec::new();

    for plan in schedule.iter().filter(|plan| is_eligible(plan, options)) {
        let payload = prepare_payload(plan);

        if options.skip_existing.contains(&payload.workout_name) {
            debug!(name = %payload.workout_name, "Workout already present, skipping");
            results.push(SyncResult::skipped(
                &plan.title,
                plan.date,
                format!("{} already exists", payload.workout_name),
            ));
            continue;
        }

        info!(
            transport = transport.name(),
            name = %payload.workout_name,
            steps = payload.leaf_count(),
            "Syncing workout"
        );

        match submit(transport, &payload, plan.date).await {
            Ok(workout_id) => {
                info!(%workout_id, date = %plan.date, "Workout scheduled");
                results.push(SyncResult::success(&plan.title, plan.date));
                if !options.delay.is_zero() {
                    sleep(options.delay).await;
                }
            }
            Err(e) => {
                warn!(name = %payload.workout_name, error = %e, "Workout sync failed");
                results.push(SyncResult::error(&plan.title, plan.date, e.to_string()));
            }
        }
    }

    let summary = SyncSummary::from_results(&results);
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        skipped = summary.skipped,
        "Sync finished"
    );
    results
}

async fn submit<T>(transport: &T, payload: &WorkoutPayload, date: NaiveDate) -> ProviderResult<WorkoutId>
where
    T: WorkoutTransport + ?Sized,
{
    let uploaded = transport.upload_workout(payload).await?;
    schedule_with_fallback(transport, &uploaded.workout_id, date).await?;
    Ok(uploaded.workout_id)
}

/// Schedule natively, or through the raw endpoint when the transport has no native call
async fn schedule_with_fallback<T>(
    transport: &T,
    workout_id: &WorkoutId,
    date: NaiveDate,
) -> ProviderResult<()>
where
    T: WorkoutTransport + ?Sized,
{
    match transport.schedule_workout(workout_id, date).await {
        Err(e) if e.is_unsupported() => {
            info!(%workout_id, %date, "Native scheduling unsupported, using schedule endpoint");
            let body = json!({ "date": date.format("%Y-%m-%d").to_string() });
            transport
                .post_json(&schedule_endpoint(workout_id), &body)
                .await
                .map(|_| ())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velo_core::models::{LeafStep, StepKind};

    fn day(date: NaiveDate, title: &str, with_steps: bool) -> DayPlan {
        DayPlan {
            date,
            title: title.to_owned(),
            description: String::new(),
            steps: if with_steps {
                vec![LeafStep::timed(StepKind::Interval, "10:00", "ZONE_2").into()]
            } else {
                Vec::new()
            },
            is_race: false,
            phase: None,
        }
    }

    #[test]
    fn test_eligibility_rules() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default();
        let options = SyncOptions::new(today);
        let tomorrow = today.succ_opt().unwrap_or_default();
        let yesterday = today.pred_opt().unwrap_or_default();

        assert!(is_eligible(&day(today, "Seuil (Z4)", true), &options));
        assert!(is_eligible(&day(tomorrow, "Seuil (Z4)", true), &options));
        assert!(!is_eligible(&day(yesterday, "Seuil (Z4)", true), &options));
        assert!(!is_eligible(&day(tomorrow, "Seuil (Z4)", false), &options));
        assert!(!is_eligible(&day(tomorrow, "Vélotaf matin", true), &options));

        let mut race = day(tomorrow, "Race", true);
        race.is_race = true;
        assert!(!is_eligible(&race, &options));

        let no_marker = options.with_excluded_title_marker("");
        assert!(is_eligible(&day(tomorrow, "Vélotaf matin", true), &no_marker));
    }

    #[test]
    fn test_payload_is_named_by_date_and_title() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap_or_default();
        let payload = prepare_payload(&day(date, "Seuil (Z4)", true));
        assert_eq!(payload.workout_name, "2026-03-03 - Seuil (Z4)");
    }

    #[test]
    fn test_summary_counts() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap_or_default();
        let results = vec![
            SyncResult::success("a", date),
            SyncResult::error("b", date, "boom"),
            SyncResult::skipped("c", date, "exists"),
            SyncResult::success("d", date),
        ];
        let summary = SyncSummary::from_results(&results);
        assert_eq!(
            summary,
            SyncSummary {
                succeeded: 2,
                failed: 1,
                skipped: 1
            }
        );
        assert_eq!(summary.total(), 4);
    }
}
