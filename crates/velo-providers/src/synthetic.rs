// ABOUTME: In-memory workout transport for dry runs and tests
// ABOUTME: Records uploads and schedules, assigns sequential ids, and injects failures on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Synthetic Transport
//!
//! Behaves like the platform without any network access:
//!
//! - uploads get sequential workout ids starting at 1
//! - native scheduling can be switched off to exercise the raw-endpoint fallback
//! - uploads of chosen workout names are rejected
//! - the raw schedule endpoint validates the id and the `date` body field
//!
//! State is kept behind an `RwLock`; poisoned locks surface as
//! `ProviderError::InvalidResponse`.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::debug;
use velo_core::constants::plan_defaults::SCHEDULE_ENDPOINT_PREFIX;
use velo_core::constants::transports;
use velo_core::errors::provider::{ProviderError, ProviderResult};
use velo_core::models::WorkoutPayload;

use crate::transport::{UploadedWorkout, WorkoutId, WorkoutTransport};

#[derive(Debug, Default)]
struct SyntheticState {
    next_id: u64,
    uploads: Vec<(WorkoutId, WorkoutPayload)>,
    scheduled: Vec<(WorkoutId, NaiveDate)>,
    raw_posts: Vec<(String, Value)>,
}

/// In-memory implementation of [`WorkoutTransport`]
#[derive(Debug)]
pub struct SyntheticTransport {
    state: RwLock<SyntheticState>,
    native_scheduling: bool,
    rejected_workouts: HashSet<String>,
}

impl Default for SyntheticTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticTransport {
    /// Transport accepting everything, with native scheduling
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SyntheticState::default()),
            native_scheduling: true,
            rejected_workouts: HashSet::new(),
        }
    }

    /// Report scheduling as unsupported so callers use the raw endpoint
    #[must_use]
    pub fn without_native_scheduling(mut self) -> Self {
        self.native_scheduling = false;
        self
    }

    /// Reject uploads of the workout with this library name
    #[must_use]
    pub fn with_rejected_workout(mut self, workout_name: impl Into<String>) -> Self {
        self.rejected_workouts.insert(workout_name.into());
        self
    }

    /// Payloads uploaded so far, in order
    #[must_use]
    pub fn uploads(&self) -> Vec<WorkoutPayload> {
        self.state
            .read()
            .map(|state| state.uploads.iter().map(|(_, p)| p.clone()).collect())
            .unwrap_or_default()
    }

    /// Library names uploaded so far, in order
    #[must_use]
    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploads()
            .into_iter()
            .map(|payload| payload.workout_name)
            .collect()
    }

    /// Calendar entries created so far, by either path
    #[must_use]
    pub fn scheduled(&self) -> Vec<(WorkoutId, NaiveDate)> {
        self.state
            .read()
            .map(|state| state.scheduled.clone())
            .unwrap_or_default()
    }

    /// Paths hit through `post_json`
    #[must_use]
    pub fn raw_post_paths(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| state.raw_posts.iter().map(|(path, _)| path.clone()).collect())
            .unwrap_or_default()
    }

    fn poisoned() -> ProviderError {
        ProviderError::InvalidResponse {
            provider: transports::SYNTHETIC.to_owned(),
            details: "synthetic state lock poisoned".to_owned(),
        }
    }

    fn record_schedule(&self, workout_id: &WorkoutId, date: NaiveDate) -> ProviderResult<()> {
        let mut state = self.state.write().map_err(|_| Self::poisoned())?;
        if !state.uploads.iter().any(|(id, _)| id == workout_id) {
            return Err(ProviderError::ApiError {
                provider: transports::SYNTHETIC.to_owned(),
                status_code: 404,
                message: format!("workout {workout_id} not found"),
                retryable: false,
            });
        }
        state.scheduled.push((workout_id.clone(), date));
        drop(state);
        debug!(%workout_id, %date, "Synthetic schedule recorded");
        Ok(())
    }
}

#[async_trait]
impl WorkoutTransport for SyntheticTransport {
    fn name(&self) -> &'static str {
        transports::SYNTHETIC
    }

    async fn upload_workout(&self, payload: &WorkoutPayload) -> ProviderResult<UploadedWorkout> {
        if self.rejected_workouts.contains(&payload.workout_name) {
            return Err(ProviderError::Rejected {
                provider: transports::SYNTHETIC.to_owned(),
                workout_name: payload.workout_name.clone(),
                reason: "rejected by synthetic transport".to_owned(),
            });
        }

        let mut state = self.state.write().map_err(|_| Self::poisoned())?;
        state.next_id += 1;
        let workout_id = WorkoutId::from(state.next_id);
        state.uploads.push((workout_id.clone(), payload.clone()));
        drop(state);

        debug!(%workout_id, name = %payload.workout_name, "Synthetic upload recorded");
        Ok(UploadedWorkout { workout_id })
    }

    async fn schedule_workout(&self, workout_id: &WorkoutId, date: NaiveDate) -> ProviderResult<()> {
        if !self.native_scheduling {
            return Err(ProviderError::UnsupportedFeature {
                provider: transports::SYNTHETIC.to_owned(),
                feature: format!("schedule_workout (workout {workout_id} on {date})"),
            });
        }
        self.record_schedule(workout_id, date)
    }

    async fn post_json(
        &self,
        path: &str,
        body: &Value,
    ) -> ProviderResult<Value> {
        self.state
            .write()
            .map_err(|_| Self::poisoned())?
            .raw_posts
            .push((path.to_owned(), body.clone()));

        let Some(raw_id) = path
            .strip_prefix(SCHEDULE_ENDPOINT_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return Err(ProviderError::ApiError {
                provider: transports::SYNTHETIC.to_owned(),
                status_code: 404,
                message: format!("no such endpoint: {path}"),
                retryable: false,
            });
        };

        let date = body
            .get("date")
            .and_then(Value::as_str)
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .ok_or_else(|| ProviderError::ApiError {
                provider: transports::SYNTHETIC.to_owned(),
                status_code: 400,
                message: "schedule body requires a YYYY-MM-DD date".to_owned(),
                retryable: false,
            })?;

        let workout_id = WorkoutId(raw_id.to_owned());
        self.record_schedule(&workout_id, date)?;
        Ok(json!({ "workoutId": workout_id, "date": date }))
    }
}
