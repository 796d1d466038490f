// ABOUTME: Workout transport trait implemented by platform clients
// ABOUTME: Upload, native scheduling with an unsupported default, and a raw JSON post for fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Transport
//!
//! The sync orchestrator only talks to the platform through this trait. The
//! session behind it is assumed to be authenticated already: credential
//! loading and token refresh belong to whoever constructs the transport.
//!
//! ## Scheduling fallback
//!
//! Not every client exposes a scheduling call. `schedule_workout` therefore
//! defaults to `ProviderError::UnsupportedFeature`, and callers that receive
//! it post `{"date": ...}` to [`schedule_endpoint`] through `post_json`
//! instead.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use velo_core::constants::plan_defaults::SCHEDULE_ENDPOINT_PREFIX;
use velo_core::errors::provider::{ProviderError, ProviderResult};
use velo_core::models::WorkoutPayload;

/// Identifier assigned by the platform to an uploaded workout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkoutId(pub String);

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for WorkoutId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for WorkoutId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The platform returns numeric ids; accept strings too
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Self::from(id),
            RawId::Text(id) => Self(id),
        })
    }
}

/// Response of the create-workout call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedWorkout {
    /// Platform id of the new workout
    pub workout_id: WorkoutId,
}

/// Raw endpoint scheduling `workout_id` when the transport lacks a native call
#[must_use]
pub fn schedule_endpoint(workout_id: &WorkoutId) -> String {
    format!("{SCHEDULE_ENDPOINT_PREFIX}/{workout_id}")
}

/// Client of the remote workout platform
#[async_trait]
pub trait WorkoutTransport: Send + Sync {
    /// Transport name used in logs and errors
    fn name(&self) -> &'static str;

    /// Create a workout in the platform library
    async fn upload_workout(&self, payload: &WorkoutPayload) -> ProviderResult<UploadedWorkout>;

    /// Place an uploaded workout on the calendar
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFeature` unless the transport overrides it.
    async fn schedule_workout(&self, workout_id: &WorkoutId, date: NaiveDate) -> ProviderResult<()> {
        Err(ProviderError::UnsupportedFeature {
            provider: self.name().to_owned(),
            feature: format!("schedule_workout (workout {workout_id} on {date})"),
        })
    }

    /// POST a JSON body to a platform path and return the JSON answer
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> ProviderResult<serde_json::Value>;
}
