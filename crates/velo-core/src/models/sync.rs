// ABOUTME: Per-workout outcome records produced by a sync run
// ABOUTME: Success, error and skipped statuses with the message shown to the user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of one attempted workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Uploaded and scheduled
    Success,
    /// Compilation, upload or scheduling failed
    Error,
    /// Already present remotely, nothing sent
    Skipped,
}

/// Result record for one workout of a sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    /// Title of the day plan
    pub title: String,
    /// Date of the day plan
    pub date: NaiveDate,
    /// Outcome
    pub status: SyncStatus,
    /// Failure or skip reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SyncResult {
    /// Successful upload and scheduling
    #[must_use]
    pub fn success(title: &str, date: NaiveDate) -> Self {
        Self {
            title: title.to_owned(),
            date,
            status: SyncStatus::Success,
            message: None,
        }
    }

    /// Failed attempt with the error message
    #[must_use]
    pub fn error(title: &str, date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            title: title.to_owned(),
            date,
            status: SyncStatus::Error,
            message: Some(message.into()),
        }
    }

    /// Workout left alone because it already exists remotely
    #[must_use]
    pub fn skipped(title: &str, date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            title: title.to_owned(),
            date,
            status: SyncStatus::Skipped,
            message: Some(message.into()),
        }
    }

    /// Whether the workout was uploaded and scheduled
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SyncStatus::Success
    }
}
