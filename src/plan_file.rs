// ABOUTME: JSON plan file reading and writing for exchanging schedules between runs
// ABOUTME: Parses arrays of day plans and reports unreadable or malformed files as input errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use tokio::fs;
use tracing::info;
use velo_core::errors::{AppError, AppResult};
use velo_core::models::DayPlan;

/// Parse a JSON array of day plans
///
/// # Errors
///
/// Returns `SerializationError` when the document is not a valid plan
pub fn parse_plan(json: &str) -> AppResult<Vec<DayPlan>> {
    Ok(serde_json::from_str(json)?)
}

/// Render a plan as pretty-printed JSON
///
/// # Errors
///
/// Returns `SerializationError` if serialization fails
pub fn render_plan(plan: &[DayPlan]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Read a plan previously written with [`render_plan`]
///
/// # Errors
///
/// Returns `InvalidInput` when the file cannot be read and
/// `SerializationError` when it is not a valid plan
pub async fn read_plan(path: &Path) -> AppResult<Vec<DayPlan>> {
    let json = fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("cannot read plan file {}", path.display())).with_source(e)
    })?;
    let plan = parse_plan(&json)?;
    info!(path = %path.display(), days = plan.len(), "Loaded plan file");
    Ok(plan)
}
