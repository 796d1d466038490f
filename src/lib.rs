// ABOUTME: Main library entry point for the Velo Plan training-plan generator
// ABOUTME: Wires configuration, logging, plan files and the workout sync orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Velo Plan
//!
//! Generates a periodized cycling plan ending on a race day, compiles every
//! workout into the platform's step encoding and syncs the result to the
//! workout calendar.
//!
//! ## Architecture
//!
//! - **velo-core**: errors, domain models and platform code tables
//! - **velo-planning**: phase selection, workout templates, schedule generation
//! - **velo-providers**: step compiler and the workout transport trait
//! - **this crate**: environment configuration, logging and the sync orchestrator
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use velo_plan::config::PlanConfig;
//! use velo_plan::sync::{sync, SyncOptions};
//! use velo_providers::SyntheticTransport;
//!
//! # async fn run() -> velo_core::errors::AppResult<()> {
//! let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default();
//! let schedule = PlanConfig::from_env()?.schedule_request(today).generate();
//! let results = sync(&schedule, &SyntheticTransport::new(), &SyncOptions::new(today)).await;
//! println!("{} workouts processed", results.len());
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Reading and writing plan JSON files
pub mod plan_file;

/// Workout sync orchestrator
pub mod sync;

pub use velo_core::{constants, errors, models};
