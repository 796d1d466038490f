// ABOUTME: Configuration management module for plan generation and workout sync
// ABOUTME: Environment-only settings for race date, training days and sync pacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Velo Plan
//!
//! Configuration comes from environment variables only:
//!
//! - **Plan**: race date, start date, training weekdays, race title, optional plan file
//! - **Sync**: pause between submissions and the excluded title marker

/// Environment-driven plan and sync configuration
pub mod environment;

pub use environment::{parse_training_days, PlanConfig, SyncConfig};
