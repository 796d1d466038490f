// ABOUTME: Core types and constants for the velo_plan training-plan compiler
// ABOUTME: Foundation crate with error handling, plan and workout models, and platform codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Velo Core
//!
//! Foundation crate providing shared types for the training-plan workspace.
//! Planning, compilation and sync crates all depend on it, so it is kept free
//! of I/O and of any async runtime.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the transport-facing `ProviderError`
//! - **constants**: platform step/condition/target/sport codes and plan defaults
//! - **models**: `TrainingPhase`, `DayPlan`, `StepNode`, compiled DTOs, `SyncResult`

/// Unified error handling with standard error codes
pub mod errors;

/// Platform codes and plan defaults organized by domain
pub mod constants;

/// Plan, workout and sync data models
pub mod models;
