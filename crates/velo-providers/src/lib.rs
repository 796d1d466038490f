// ABOUTME: Workout compilation and transport abstractions for the remote fitness platform
// ABOUTME: Step-tree compiler, transport trait with scheduling fallback, and an in-memory transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout compilation and transports.
//!
//! The compiler turns a day plan's abstract step tree into the platform's DTO
//! encoding. Transports submit the result; the real HTTP client lives outside
//! this workspace and plugs in through [`transport::WorkoutTransport`].

// Re-export velo-core modules so transport implementors need a single dependency
pub use velo_core::constants;
pub use velo_core::errors;
pub use velo_core::models;

/// Step-tree to DTO compiler
pub mod compiler;
/// In-memory transport for dry runs and tests
pub mod synthetic;
/// Transport collaborator interface
pub mod transport;

pub use compiler::{
    build_workout_payload, compile_leaf, compile_steps, parse_duration, resolve_step_type,
    resolve_target, workout_name_for, DurationSpec, TargetSpec,
};
pub use synthetic::SyntheticTransport;
pub use transport::{schedule_endpoint, UploadedWorkout, WorkoutId, WorkoutTransport};
pub use velo_core::errors::provider::{ProviderError, ProviderResult};
