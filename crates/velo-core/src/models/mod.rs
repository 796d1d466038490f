// ABOUTME: Core data models for the training-plan compiler
// ABOUTME: Re-exports phases, day plans, step trees, compiled workout DTOs and sync results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `TrainingPhase`: periodization stage derived from weeks to race
//! - `DayPlan` / `StepNode`: the abstract plan as produced by the generator
//! - `CompiledNode` / `WorkoutPayload`: the device encoding sent to the platform
//! - `SyncResult`: per-workout outcome of a sync run
//!
//! Every model round-trips through JSON, which is how plans travel between
//! processes.

mod phase;
mod plan;
mod sync;
mod workout;

pub use phase::TrainingPhase;
pub use plan::{DayPlan, LeafStep, RepeatGroup, StepKind, StepNode};
pub use sync::{SyncResult, SyncStatus};
pub use workout::{
    CompiledNode, CompiledRepeatGroup, CompiledStep, EndConditionRef, SportTypeRef, StepTypeRef,
    TargetTypeRef, WorkoutPayload, WorkoutSegment,
};
