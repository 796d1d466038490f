// ABOUTME: Device-ready workout DTOs produced by the step compiler
// ABOUTME: Executable steps, repeat groups, segments and the upload payload in platform JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Step type reference (`stepTypeId` / `stepTypeKey`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTypeRef {
    /// Numeric platform id
    pub step_type_id: u8,
    /// Platform key
    pub step_type_key: String,
}

impl From<(u8, &str)> for StepTypeRef {
    fn from((id, key): (u8, &str)) -> Self {
        Self {
            step_type_id: id,
            step_type_key: key.to_owned(),
        }
    }
}

/// End condition reference (`conditionTypeId` / `conditionTypeKey`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndConditionRef {
    /// Numeric platform id
    pub condition_type_id: u8,
    /// Platform key
    pub condition_type_key: String,
}

impl From<(u8, &str)> for EndConditionRef {
    fn from((id, key): (u8, &str)) -> Self {
        Self {
            condition_type_id: id,
            condition_type_key: key.to_owned(),
        }
    }
}

/// Target type reference (`workoutTargetTypeId` / `workoutTargetTypeKey`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetTypeRef {
    /// Numeric platform id
    pub workout_target_type_id: u8,
    /// Platform key
    pub workout_target_type_key: String,
}

impl From<(u8, &str)> for TargetTypeRef {
    fn from((id, key): (u8, &str)) -> Self {
        Self {
            workout_target_type_id: id,
            workout_target_type_key: key.to_owned(),
        }
    }
}

/// Sport reference (`sportTypeId` / `sportTypeKey`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportTypeRef {
    /// Numeric platform id
    pub sport_type_id: u8,
    /// Platform key
    pub sport_type_key: String,
}

impl From<(u8, &str)> for SportTypeRef {
    fn from((id, key): (u8, &str)) -> Self {
        Self {
            sport_type_id: id,
            sport_type_key: key.to_owned(),
        }
    }
}

/// Encoded leaf step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledStep {
    /// 1-based position within the parent list
    pub step_order: u32,
    /// Resolved step type
    pub step_type: StepTypeRef,
    /// Time-based or lap-button end condition
    pub end_condition: EndConditionRef,
    /// Elapsed seconds when the end condition is time-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_condition_value: Option<f64>,
    /// Zone or no-target
    pub target_type: TargetTypeRef,
    /// Zone number, only when a zone target was resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_number: Option<u8>,
    /// Description carried from the step tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Encoded repeat group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledRepeatGroup {
    /// 1-based position within the parent list
    pub step_order: u32,
    /// Number of iterations
    pub number_of_iterations: u32,
    /// Children, numbered from 1 independently of the group's own order
    pub workout_steps: Vec<CompiledNode>,
}

/// Node of a compiled workout, tagged with its DTO type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CompiledNode {
    /// Executable step
    #[serde(rename = "ExecutableStepDTO")]
    Step(CompiledStep),
    /// Repeat group
    #[serde(rename = "RepeatGroupDTO")]
    Repeat(CompiledRepeatGroup),
}

impl CompiledNode {
    /// Position within the parent list
    #[must_use]
    pub const fn step_order(&self) -> u32 {
        match self {
            Self::Step(step) => step.step_order,
            Self::Repeat(group) => group.step_order,
        }
    }

    /// Number of executable steps in this subtree
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Step(_) => 1,
            Self::Repeat(group) => group.workout_steps.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Executable steps of this subtree in depth-first order
    #[must_use]
    pub fn leaves(&self) -> Vec<&CompiledStep> {
        match self {
            Self::Step(step) => vec![step],
            Self::Repeat(group) => group.workout_steps.iter().flat_map(Self::leaves).collect(),
        }
    }
}

/// Ordered block of steps for one sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSegment {
    /// 1-based segment position
    pub segment_order: u32,
    /// Sport of this segment
    pub sport_type: SportTypeRef,
    /// Top-level compiled steps
    pub workout_steps: Vec<CompiledNode>,
}

/// Body submitted to the platform's create-workout call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPayload {
    /// Library name of the workout
    pub workout_name: String,
    /// Sport of the workout
    pub sport_type: SportTypeRef,
    /// Segments, a single one for plans built here
    pub workout_segments: Vec<WorkoutSegment>,
    /// Workout description
    pub description: String,
}

impl WorkoutPayload {
    /// Top-level steps of every segment, in order
    pub fn steps(&self) -> impl Iterator<Item = &CompiledNode> {
        self.workout_segments
            .iter()
            .flat_map(|segment| segment.workout_steps.iter())
    }

    /// Number of executable steps in the payload
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.steps().map(CompiledNode::leaf_count).sum()
    }
}
