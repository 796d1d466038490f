// ABOUTME: Day plans and abstract step trees produced by the schedule generator
// ABOUTME: Leaf steps and nested repeat groups with the JSON shape used between processes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use super::TrainingPhase;

/// Kind of a leaf step as written in a step tree
///
/// The set is open: kinds the platform does not know are kept verbatim in
/// `Other` and resolved by the compiler's default branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StepKind {
    /// Warm-up
    Warmup,
    /// Cool-down
    Cooldown,
    /// Work interval
    Interval,
    /// Active recovery
    Recovery,
    /// Passive rest
    Rest,
    /// Generic continuous effort ("run")
    Run,
    /// Generic continuous ride ("bike")
    Bike,
    /// Generic continuous ride ("ride")
    Ride,
    /// Any other kind, kept as written
    Other(String),
}

impl StepKind {
    /// Name of the kind as written in a step tree
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Warmup => "warmup",
            Self::Cooldown => "cooldown",
            Self::Interval => "interval",
            Self::Recovery => "recovery",
            Self::Rest => "rest",
            Self::Run => "run",
            Self::Bike => "bike",
            Self::Ride => "ride",
            Self::Other(name) => name,
        }
    }
}

impl TryFrom<String> for StepKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(match value.as_str() {
            "warmup" => Self::Warmup,
            "cooldown" => Self::Cooldown,
            "interval" => Self::Interval,
            "recovery" => Self::Recovery,
            "rest" => Self::Rest,
            "run" => Self::Run,
            "bike" => Self::Bike,
            "ride" => Self::Ride,
            // A "repeat" that failed to parse as a group is malformed, not a leaf
            "repeat" => return Err("repeat step requires a positive count and steps".to_owned()),
            _ => Self::Other(value),
        })
    }
}

impl From<StepKind> for String {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single executable step before device encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafStep {
    /// Step kind
    #[serde(rename = "type")]
    pub kind: StepKind,
    /// Elapsed time, "MM:SS" or "H:MM:SS"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Intensity reference such as "`ZONE_3`"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Free text shown on the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LeafStep {
    /// Create a timed step aimed at a zone
    #[must_use]
    pub fn timed(kind: StepKind, duration: &str, target: &str) -> Self {
        Self {
            kind,
            duration: Some(duration.to_owned()),
            target: Some(target.to_owned()),
            description: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
enum RepeatTag {
    #[default]
    #[serde(rename = "repeat")]
    Repeat,
}

/// A block of child steps repeated a positive number of times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatGroup {
    #[serde(rename = "type")]
    tag: RepeatTag,
    /// Number of iterations
    pub count: NonZeroU32,
    /// Children, leaves or further repeat groups
    pub steps: Vec<StepNode>,
}

impl RepeatGroup {
    /// Create a repeat group
    #[must_use]
    pub const fn new(count: NonZeroU32, steps: Vec<StepNode>) -> Self {
        Self {
            tag: RepeatTag::Repeat,
            count,
            steps,
        }
    }
}

/// Node of an abstract step tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepNode {
    /// Repeated block (tried first so a "repeat" is never read as a leaf)
    Repeat(RepeatGroup),
    /// Single step
    Leaf(LeafStep),
}

impl StepNode {
    /// Number of leaf steps in this subtree
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Repeat(group) => group.steps.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Leaves of this subtree in depth-first order
    #[must_use]
    pub fn leaves(&self) -> Vec<&LeafStep> {
        match self {
            Self::Leaf(leaf) => vec![leaf],
            Self::Repeat(group) => group.steps.iter().flat_map(Self::leaves).collect(),
        }
    }
}

impl From<LeafStep> for StepNode {
    fn from(leaf: LeafStep) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<RepeatGroup> for StepNode {
    fn from(group: RepeatGroup) -> Self {
        Self::Repeat(group)
    }
}

/// One calendar day of a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Calendar date, unique within a schedule
    #[serde(deserialize_with = "deserialize_plan_date")]
    pub date: NaiveDate,
    /// Workout title
    pub title: String,
    /// Workout description
    #[serde(default)]
    pub description: String,
    /// Step tree, empty for the race entry
    #[serde(default)]
    pub steps: Vec<StepNode>,
    /// Whether this entry is the race itself
    #[serde(default)]
    pub is_race: bool,
    /// Phase the workout was selected for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<TrainingPhase>,
}

impl DayPlan {
    /// Number of leaf steps across the whole tree
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.steps.iter().map(StepNode::leaf_count).sum()
    }
}

/// Accept both "2026-03-03" and "2026-03-03T00:00:00"-style dates
fn deserialize_plan_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(DeError::custom)
}
