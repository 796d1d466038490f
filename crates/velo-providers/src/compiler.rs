// ABOUTME: Compiles abstract step trees into the platform's executable-step and repeat-group DTOs
// ABOUTME: Resolves step kinds, durations and zone targets, and assembles the upload payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Step Compiler
//!
//! Compilation is structure preserving: every `RepeatGroup` becomes a
//! `CompiledRepeatGroup` with the same children, every leaf becomes a
//! `CompiledStep`. Step orders are 1-based and restart inside each group, so
//! a group's children never share numbering with the group's siblings.
//!
//! Malformed input never fails compilation:
//! - an unknown step kind encodes as an interval
//! - an unreadable duration encodes as a 0 second time condition
//! - a target that is not `ZONE_<n>` encodes as "no target"

use velo_core::constants::workout_codes::{conditions, sports, step_types, targets};
use velo_core::models::{
    CompiledNode, CompiledRepeatGroup, CompiledStep, DayPlan, LeafStep, StepKind, StepNode,
    StepTypeRef, TargetTypeRef, WorkoutPayload, WorkoutSegment,
};

/// Shape of a duration string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSpec {
    /// "MM:SS"
    MinutesSeconds {
        /// Minutes, may exceed 59
        minutes: u32,
        /// Seconds
        seconds: u32,
    },
    /// "H:MM:SS"
    HoursMinutesSeconds {
        /// Hours
        hours: u32,
        /// Minutes
        minutes: u32,
        /// Seconds
        seconds: u32,
    },
    /// Anything else, including non-numeric parts
    Unrecognized,
}

impl DurationSpec {
    /// Classify a duration string
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let parts: Option<Vec<u32>> = raw
            .split(':')
            .map(|part| part.trim().parse::<u32>().ok())
            .collect();

        match parts.as_deref() {
            Some(&[minutes, seconds]) => Self::MinutesSeconds { minutes, seconds },
            Some(&[hours, minutes, seconds]) => Self::HoursMinutesSeconds {
                hours,
                minutes,
                seconds,
            },
            _ => Self::Unrecognized,
        }
    }

    /// Total elapsed seconds, 0 when unrecognized
    #[must_use]
    pub const fn total_seconds(self) -> u32 {
        match self {
            Self::MinutesSeconds { minutes, seconds } => {
                minutes.saturating_mul(60).saturating_add(seconds)
            }
            Self::HoursMinutesSeconds {
                hours,
                minutes,
                seconds,
            } => hours
                .saturating_mul(3600)
                .saturating_add(minutes.saturating_mul(60))
                .saturating_add(seconds),
            Self::Unrecognized => 0,
        }
    }
}

/// Parse "MM:SS" or "H:MM:SS" into seconds; anything else is 0
#[must_use]
pub fn parse_duration(raw: &str) -> u32 {
    DurationSpec::parse(raw).total_seconds()
}

/// Resolved intensity target of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSpec {
    /// Heart-rate zone number
    HeartRateZone(u8),
    /// No target, including unrecognized references
    NoTarget,
}

impl TargetSpec {
    /// Platform target type of this spec
    #[must_use]
    pub fn target_type(self) -> TargetTypeRef {
        match self {
            Self::HeartRateZone(_) => targets::HEART_RATE_ZONE.into(),
            Self::NoTarget => targets::NO_TARGET.into(),
        }
    }

    /// Zone number, only for zone targets
    #[must_use]
    pub const fn zone_number(self) -> Option<u8> {
        match self {
            Self::HeartRateZone(zone) => Some(zone),
            Self::NoTarget => None,
        }
    }
}

/// Resolve a "`ZONE_<n>`" reference, `n` being ASCII digits only
#[must_use]
pub fn resolve_target(target: Option<&str>) -> TargetSpec {
    target
        .and_then(|raw| raw.strip_prefix(targets::ZONE_PREFIX))
        .filter(|zone| !zone.is_empty() && zone.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|zone| zone.parse::<u8>().ok())
        .map_or(TargetSpec::NoTarget, TargetSpec::HeartRateZone)
}

/// Platform step type for a step kind
#[must_use]
#[allow(clippy::match_same_arms)] // Unknown kinds keep a branch of their own
pub fn resolve_step_type(kind: &StepKind) -> StepTypeRef {
    match kind {
        StepKind::Warmup => step_types::WARMUP.into(),
        StepKind::Cooldown => step_types::COOLDOWN.into(),
        StepKind::Recovery => step_types::RECOVERY.into(),
        StepKind::Rest => step_types::REST.into(),
        StepKind::Interval | StepKind::Run | StepKind::Bike | StepKind::Ride => {
            step_types::INTERVAL.into()
        }
        StepKind::Other(_) => step_types::INTERVAL.into(),
    }
}

/// Encode one leaf at `step_order`
#[must_use]
pub fn compile_leaf(leaf: &LeafStep, step_order: u32) -> CompiledStep {
    let (end_condition, end_condition_value) = match leaf.duration.as_deref() {
        Some(duration) => (
            conditions::TIME.into(),
            Some(f64::from(parse_duration(duration))),
        ),
        None => (conditions::LAP_BUTTON.into(), None),
    };
    let target = resolve_target(leaf.target.as_deref());

    CompiledStep {
        step_order,
        step_type: resolve_step_type(&leaf.kind),
        end_condition,
        end_condition_value,
        target_type: target.target_type(),
        zone_number: target.zone_number(),
        description: leaf.description.clone(),
    }
}

fn compile_node(node: &StepNode, step_order: u32) -> CompiledNode {
    match node {
        StepNode::Leaf(leaf) => CompiledNode::Step(compile_leaf(leaf, step_order)),
        StepNode::Repeat(group) => CompiledNode::Repeat(CompiledRepeatGroup {
            step_order,
            number_of_iterations: group.count.get(),
            workout_steps: compile_steps(&group.steps),
        }),
    }
}

/// Compile a sibling list, numbering it from 1
///
/// Each node takes the next order whether it is a leaf or a whole group;
/// nested groups restart at 1 through their own call.
#[must_use]
pub fn compile_steps(nodes: &[StepNode]) -> Vec<CompiledNode> {
    nodes
        .iter()
        .zip(1_u32..)
        .map(|(node, step_order)| compile_node(node, step_order))
        .collect()
}

/// Library name used for a synced workout: "{date} - {title}"
#[must_use]
pub fn workout_name_for(plan: &DayPlan) -> String {
    format!("{} - {}", plan.date, plan.title)
}

/// Assemble the single-segment cycling payload for a day plan
///
/// The workout name is the plan title; sync renames it with
/// [`workout_name_for`].
#[must_use]
pub fn build_workout_payload(plan: &DayPlan) -> WorkoutPayload {
    WorkoutPayload {
        workout_name: plan.title.clone(),
        sport_type: sports::CYCLING.into(),
        workout_segments: vec![WorkoutSegment {
            segment_order: 1,
            sport_type: sports::CYCLING.into(),
            workout_steps: compile_steps(&plan.steps),
        }],
        description: plan.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_shapes() {
        assert_eq!(
            DurationSpec::parse("4:30"),
            DurationSpec::MinutesSeconds {
                minutes: 4,
                seconds: 30
            }
        );
        assert_eq!(
            DurationSpec::parse("1:05:30"),
            DurationSpec::HoursMinutesSeconds {
                hours: 1,
                minutes: 5,
                seconds: 30
            }
        );
        assert_eq!(DurationSpec::parse("90"), DurationSpec::Unrecognized);
        assert_eq!(DurationSpec::parse("1:2:3:4"), DurationSpec::Unrecognized);
        assert_eq!(DurationSpec::parse("ab:cd"), DurationSpec::Unrecognized);
        assert_eq!(DurationSpec::parse(""), DurationSpec::Unrecognized);
    }

    #[test]
    fn test_minutes_may_exceed_an_hour() {
        assert_eq!(parse_duration("160:00"), 9600);
    }

    #[test]
    fn test_zone_prefix_is_literal() {
        assert_eq!(resolve_target(Some("ZONE_4")), TargetSpec::HeartRateZone(4));
        assert_eq!(resolve_target(Some("zone_4")), TargetSpec::NoTarget);
        assert_eq!(resolve_target(Some("ZONE_x")), TargetSpec::NoTarget);
        assert_eq!(resolve_target(Some("Z4")), TargetSpec::NoTarget);
        assert_eq!(resolve_target(None), TargetSpec::NoTarget);
    }

    #[test]
    fn test_zone_number_is_digits_only() {
        assert_eq!(resolve_target(Some("ZONE_+4")), TargetSpec::NoTarget);
        assert_eq!(resolve_target(Some("ZONE_ 4")), TargetSpec::NoTarget);
        assert_eq!(resolve_target(Some("ZONE_")), TargetSpec::NoTarget);
        assert_eq!(resolve_target(Some("ZONE_05")), TargetSpec::HeartRateZone(5));
    }
}
