// ABOUTME: Tests for compiling step trees into executable-step and repeat-group DTOs
// ABOUTME: Validates durations, zone targets, per-level ordering, nesting and payload JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, Weekday};
use serde_json::{json, Value};
use velo_core::models::{
    CompiledNode, DayPlan, LeafStep, StepKind, StepNode, TrainingPhase, WorkoutPayload,
};
use velo_planning::template_for_day;
use velo_providers::{
    build_workout_payload, compile_leaf, compile_steps, parse_duration, resolve_step_type,
    workout_name_for,
};

fn plan_for(weekday: Weekday, phase: TrainingPhase) -> DayPlan {
    let template = template_for_day(weekday, phase);
    DayPlan {
        date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
        title: template.title,
        description: template.description,
        steps: template.steps,
        is_race: false,
        phase: Some(phase),
    }
}

fn orders(nodes: &[CompiledNode]) -> Vec<u32> {
    nodes.iter().map(CompiledNode::step_order).collect()
}

fn assert_orders_restart(nodes: &[CompiledNode]) {
    let expected: Vec<u32> = (1..=nodes.len() as u32).collect();
    assert_eq!(orders(nodes), expected);
    for node in nodes {
        if let CompiledNode::Repeat(group) = node {
            assert_orders_restart(&group.workout_steps);
        }
    }
}

#[test]
fn test_parse_duration() {
    assert_eq!(parse_duration("15:00"), 900);
    assert_eq!(parse_duration("1:05:30"), 3930);
    assert_eq!(parse_duration("0:30"), 30);
    assert_eq!(parse_duration("garbage"), 0);
    assert_eq!(parse_duration("12:xx"), 0);
}

#[test]
fn test_step_kind_lookup() {
    let id = |kind: StepKind| resolve_step_type(&kind).step_type_id;
    assert_eq!(id(StepKind::Warmup), 1);
    assert_eq!(id(StepKind::Cooldown), 2);
    assert_eq!(id(StepKind::Interval), 3);
    assert_eq!(id(StepKind::Recovery), 4);
    assert_eq!(id(StepKind::Rest), 5);
    assert_eq!(id(StepKind::Run), 3);
    assert_eq!(id(StepKind::Bike), 3);
    assert_eq!(id(StepKind::Ride), 3);
    assert_eq!(id(StepKind::Other("sprint".to_owned())), 3);
}

#[test]
fn test_leaf_without_duration_ends_on_lap_button() {
    let leaf = LeafStep {
        kind: StepKind::Rest,
        duration: None,
        target: Some("ZONE_x".to_owned()),
        description: None,
    };
    let step = compile_leaf(&leaf, 7);

    assert_eq!(step.step_order, 7);
    assert_eq!(step.end_condition.condition_type_id, 1);
    assert_eq!(step.end_condition.condition_type_key, "lap.button");
    assert!(step.end_condition_value.is_none());
    assert_eq!(step.target_type.workout_target_type_id, 1);
    assert!(step.zone_number.is_none());
}

#[test]
fn test_unparseable_duration_still_ends_on_time() {
    let leaf = LeafStep {
        kind: StepKind::Interval,
        duration: Some("garbage".to_owned()),
        target: Some("ZONE_3".to_owned()),
        description: None,
    };
    let step = compile_leaf(&leaf, 1);

    assert_eq!(step.end_condition.condition_type_id, 2);
    assert_eq!(step.end_condition.condition_type_key, "time");
    assert_eq!(step.end_condition_value, Some(0.0));
    assert_eq!(step.zone_number, Some(3));
}

#[test]
fn test_build_tuesday_zone_targets() {
    let payload = build_workout_payload(&plan_for(Weekday::Tue, TrainingPhase::Build));
    let leaves: Vec<_> = payload.steps().flat_map(CompiledNode::leaves).collect();

    let zone_four: Vec<_> = leaves
        .iter()
        .filter(|step| step.zone_number == Some(4))
        .collect();
    assert_eq!(zone_four.len(), 1);
    assert_eq!(zone_four[0].target_type.workout_target_type_id, 2);
    assert_eq!(
        zone_four[0].target_type.workout_target_type_key,
        "heart.rate.zone"
    );
    assert_eq!(zone_four[0].end_condition_value, Some(900.0));

    // Every step of the catalog carries a zone
    assert!(leaves.iter().all(|step| step.zone_number.is_some()));
}

#[test]
fn test_taper_tuesday_repeat_group() {
    let payload = build_workout_payload(&plan_for(Weekday::Tue, TrainingPhase::Taper));
    let top: Vec<_> = payload.steps().collect();
    assert_eq!(top.len(), 3);

    let CompiledNode::Repeat(group) = top[1] else {
        panic!("second step should be a repeat group");
    };
    assert_eq!(group.step_order, 2);
    assert_eq!(group.number_of_iterations, 2);
    assert_eq!(orders(&group.workout_steps), vec![1, 2]);
}

#[test]
fn test_orders_restart_at_every_level() {
    for phase in TrainingPhase::ALL {
        for weekday in [Weekday::Mon, Weekday::Tue, Weekday::Sat] {
            let payload = build_workout_payload(&plan_for(weekday, phase));
            assert_orders_restart(&payload.workout_segments[0].workout_steps);
        }
    }
}

#[test]
fn test_nested_repeats_keep_their_shape() {
    let plan = plan_for(Weekday::Thu, TrainingPhase::Peak);
    let compiled = compile_steps(&plan.steps);

    let CompiledNode::Repeat(outer) = &compiled[1] else {
        panic!("expected the outer set");
    };
    assert_eq!(outer.number_of_iterations, 3);
    let CompiledNode::Repeat(inner) = &outer.workout_steps[0] else {
        panic!("expected the inner 30/30 block");
    };
    assert_eq!(inner.step_order, 1);
    assert_eq!(inner.number_of_iterations, 10);
    assert_eq!(outer.workout_steps[1].step_order(), 2);
}

#[test]
fn test_compilation_preserves_leaf_count_and_order() {
    for phase in TrainingPhase::ALL {
        for weekday in [Weekday::Wed, Weekday::Thu, Weekday::Sun] {
            let plan = plan_for(weekday, phase);
            let payload = build_workout_payload(&plan);
            assert_eq!(payload.leaf_count(), plan.leaf_count());

            let source_durations: Vec<u32> = plan
                .steps
                .iter()
                .flat_map(StepNode::leaves)
                .map(|leaf| parse_duration(leaf.duration.as_deref().unwrap_or_default()))
                .collect();
            let compiled_durations: Vec<u32> = payload
                .steps()
                .flat_map(CompiledNode::leaves)
                .map(|step| step.end_condition_value.unwrap() as u32)
                .collect();
            assert_eq!(source_durations, compiled_durations);
        }
    }
}

#[test]
fn test_payload_json_shape() {
    let plan = plan_for(Weekday::Tue, TrainingPhase::Taper);
    assert_eq!(workout_name_for(&plan), "2026-03-03 - Rappels d'intensité");

    let value = serde_json::to_value(build_workout_payload(&plan)).unwrap();
    assert_eq!(value["workoutName"], "Rappels d'intensité");
    assert_eq!(
        value["sportType"],
        json!({ "sportTypeId": 2, "sportTypeKey": "cycling" })
    );

    let segment = &value["workoutSegments"][0];
    assert_eq!(segment["segmentOrder"], 1);

    let warmup = &segment["workoutSteps"][0];
    assert_eq!(warmup["type"], "ExecutableStepDTO");
    assert_eq!(warmup["stepOrder"], 1);
    assert_eq!(
        warmup["stepType"],
        json!({ "stepTypeId": 1, "stepTypeKey": "warmup" })
    );
    assert_eq!(
        warmup["endCondition"],
        json!({ "conditionTypeId": 2, "conditionTypeKey": "time" })
    );
    assert_eq!(warmup["endConditionValue"], 900.0);
    assert_eq!(warmup["zoneNumber"], 1);
    assert!(warmup.get("description").is_none());

    let group = &segment["workoutSteps"][1];
    assert_eq!(group["type"], "RepeatGroupDTO");
    assert_eq!(group["numberOfIterations"], 2);
    assert_eq!(group["workoutSteps"][1]["stepOrder"], 2);
}

#[test]
fn test_payload_reads_back() {
    let plan = plan_for(Weekday::Thu, TrainingPhase::Peak);
    let payload = build_workout_payload(&plan);
    let json: Value = serde_json::to_value(&payload).unwrap();
    let parsed: WorkoutPayload = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, payload);
}
