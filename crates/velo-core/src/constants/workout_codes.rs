// ABOUTME: Step type, end condition, target type and sport codes of the workout platform
// ABOUTME: Closed lookup tables consumed by the step compiler when encoding DTOs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// DTO type tags live on `CompiledNode`'s serde renames

/// Step type codes (`stepTypeId`, `stepTypeKey`)
pub mod step_types {
    /// Warm-up step
    pub const WARMUP: (u8, &str) = (1, "warmup");
    /// Cool-down step
    pub const COOLDOWN: (u8, &str) = (2, "cooldown");
    /// Work interval
    pub const INTERVAL: (u8, &str) = (3, "interval");
    /// Active recovery between intervals
    pub const RECOVERY: (u8, &str) = (4, "recovery");
    /// Passive rest
    pub const REST: (u8, &str) = (5, "rest");
}

/// End condition codes (`conditionTypeId`, `conditionTypeKey`)
pub mod conditions {
    /// Step ends when the athlete presses lap
    pub const LAP_BUTTON: (u8, &str) = (1, "lap.button");
    /// Step ends after `endConditionValue` seconds
    pub const TIME: (u8, &str) = (2, "time");
}

/// Target type codes (`workoutTargetTypeId`, `workoutTargetTypeKey`)
pub mod targets {
    /// No intensity target
    pub const NO_TARGET: (u8, &str) = (1, "no.target");
    /// Heart-rate zone target
    pub const HEART_RATE_ZONE: (u8, &str) = (2, "heart.rate.zone");
    /// Prefix recognised in step-tree target references
    pub const ZONE_PREFIX: &str = "ZONE_";
}

/// Sport codes (`sportTypeId`, `sportTypeKey`)
pub mod sports {
    /// Cycling, the only sport this plan produces
    pub const CYCLING: (u8, &str) = (2, "cycling");
}
