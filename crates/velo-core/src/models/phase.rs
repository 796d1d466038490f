// ABOUTME: Training phase enumeration for periodized plans
// ABOUTME: Ordered from furthest to nearest the race with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Periodization stage of a training plan
///
/// Variants are declared in the order they occur as the race approaches, so
/// the derived `Ord` matches intensity: `Base < Build < Peak < Taper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingPhase {
    /// Aerobic foundation, furthest from the race
    Base,
    /// Threshold and tempo work
    Build,
    /// Race-specific high intensity
    Peak,
    /// Reduced volume in the final weeks
    Taper,
}

impl TrainingPhase {
    /// All phases in chronological order
    pub const ALL: [Self; 4] = [Self::Base, Self::Build, Self::Peak, Self::Taper];

    /// Position of the phase on the intensity scale (0 = base)
    #[must_use]
    pub const fn intensity_rank(self) -> u8 {
        match self {
            Self::Base => 0,
            Self::Build => 1,
            Self::Peak => 2,
            Self::Taper => 3,
        }
    }

    /// Upper-case identifier used in plans and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "BASE",
            Self::Build => "BUILD",
            Self::Peak => "PEAK",
            Self::Taper => "TAPER",
        }
    }
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BASE" => Ok(Self::Base),
            "BUILD" => Ok(Self::Build),
            "PEAK" => Ok(Self::Peak),
            "TAPER" => Ok(Self::Taper),
            other => Err(format!("unknown training phase: {other}")),
        }
    }
}
