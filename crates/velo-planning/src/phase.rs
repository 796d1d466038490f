// ABOUTME: Training phase selection from the number of whole weeks left before the race
// ABOUTME: Pure floor-division mapping onto BASE, BUILD, PEAK and TAPER
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use velo_core::constants::plan_defaults::phase_weeks;
use velo_core::models::TrainingPhase;

/// Whole weeks between `today` and `race_date`, rounded toward negative infinity
///
/// Days after the race give negative values.
#[must_use]
pub fn weeks_until_race(today: NaiveDate, race_date: NaiveDate) -> i64 {
    (race_date - today).num_days().div_euclid(7)
}

/// Phase of the plan on `today`
///
/// Dates after the race fall through to `Taper`.
#[must_use]
pub fn phase_for_date(today: NaiveDate, race_date: NaiveDate) -> TrainingPhase {
    match weeks_until_race(today, race_date) {
        weeks if weeks <= phase_weeks::TAPER_MAX => TrainingPhase::Taper,
        weeks if weeks <= phase_weeks::PEAK_MAX => TrainingPhase::Peak,
        weeks if weeks <= phase_weeks::BUILD_MAX => TrainingPhase::Build,
        _ => TrainingPhase::Base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn test_weeks_floor_after_race_is_negative() {
        let race = date(2026, 4, 5);
        assert_eq!(weeks_until_race(date(2026, 4, 6), race), -1);
        assert_eq!(weeks_until_race(date(2026, 4, 5), race), 0);
        assert_eq!(weeks_until_race(date(2026, 3, 29), race), 1);
        assert_eq!(weeks_until_race(date(2026, 3, 30), race), 0);
    }
}
