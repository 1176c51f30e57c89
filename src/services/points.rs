// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Points calculation.
//!
//! Pure conversion from (duration, intensity) to points. No side effects and
//! no failure modes; duration validation happens at the request boundary.

use crate::models::Intensity;

/// Intensity-keyed scalar converting minutes to points.
pub fn multiplier(intensity: Intensity) -> f64 {
    match intensity {
        Intensity::Low => 1.0,
        Intensity::Moderate => 1.5,
        Intensity::High => 2.0,
        Intensity::Extreme => 2.5,
    }
}

/// Points for one session: floor(duration × multiplier).
pub fn points_earned(duration_minutes: u32, intensity: Intensity) -> i64 {
    (f64::from(duration_minutes) * multiplier(intensity)).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        assert_eq!(multiplier(Intensity::Low), 1.0);
        assert_eq!(multiplier(Intensity::Moderate), 1.5);
        assert_eq!(multiplier(Intensity::High), 2.0);
        assert_eq!(multiplier(Intensity::Extreme), 2.5);
    }

    #[test]
    fn test_points_earned_worked_examples() {
        assert_eq!(points_earned(45, Intensity::High), 90);
        assert_eq!(points_earned(60, Intensity::Extreme), 150);
    }

    #[test]
    fn test_points_earned_truncates() {
        // 45 × 1.5 = 67.5 → 67
        assert_eq!(points_earned(45, Intensity::Moderate), 67);
        assert_eq!(points_earned(1, Intensity::Moderate), 1);
    }

    #[test]
    fn test_unrecognized_intensity_string_scores_at_one() {
        // Bad stored values parse to Low, whose multiplier is 1.0
        let fallback = Intensity::parse_lenient("not-a-real-intensity");
        assert_eq!(points_earned(30, fallback), 30);
    }
}
