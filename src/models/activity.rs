// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Logged exercise sessions with derived points.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of exercise performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Running,
    Walking,
    Cycling,
    Swimming,
    StrengthTraining,
    Yoga,
    Cardio,
    Sports,
    Other,
}

impl ActivityType {
    /// Parse a stored string, mapping anything unrecognized to `Other`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "running" => Self::Running,
            "walking" => Self::Walking,
            "cycling" => Self::Cycling,
            "swimming" => Self::Swimming,
            "strength_training" => Self::StrengthTraining,
            "yoga" => Self::Yoga,
            "cardio" => Self::Cardio,
            "sports" => Self::Sports,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::StrengthTraining => "strength_training",
            Self::Yoga => "yoga",
            Self::Cardio => "cardio",
            Self::Sports => "sports",
            Self::Other => "other",
        }
    }
}

/// Effort level of a session. Determines the points multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    Extreme,
}

impl Intensity {
    /// Parse a stored string. Unrecognized values fall back to `Low`, whose
    /// multiplier is 1.0, so a bad value can never inflate points or fail.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "moderate" => Self::Moderate,
            "high" => Self::High,
            "extreme" => Self::Extreme,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }
}

/// One logged exercise session.
///
/// `points_earned` is derived from duration and intensity and is never
/// user-settable; the ledger recomputes it on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Activity ID (also used as document ID)
    pub id: u64,
    /// Owning user ID
    pub user_id: u64,
    pub activity_type: ActivityType,
    /// Duration in minutes (> 0)
    pub duration_minutes: u32,
    /// Distance in km, if the activity has one
    pub distance_km: Option<f64>,
    pub calories_burned: Option<u32>,
    pub intensity: Intensity,
    pub notes: Option<String>,
    /// Derived: floor(duration × intensity multiplier)
    pub points_earned: i64,
    /// Calendar date the session was performed
    pub date_performed: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_parse_lenient() {
        assert_eq!(
            ActivityType::parse_lenient("strength_training"),
            ActivityType::StrengthTraining
        );
        assert_eq!(ActivityType::parse_lenient("parkour"), ActivityType::Other);
    }

    #[test]
    fn test_intensity_parse_lenient_defaults_low() {
        assert_eq!(Intensity::parse_lenient("extreme"), Intensity::Extreme);
        assert_eq!(Intensity::parse_lenient("bogus"), Intensity::Low);
    }

    #[test]
    fn test_enum_serde_snake_case() {
        let json = serde_json::to_string(&ActivityType::StrengthTraining).unwrap();
        assert_eq!(json, "\"strength_training\"");
        let parsed: Intensity = serde_json::from_str("\"moderate\"").unwrap();
        assert_eq!(parsed, Intensity::Moderate);
    }
}
