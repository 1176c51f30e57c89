//! User account and fitness profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID (also used as document ID)
    pub id: u64,
    /// Unique login name
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2id password hash (never exposed in API responses)
    pub password_hash: String,
    /// Staff users can read other users' records
    pub is_staff: bool,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Self-assessed fitness level, drives the suggestion catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl FitnessLevel {
    /// Parse a stored string, falling back to `Beginner` for anything
    /// unrecognized so legacy data never breaks suggestion generation.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "expert" => Self::Expert,
            _ => Self::Beginner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

/// Per-user fitness profile. Exactly one exists per user; it is created
/// inside the registration operation, never on demand.
///
/// `total_points` is a running total mutated only by the activity ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user ID (also used as document ID, 1:1)
    pub user_id: u64,
    pub bio: Option<String>,
    /// Height in cm
    pub height_cm: Option<f64>,
    /// Weight in kg
    pub weight_kg: Option<f64>,
    pub fitness_level: FitnessLevel,
    pub fitness_goals: Option<String>,
    /// Running point total, incremented when activities are first recorded
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Fresh profile with default metadata, paired with a new user.
    pub fn new(user_id: u64, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            bio: None,
            height_cm: None,
            weight_kg: None,
            fitness_level: FitnessLevel::Beginner,
            fitness_goals: None,
            total_points: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_level_parse_lenient_known() {
        assert_eq!(
            FitnessLevel::parse_lenient("advanced"),
            FitnessLevel::Advanced
        );
        assert_eq!(FitnessLevel::parse_lenient("expert"), FitnessLevel::Expert);
    }

    #[test]
    fn test_fitness_level_parse_lenient_unknown_falls_back() {
        assert_eq!(
            FitnessLevel::parse_lenient("superhuman"),
            FitnessLevel::Beginner
        );
        assert_eq!(FitnessLevel::parse_lenient(""), FitnessLevel::Beginner);
    }

    #[test]
    fn test_new_profile_defaults() {
        let now = Utc::now();
        let profile = Profile::new(7, now);
        assert_eq!(profile.user_id, 7);
        assert_eq!(profile.total_points, 0);
        assert_eq!(profile.fitness_level, FitnessLevel::Beginner);
    }
}
