//! Workout suggestion records produced by the generator.

use crate::models::activity::{ActivityType, Intensity};
use crate::models::user::FitnessLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A personalized workout recommendation.
///
/// Created by the suggestion generator (or directly), then mutated exactly
/// once to mark completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSuggestion {
    /// Suggestion ID (also used as document ID)
    pub id: u64,
    /// Target user ID
    pub user_id: u64,
    pub title: String,
    pub description: String,
    pub activity_type: ActivityType,
    /// Recommended duration in minutes
    pub recommended_duration: u32,
    pub recommended_intensity: Intensity,
    /// Fitness level the suggestion was generated for
    pub fitness_level: FitnessLevel,
    pub completed: bool,
    /// Set only when marked completed
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
