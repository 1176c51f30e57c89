// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Workout suggestion generation.
//!
//! A fixed catalog maps each fitness level to exactly two workout templates.
//! `generate` materializes the templates for the caller's current level and
//! always creates new records: repeated calls accumulate duplicates. That
//! mirrors the product behavior as shipped; de-duplication is an open
//! question for product, not something this layer decides.

use crate::db::MemoryDb;
use crate::error::{AppError, Result};
use crate::models::{ActivityType, FitnessLevel, Intensity, WorkoutSuggestion};

/// One entry of the fixed suggestion catalog.
struct SuggestionTemplate {
    title: &'static str,
    description: &'static str,
    activity_type: ActivityType,
    recommended_duration: u32,
    recommended_intensity: Intensity,
}

/// Two templates per fitness level.
fn catalog(level: FitnessLevel) -> [SuggestionTemplate; 2] {
    match level {
        FitnessLevel::Beginner => [
            SuggestionTemplate {
                title: "Morning Walk",
                description: "Start your day with a light 20-minute walk",
                activity_type: ActivityType::Walking,
                recommended_duration: 20,
                recommended_intensity: Intensity::Low,
            },
            SuggestionTemplate {
                title: "Basic Stretching",
                description: "Gentle stretching routine for flexibility",
                activity_type: ActivityType::Yoga,
                recommended_duration: 15,
                recommended_intensity: Intensity::Low,
            },
        ],
        FitnessLevel::Intermediate => [
            SuggestionTemplate {
                title: "Interval Running",
                description: "30 minutes of alternating running and jogging",
                activity_type: ActivityType::Running,
                recommended_duration: 30,
                recommended_intensity: Intensity::Moderate,
            },
            SuggestionTemplate {
                title: "Strength Circuit",
                description: "Full body strength training circuit",
                activity_type: ActivityType::StrengthTraining,
                recommended_duration: 45,
                recommended_intensity: Intensity::Moderate,
            },
        ],
        FitnessLevel::Advanced => [
            SuggestionTemplate {
                title: "High Intensity Run",
                description: "Challenging 45-minute run with hills",
                activity_type: ActivityType::Running,
                recommended_duration: 45,
                recommended_intensity: Intensity::High,
            },
            SuggestionTemplate {
                title: "Advanced Strength",
                description: "Advanced strength training with heavy weights",
                activity_type: ActivityType::StrengthTraining,
                recommended_duration: 60,
                recommended_intensity: Intensity::High,
            },
        ],
        FitnessLevel::Expert => [
            SuggestionTemplate {
                title: "Elite Training",
                description: "Extreme endurance and strength workout",
                activity_type: ActivityType::Cardio,
                recommended_duration: 90,
                recommended_intensity: Intensity::Extreme,
            },
            SuggestionTemplate {
                title: "Competition Prep",
                description: "High-intensity training for competition",
                activity_type: ActivityType::Sports,
                recommended_duration: 120,
                recommended_intensity: Intensity::Extreme,
            },
        ],
    }
}

/// Generates personalized workout suggestions.
#[derive(Clone)]
pub struct SuggestionService {
    db: MemoryDb,
}

impl SuggestionService {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    /// Materialize the catalog for the user's current fitness level.
    ///
    /// Each call creates fresh records tagged with the level they were
    /// generated for.
    pub fn generate(&self, user_id: u64) -> Result<Vec<WorkoutSuggestion>> {
        let profile = self
            .db
            .get_profile(user_id)
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))?;

        let level = profile.fitness_level;
        let now = chrono::Utc::now();

        let created: Vec<WorkoutSuggestion> = catalog(level)
            .into_iter()
            .map(|template| {
                self.db.insert_suggestion(WorkoutSuggestion {
                    id: 0, // assigned by the store
                    user_id,
                    title: template.title.to_string(),
                    description: template.description.to_string(),
                    activity_type: template.activity_type,
                    recommended_duration: template.recommended_duration,
                    recommended_intensity: template.recommended_intensity,
                    fitness_level: level,
                    completed: false,
                    completed_at: None,
                    created_at: now,
                })
            })
            .collect();

        tracing::info!(
            user_id,
            level = level.as_str(),
            count = created.len(),
            "Workout suggestions generated"
        );

        Ok(created)
    }

    /// Mark a suggestion completed, stamping the completion time.
    ///
    /// Visible only to the owning user. Calling twice just overwrites the
    /// timestamp, which is acceptable.
    pub fn mark_completed(&self, user_id: u64, suggestion_id: u64) -> Result<WorkoutSuggestion> {
        self.owned_suggestion(user_id, suggestion_id)?;
        self.db.with_suggestion_mut(suggestion_id, |suggestion| {
            suggestion.completed = true;
            suggestion.completed_at = Some(chrono::Utc::now());
        })
    }

    pub fn get_suggestion(&self, user_id: u64, suggestion_id: u64) -> Result<WorkoutSuggestion> {
        self.owned_suggestion(user_id, suggestion_id)
    }

    pub fn list_for_user(&self, user_id: u64) -> Vec<WorkoutSuggestion> {
        self.db.suggestions_for_user(user_id)
    }

    fn owned_suggestion(&self, user_id: u64, suggestion_id: u64) -> Result<WorkoutSuggestion> {
        self.db
            .get_suggestion(suggestion_id)
            .filter(|s| s.user_id == user_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Workout suggestion {} not found", suggestion_id))
            })
    }
}
