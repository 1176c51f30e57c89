// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Sample data loader for local development.
//!
//! Runs only when `SEED_SAMPLE_DATA=true`. Every record is keyed on a
//! natural identifier (username, team name, activity user/type/date,
//! suggestion user/title) so repeated startups do not duplicate data.
//! Activities go through the ledger, so point credits and achievement
//! evaluation happen exactly as they would for a live request.

use chrono::{Days, NaiveDate, Utc};

use crate::error::Result;
use crate::models::{ActivityType, FitnessLevel, Intensity, User, WorkoutSuggestion};
use crate::password::hash_password;
use crate::services::ActivityDraft;
use crate::AppState;

struct SampleUser {
    username: &'static str,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    fitness_level: FitnessLevel,
    height_cm: f64,
    weight_kg: f64,
    fitness_goals: &'static str,
}

const SAMPLE_USERS: [SampleUser; 4] = [
    SampleUser {
        username: "john_runner",
        email: "john@example.com",
        first_name: "John",
        last_name: "Doe",
        fitness_level: FitnessLevel::Advanced,
        height_cm: 180.0,
        weight_kg: 75.0,
        fitness_goals: "Complete a marathon",
    },
    SampleUser {
        username: "jane_fitness",
        email: "jane@example.com",
        first_name: "Jane",
        last_name: "Smith",
        fitness_level: FitnessLevel::Intermediate,
        height_cm: 165.0,
        weight_kg: 60.0,
        fitness_goals: "Improve overall fitness",
    },
    SampleUser {
        username: "mike_athlete",
        email: "mike@example.com",
        first_name: "Mike",
        last_name: "Johnson",
        fitness_level: FitnessLevel::Expert,
        height_cm: 185.0,
        weight_kg: 85.0,
        fitness_goals: "Train for triathlon",
    },
    SampleUser {
        username: "sarah_yoga",
        email: "sarah@example.com",
        first_name: "Sarah",
        last_name: "Williams",
        fitness_level: FitnessLevel::Beginner,
        height_cm: 170.0,
        weight_kg: 65.0,
        fitness_goals: "Start yoga practice",
    },
];

struct SampleActivity {
    user: usize,
    activity_type: ActivityType,
    duration_minutes: u32,
    distance_km: Option<f64>,
    intensity: Intensity,
    days_ago: u64,
}

const SAMPLE_ACTIVITIES: [SampleActivity; 8] = [
    SampleActivity {
        user: 0,
        activity_type: ActivityType::Running,
        duration_minutes: 45,
        distance_km: Some(8.5),
        intensity: Intensity::High,
        days_ago: 1,
    },
    SampleActivity {
        user: 0,
        activity_type: ActivityType::Running,
        duration_minutes: 60,
        distance_km: Some(12.0),
        intensity: Intensity::Moderate,
        days_ago: 3,
    },
    SampleActivity {
        user: 1,
        activity_type: ActivityType::StrengthTraining,
        duration_minutes: 50,
        distance_km: None,
        intensity: Intensity::Moderate,
        days_ago: 0,
    },
    SampleActivity {
        user: 1,
        activity_type: ActivityType::Cycling,
        duration_minutes: 40,
        distance_km: Some(15.0),
        intensity: Intensity::Moderate,
        days_ago: 2,
    },
    SampleActivity {
        user: 2,
        activity_type: ActivityType::Swimming,
        duration_minutes: 60,
        distance_km: Some(2.0),
        intensity: Intensity::High,
        days_ago: 1,
    },
    SampleActivity {
        user: 2,
        activity_type: ActivityType::StrengthTraining,
        duration_minutes: 90,
        distance_km: None,
        intensity: Intensity::Extreme,
        days_ago: 0,
    },
    SampleActivity {
        user: 3,
        activity_type: ActivityType::Yoga,
        duration_minutes: 60,
        distance_km: None,
        intensity: Intensity::Low,
        days_ago: 0,
    },
    SampleActivity {
        user: 3,
        activity_type: ActivityType::Walking,
        duration_minutes: 30,
        distance_km: Some(3.0),
        intensity: Intensity::Low,
        days_ago: 1,
    },
];

/// Teams plus the extra members joined after creation (creator joins
/// automatically).
const SAMPLE_TEAMS: [(&str, &str, usize, &[usize]); 3] = [
    (
        "Morning Runners",
        "Team for early morning running enthusiasts",
        0,
        &[1, 3],
    ),
    ("Strength Squad", "Building strength together", 1, &[0, 2]),
    (
        "Fitness Warriors",
        "Hardcore fitness training group",
        2,
        &[0, 1, 3],
    ),
];

/// Populate the store with demo users, activities, teams, and suggestions.
pub fn load_sample_data(state: &AppState) -> Result<()> {
    let users = seed_users(state)?;
    seed_activities(state, &users)?;
    seed_teams(state, &users)?;
    seed_suggestions(state, &users);
    seed_admin(state)?;

    tracing::info!("Sample data loaded");
    Ok(())
}

fn seed_users(state: &AppState) -> Result<Vec<User>> {
    let mut users = Vec::with_capacity(SAMPLE_USERS.len());
    for sample in &SAMPLE_USERS {
        let user = match state.db.get_user_by_username(sample.username) {
            Some(existing) => existing,
            None => {
                let user = state.db.create_user(
                    sample.username.to_string(),
                    sample.email.to_string(),
                    sample.first_name.to_string(),
                    sample.last_name.to_string(),
                    hash_password("testpass123")?,
                    false,
                )?;
                state.db.update_profile(user.id, |profile| {
                    profile.fitness_level = sample.fitness_level;
                    profile.height_cm = Some(sample.height_cm);
                    profile.weight_kg = Some(sample.weight_kg);
                    profile.fitness_goals = Some(sample.fitness_goals.to_string());
                })?;
                tracing::debug!(username = sample.username, "Created sample user");
                user
            }
        };
        users.push(user);
    }
    Ok(users)
}

fn seed_activities(state: &AppState, users: &[User]) -> Result<()> {
    let today = Utc::now().date_naive();
    for sample in &SAMPLE_ACTIVITIES {
        let user_id = users[sample.user].id;
        let date_performed = days_ago(today, sample.days_ago);
        if state
            .db
            .find_activity_by_natural_key(user_id, sample.activity_type, date_performed)
            .is_some()
        {
            continue;
        }
        state.ledger.record_activity(
            user_id,
            ActivityDraft {
                activity_type: sample.activity_type,
                duration_minutes: sample.duration_minutes,
                distance_km: sample.distance_km,
                calories_burned: None,
                intensity: sample.intensity,
                notes: None,
                date_performed,
            },
        )?;
    }
    Ok(())
}

fn seed_teams(state: &AppState, users: &[User]) -> Result<()> {
    for &(name, description, creator, members) in &SAMPLE_TEAMS {
        let team = match state.db.get_team_by_name(name) {
            Some(existing) => existing,
            None => state.teams.create_team(
                users[creator].id,
                name.to_string(),
                Some(description.to_string()),
            )?,
        };
        for &member in members {
            if !team.is_member(users[member].id) {
                state.teams.join(team.id, users[member].id)?;
            }
        }
    }
    Ok(())
}

fn seed_suggestions(state: &AppState, users: &[User]) {
    let samples = [
        (
            0,
            "10K Training Run",
            "Build endurance with a 10K run",
            ActivityType::Running,
            50,
            Intensity::Moderate,
            FitnessLevel::Advanced,
        ),
        (
            1,
            "Full Body Strength",
            "Complete body workout with weights",
            ActivityType::StrengthTraining,
            45,
            Intensity::Moderate,
            FitnessLevel::Intermediate,
        ),
        (
            2,
            "Triathlon Training",
            "Combined swim, bike, run session",
            ActivityType::Sports,
            120,
            Intensity::Extreme,
            FitnessLevel::Expert,
        ),
        (
            3,
            "Beginner Yoga Flow",
            "Gentle yoga for beginners",
            ActivityType::Yoga,
            30,
            Intensity::Low,
            FitnessLevel::Beginner,
        ),
    ];

    for (user, title, description, activity_type, duration, intensity, level) in samples {
        let user_id = users[user].id;
        if state.db.find_suggestion_by_title(user_id, title).is_some() {
            continue;
        }
        state.db.insert_suggestion(WorkoutSuggestion {
            id: 0,
            user_id,
            title: title.to_string(),
            description: description.to_string(),
            activity_type,
            recommended_duration: duration,
            recommended_intensity: intensity,
            fitness_level: level,
            completed: false,
            completed_at: None,
            created_at: Utc::now(),
        });
    }
}

fn seed_admin(state: &AppState) -> Result<()> {
    if state.db.get_user_by_username("admin").is_none() {
        state.db.create_user(
            "admin".to_string(),
            "admin@example.com".to_string(),
            String::new(),
            String::new(),
            hash_password("admin123")?,
            true,
        )?;
        tracing::debug!("Created sample admin user");
    }
    Ok(())
}

fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}
