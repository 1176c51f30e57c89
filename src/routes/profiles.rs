// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Fitness profile routes.

use axum::{extract::State, routing::get, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{FitnessLevel, Profile};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profiles", get(list_profiles))
        .route("/api/profiles/me", get(get_me).put(update_me))
}

/// Profile fields exposed through the API. `total_points` is read-only.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub user_id: u64,
    pub username: String,
    pub bio: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_level: FitnessLevel,
    pub fitness_goals: Option<String>,
    pub total_points: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ProfileResponse {
    fn from_profile(profile: Profile, username: String) -> Self {
        Self {
            user_id: profile.user_id,
            username,
            bio: profile.bio,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            fitness_level: profile.fitness_level,
            fitness_goals: profile.fitness_goals,
            total_points: profile.total_points,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Metadata edits. Points can never be set through this payload.
#[derive(Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[validate(range(min = 0.0, max = 300.0))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 0.0, max = 700.0))]
    pub weight_kg: Option<f64>,
    pub fitness_level: Option<FitnessLevel>,
    #[validate(length(max = 2000))]
    pub fitness_goals: Option<String>,
}

/// List profiles: staff see everyone, others see their own.
async fn list_profiles(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ProfileResponse>>> {
    let caller = state
        .db
        .get_user(user.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    let profiles = if caller.is_staff {
        state.db.list_profiles()
    } else {
        state.db.get_profile(user.user_id).into_iter().collect()
    };

    let responses = profiles
        .into_iter()
        .map(|p| {
            let username = state
                .db
                .get_user(p.user_id)
                .map(|u| u.username)
                .unwrap_or_default();
            ProfileResponse::from_profile(p, username)
        })
        .collect();

    Ok(Json(responses))
}

/// Current user's profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>> {
    let profile = state.db.get_profile(user.user_id).ok_or_else(|| {
        AppError::NotFound(format!("Profile for user {} not found", user.user_id))
    })?;
    let username = state
        .db
        .get_user(user.user_id)
        .map(|u| u.username)
        .unwrap_or_default();
    Ok(Json(ProfileResponse::from_profile(profile, username)))
}

/// Edit the current user's profile metadata.
async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let profile = state.db.update_profile(user.user_id, |profile| {
        if payload.bio.is_some() {
            profile.bio = payload.bio;
        }
        if payload.height_cm.is_some() {
            profile.height_cm = payload.height_cm;
        }
        if payload.weight_kg.is_some() {
            profile.weight_kg = payload.weight_kg;
        }
        if let Some(level) = payload.fitness_level {
            profile.fitness_level = level;
        }
        if payload.fitness_goals.is_some() {
            profile.fitness_goals = payload.fitness_goals;
        }
    })?;

    let username = state
        .db
        .get_user(user.user_id)
        .map(|u| u.username)
        .unwrap_or_default();
    Ok(Json(ProfileResponse::from_profile(profile, username)))
}
