// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Workout suggestion routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::WorkoutSuggestion;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workout-suggestions", get(list_suggestions))
        .route("/api/workout-suggestions/generate", post(generate))
        .route("/api/workout-suggestions/{id}", get(get_suggestion))
        .route(
            "/api/workout-suggestions/{id}/mark_completed",
            post(mark_completed),
        )
}

/// Current user's suggestions, newest first.
async fn list_suggestions(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<Vec<WorkoutSuggestion>> {
    Json(state.suggestions.list_for_user(user.user_id))
}

/// Generate suggestions for the caller's current fitness level.
/// Every call creates fresh records.
async fn generate(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<WorkoutSuggestion>>> {
    Ok(Json(state.suggestions.generate(user.user_id)?))
}

async fn get_suggestion(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(suggestion_id): Path<u64>,
) -> Result<Json<WorkoutSuggestion>> {
    Ok(Json(
        state.suggestions.get_suggestion(user.user_id, suggestion_id)?,
    ))
}

/// Mark a suggestion as completed.
async fn mark_completed(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(suggestion_id): Path<u64>,
) -> Result<Json<WorkoutSuggestion>> {
    Ok(Json(
        state.suggestions.mark_completed(user.user_id, suggestion_id)?,
    ))
}
