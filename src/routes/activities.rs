// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Activity logging routes.
//!
//! Activities are always attributed to the authenticated caller;
//! `points_earned` is derived server-side and never accepted from input.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Activity, ActivityType, Intensity};
use crate::services::{ActivityDraft, ActivityFilter, ActivityStatistics};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(create_activity))
        .route("/api/activities/my_activities", get(list_activities))
        .route("/api/activities/statistics", get(statistics))
        .route(
            "/api/activities/{id}",
            get(get_activity)
                .put(update_activity)
                .delete(delete_activity),
        )
}

#[derive(Deserialize, Validate)]
pub struct ActivityRequest {
    pub activity_type: ActivityType,
    /// Duration in minutes
    #[validate(range(min = 1))]
    pub duration_minutes: u32,
    /// Distance in km
    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
    pub calories_burned: Option<u32>,
    pub intensity: Intensity,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    pub date_performed: NaiveDate,
}

impl ActivityRequest {
    fn into_draft(self) -> ActivityDraft {
        ActivityDraft {
            activity_type: self.activity_type,
            duration_minutes: self.duration_minutes,
            distance_km: self.distance_km,
            calories_burned: self.calories_burned,
            intensity: self.intensity,
            notes: self.notes,
            date_performed: self.date_performed,
        }
    }
}

#[derive(Deserialize, Default)]
struct ActivitiesQuery {
    /// Filter by activity type
    activity_type: Option<ActivityType>,
    /// Only activities performed after this date (YYYY-MM-DD)
    after: Option<NaiveDate>,
}

/// Log a workout. Points are computed and credited to the profile here;
/// each call records a separate session.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ActivityRequest>,
) -> Result<Json<Activity>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let activity = state
        .ledger
        .record_activity(user.user_id, payload.into_draft())?;
    Ok(Json(activity))
}

/// Current user's activities, newest first.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<Vec<Activity>>> {
    let filter = ActivityFilter {
        activity_type: params.activity_type,
        after: params.after,
    };
    Ok(Json(state.ledger.list_for_user(user.user_id, &filter)))
}

/// Aggregate statistics for the current user.
async fn statistics(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ActivityStatistics>> {
    Ok(Json(state.ledger.statistics(user.user_id)?))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(activity_id): Path<u64>,
) -> Result<Json<Activity>> {
    Ok(Json(state.ledger.get_activity(user.user_id, activity_id)?))
}

/// Edit an activity. Its points field is recomputed; the profile total is
/// not credited again.
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(activity_id): Path<u64>,
    Json(payload): Json<ActivityRequest>,
) -> Result<Json<Activity>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let activity =
        state
            .ledger
            .update_activity(user.user_id, activity_id, payload.into_draft())?;
    Ok(Json(activity))
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(activity_id): Path<u64>,
) -> Result<Json<serde_json::Value>> {
    state.ledger.delete_activity(user.user_id, activity_id)?;
    Ok(Json(serde_json::json!({ "detail": "Activity deleted" })))
}
