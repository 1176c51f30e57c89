// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Team routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Team;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/teams", get(list_teams).post(create_team))
        .route("/api/teams/my_teams", get(my_teams))
        .route(
            "/api/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route("/api/teams/{id}/join", post(join_team))
        .route("/api/teams/{id}/leave", post(leave_team))
}

#[derive(Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Team with member details resolved for display.
#[derive(Serialize)]
pub struct TeamResponse {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: u64,
    pub creator_username: String,
    pub members: Vec<TeamMemberResponse>,
    pub member_count: usize,
    pub total_points: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct TeamMemberResponse {
    pub id: u64,
    pub username: String,
    pub total_points: i64,
}

fn team_response(state: &AppState, team: Team) -> TeamResponse {
    let creator_username = state
        .db
        .get_user(team.creator_id)
        .map(|u| u.username)
        .unwrap_or_default();

    let members: Vec<TeamMemberResponse> = team
        .member_ids
        .iter()
        .filter_map(|&member_id| {
            let user = state.db.get_user(member_id)?;
            let profile = state.db.get_profile(member_id)?;
            Some(TeamMemberResponse {
                id: member_id,
                username: user.username,
                total_points: profile.total_points,
            })
        })
        .collect();

    TeamResponse {
        id: team.id,
        name: team.name,
        description: team.description,
        creator_id: team.creator_id,
        creator_username,
        member_count: members.len(),
        members,
        total_points: team.total_points,
        created_at: team.created_at,
        updated_at: team.updated_at,
    }
}

async fn list_teams(
    State(state): State<Arc<AppState>>,
    Extension(_user): Extension<AuthUser>,
) -> Json<Vec<TeamResponse>> {
    let teams = state
        .teams
        .list_teams()
        .into_iter()
        .map(|t| team_response(&state, t))
        .collect();
    Json(teams)
}

/// Create a team; the caller becomes creator and first member.
async fn create_team(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<Json<TeamResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let team = state
        .teams
        .create_team(user.user_id, payload.name, payload.description)?;
    Ok(Json(team_response(&state, team)))
}

async fn get_team(
    State(state): State<Arc<AppState>>,
    Extension(_user): Extension<AuthUser>,
    Path(team_id): Path<u64>,
) -> Result<Json<TeamResponse>> {
    let team = state.teams.get_team(team_id)?;
    Ok(Json(team_response(&state, team)))
}

async fn update_team(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(team_id): Path<u64>,
    Json(payload): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let team = state
        .teams
        .update_team(team_id, user.user_id, payload.name, payload.description)?;
    Ok(Json(team_response(&state, team)))
}

async fn delete_team(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(team_id): Path<u64>,
) -> Result<Json<serde_json::Value>> {
    state.teams.delete_team(team_id, user.user_id)?;
    Ok(Json(serde_json::json!({ "detail": "Team deleted" })))
}

async fn join_team(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(team_id): Path<u64>,
) -> Result<Json<serde_json::Value>> {
    state.teams.join(team_id, user.user_id)?;
    Ok(Json(
        serde_json::json!({ "detail": "Successfully joined the team" }),
    ))
}

async fn leave_team(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(team_id): Path<u64>,
) -> Result<Json<serde_json::Value>> {
    state.teams.leave(team_id, user.user_id)?;
    Ok(Json(
        serde_json::json!({ "detail": "Successfully left the team" }),
    ))
}

/// Teams the current user belongs to.
async fn my_teams(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<Vec<TeamResponse>> {
    let teams = state
        .teams
        .teams_for_member(user.user_id)
        .into_iter()
        .map(|t| team_response(&state, t))
        .collect();
    Json(teams)
}
