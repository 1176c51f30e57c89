// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Public leaderboard routes.
//!
//! Both views are readable without authentication. Rankings are computed on
//! every request; team totals are whatever the last explicit recompute left
//! cached on each team.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::services::leaderboard::{LeaderboardEntry, TeamLeaderboardEntry, DEFAULT_LIMIT};
use crate::AppState;

const MAX_LIMIT: usize = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leaderboard", get(user_leaderboard))
        .route("/api/team-leaderboard", get(team_leaderboard))
}

#[derive(Deserialize)]
struct LeaderboardQuery {
    /// Max entries to return (default 50, capped at 100)
    limit: Option<usize>,
}

impl LeaderboardQuery {
    fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
    }
}

async fn user_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardQuery>,
) -> Json<Vec<LeaderboardEntry>> {
    Json(state.leaderboard.user_leaderboard(params.effective_limit()))
}

async fn team_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardQuery>,
) -> Json<Vec<TeamLeaderboardEntry>> {
    Json(state.leaderboard.team_leaderboard(params.effective_limit()))
}
