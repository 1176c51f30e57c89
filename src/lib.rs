// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! OctoFit Tracker: fitness activity logging with points and teams
//!
//! This crate provides the backend API for logging workouts, crediting
//! points, aggregating team totals, and ranking users and teams.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod password;
pub mod routes;
pub mod seed;
pub mod services;

use config::Config;
use db::MemoryDb;
use services::{
    AchievementService, ActivityLedger, LeaderboardService, SuggestionService, TeamService,
};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemoryDb,
    pub ledger: ActivityLedger,
    pub teams: TeamService,
    pub suggestions: SuggestionService,
    pub achievements: AchievementService,
    pub leaderboard: LeaderboardService,
}

impl AppState {
    /// Wire up all services over a single store.
    pub fn new(config: Config, db: MemoryDb) -> Self {
        let achievements = AchievementService::new(db.clone());
        AppState {
            ledger: ActivityLedger::new(db.clone(), achievements.clone()),
            teams: TeamService::new(db.clone(), achievements.clone()),
            suggestions: SuggestionService::new(db.clone()),
            leaderboard: LeaderboardService::new(db.clone()),
            achievements,
            config,
            db,
        }
    }
}
