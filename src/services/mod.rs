// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Services module - business logic layer.

pub mod achievement;
pub mod leaderboard;
pub mod ledger;
pub mod points;
pub mod suggestion;
pub mod team;

pub use achievement::AchievementService;
pub use leaderboard::{LeaderboardEntry, LeaderboardService, TeamLeaderboardEntry};
pub use ledger::{ActivityDraft, ActivityFilter, ActivityLedger, ActivityStatistics};
pub use suggestion::SuggestionService;
pub use team::TeamService;
