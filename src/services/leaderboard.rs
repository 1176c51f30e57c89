// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Leaderboard ranking.
//!
//! Read-only views over current totals. Ranks are 1-based positions in the
//! truncated result; ties are not collapsed, so two users on equal points
//! get distinct consecutive ranks. Which of them comes first depends on the
//! store's stable ordering (points descending, then record ID ascending).
//! Activity and member counts are computed live at query time; the ranking
//! itself is never cached.

use crate::db::MemoryDb;
use serde::Serialize;

/// Default number of leaderboard entries returned.
pub const DEFAULT_LIMIT: usize = 50;

/// One row of the user leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub total_points: i64,
    pub activity_count: usize,
}

/// One row of the team leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct TeamLeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub total_points: i64,
    pub member_count: usize,
}

/// Produces ordered rankings of users and teams.
#[derive(Clone)]
pub struct LeaderboardService {
    db: MemoryDb,
}

impl LeaderboardService {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    /// Top users by running point total.
    pub fn user_leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        self.db
            .list_profiles()
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, profile)| {
                let username = self
                    .db
                    .get_user(profile.user_id)
                    .map(|u| u.username)
                    .unwrap_or_default();
                LeaderboardEntry {
                    rank: index + 1,
                    username,
                    total_points: profile.total_points,
                    activity_count: self.db.activity_count_for_user(profile.user_id),
                }
            })
            .collect()
    }

    /// Top teams by cached point total. Totals are as of each team's last
    /// recompute; this query does not refresh them.
    pub fn team_leaderboard(&self, limit: usize) -> Vec<TeamLeaderboardEntry> {
        self.db
            .list_teams()
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, team)| TeamLeaderboardEntry {
                rank: index + 1,
                name: team.name.clone(),
                total_points: team.total_points,
                member_count: team.member_count(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{AchievementService, TeamService};

    fn setup() -> (MemoryDb, LeaderboardService) {
        let db = MemoryDb::new();
        (db.clone(), LeaderboardService::new(db))
    }

    fn add_user_with_points(db: &MemoryDb, username: &str, points: i64) -> u64 {
        let user = db
            .create_user(
                username.to_string(),
                format!("{}@example.com", username),
                "Test".to_string(),
                "User".to_string(),
                "hash".to_string(),
                false,
            )
            .unwrap();
        if points > 0 {
            db.add_points(user.id, points).unwrap();
        }
        user.id
    }

    #[test]
    fn test_user_leaderboard_ordering_and_ranks() {
        let (db, service) = setup();
        add_user_with_points(&db, "low", 10);
        add_user_with_points(&db, "high", 300);
        add_user_with_points(&db, "mid", 150);

        let board = service.user_leaderboard(DEFAULT_LIMIT);
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].username, "high");
        assert_eq!(board[1].username, "mid");
        assert_eq!(board[2].username, "low");
        assert_eq!(
            board.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_limit_truncates() {
        let (db, service) = setup();
        for i in 0..5 {
            add_user_with_points(&db, &format!("user{}", i), i * 10);
        }
        let board = service.user_leaderboard(3);
        assert_eq!(board.len(), 3);
        assert_eq!(board.last().unwrap().rank, 3);
    }

    #[test]
    fn test_ties_get_distinct_consecutive_ranks() {
        let (db, service) = setup();
        let first = add_user_with_points(&db, "first", 100);
        let second = add_user_with_points(&db, "second", 100);

        let board = service.user_leaderboard(DEFAULT_LIMIT);
        assert_eq!(board[0].total_points, board[1].total_points);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[1].rank, 2);
        // Ties resolve in stable store order: lower user ID first
        assert!(first < second);
        assert_eq!(board[0].username, "first");
    }

    #[test]
    fn test_activity_count_is_live() {
        let (db, service) = setup();
        let user_id = add_user_with_points(&db, "alice", 0);

        assert_eq!(service.user_leaderboard(10)[0].activity_count, 0);

        let ledger = crate::services::ActivityLedger::new(
            db.clone(),
            AchievementService::new(db.clone()),
        );
        ledger
            .record_activity(
                user_id,
                crate::services::ActivityDraft {
                    activity_type: crate::models::ActivityType::Running,
                    duration_minutes: 30,
                    distance_km: None,
                    calories_burned: None,
                    intensity: crate::models::Intensity::Low,
                    notes: None,
                    date_performed: chrono::NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
                },
            )
            .unwrap();

        assert_eq!(service.user_leaderboard(10)[0].activity_count, 1);
    }

    #[test]
    fn test_team_leaderboard_uses_cached_totals() {
        let (db, service) = setup();
        let creator = add_user_with_points(&db, "alice", 100);
        let teams = TeamService::new(db.clone(), AchievementService::new(db.clone()));
        let team = teams
            .create_team(creator, "Morning Runners".to_string(), None)
            .unwrap();
        assert_eq!(team.total_points, 100);

        // Points earned after the last recompute are not visible yet
        db.add_points(creator, 50).unwrap();
        let board = service.team_leaderboard(DEFAULT_LIMIT);
        assert_eq!(board[0].total_points, 100);
        assert_eq!(board[0].member_count, 1);
    }
}
