// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Achievement badges earned at fitness milestones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed catalog of badge milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeType {
    FirstActivity,
    #[serde(rename = "streak_7")]
    Streak7,
    #[serde(rename = "streak_30")]
    Streak30,
    #[serde(rename = "points_100")]
    Points100,
    #[serde(rename = "points_500")]
    Points500,
    #[serde(rename = "points_1000")]
    Points1000,
    #[serde(rename = "distance_10k")]
    Distance10k,
    #[serde(rename = "distance_50k")]
    Distance50k,
    TeamMember,
    TeamLeader,
}

impl BadgeType {
    /// Display title for the badge.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstActivity => "First Activity",
            Self::Streak7 => "7 Day Streak",
            Self::Streak30 => "30 Day Streak",
            Self::Points100 => "100 Points",
            Self::Points500 => "500 Points",
            Self::Points1000 => "1000 Points",
            Self::Distance10k => "10km Distance",
            Self::Distance50k => "50km Distance",
            Self::TeamMember => "Team Member",
            Self::TeamLeader => "Team Leader",
        }
    }

    /// Description shown alongside the badge.
    pub fn description(&self) -> &'static str {
        match self {
            Self::FirstActivity => "Completed your first workout",
            Self::Streak7 => "Worked out 7 days in a row",
            Self::Streak30 => "Worked out 30 days in a row",
            Self::Points100 => "Earned 100 fitness points",
            Self::Points500 => "Earned 500 fitness points",
            Self::Points1000 => "Earned 1000 fitness points",
            Self::Distance10k => "Covered 10km across all activities",
            Self::Distance50k => "Covered 50km across all activities",
            Self::TeamMember => "Joined a team",
            Self::TeamLeader => "Created a team",
        }
    }
}

/// An earned badge. At most one exists per (user, badge type); awarding is
/// idempotent. Never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Achievement ID (also used as document ID)
    pub id: u64,
    /// Earning user ID
    pub user_id: u64,
    pub title: String,
    pub description: String,
    pub badge_type: BadgeType,
    pub earned_at: DateTime<Utc>,
}
