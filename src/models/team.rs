// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Team model with a cached point aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Named group of users competing together.
///
/// `total_points` is a cached aggregate: it equals the sum of member profile
/// totals as of the last explicit recompute. It is refreshed on membership
/// changes, not on every member point change, so it can lag until the next
/// recompute. That staleness window is intentional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team ID (also used as document ID)
    pub id: u64,
    /// Unique team name
    pub name: String,
    pub description: Option<String>,
    /// Creating user, fixed for the team's lifetime. Always a member.
    pub creator_id: u64,
    /// Member user IDs, creator included
    pub member_ids: BTreeSet<u64>,
    /// Cached sum of member profile totals at last recompute
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn is_member(&self, user_id: u64) -> bool {
        self.member_ids.contains(&user_id)
    }

    pub fn member_count(&self) -> usize {
        self.member_ids.len()
    }
}
