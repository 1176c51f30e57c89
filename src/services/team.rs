// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Team membership and the cached point aggregate.
//!
//! A team's `total_points` is recomputed from member profile totals at
//! explicit trigger points only: team creation, join, and leave. It is NOT
//! refreshed when a member logs an activity, so between a member's point
//! change and the next membership change the cached total lags the live sum.
//! That staleness window is an accepted trade-off (it avoids fanning a
//! recompute out to every team on every activity log) and is part of the
//! contract, not a bug.

use crate::db::MemoryDb;
use crate::error::{AppError, Result};
use crate::models::Team;
use crate::services::AchievementService;

/// Manages teams, membership, and total recomputation.
#[derive(Clone)]
pub struct TeamService {
    db: MemoryDb,
    achievements: AchievementService,
}

impl TeamService {
    pub fn new(db: MemoryDb, achievements: AchievementService) -> Self {
        Self { db, achievements }
    }

    /// Create a team. The creator becomes the first member and may never
    /// leave; the cached total is computed immediately.
    pub fn create_team(
        &self,
        creator_id: u64,
        name: String,
        description: Option<String>,
    ) -> Result<Team> {
        let team = self.db.create_team(name, description, creator_id)?;
        let team = self.recompute_total(team.id)?;

        tracing::info!(team_id = team.id, creator_id, name = %team.name, "Team created");

        self.achievements.evaluate_after_team_create(creator_id);
        Ok(team)
    }

    /// Add `user_id` to the team and refresh the cached total.
    pub fn join(&self, team_id: u64, user_id: u64) -> Result<Team> {
        let db = self.db.clone();
        let team = self.db.with_team_mut(team_id, |team| {
            if team.is_member(user_id) {
                return Err(AppError::Conflict(
                    "You are already a member of this team".to_string(),
                ));
            }
            team.member_ids.insert(user_id);
            team.total_points = sum_member_points(&db, team);
            Ok(team.clone())
        })?;

        tracing::info!(team_id, user_id, total = team.total_points, "User joined team");

        self.achievements.evaluate_after_team_join(user_id);
        Ok(team)
    }

    /// Remove `user_id` from the team and refresh the cached total.
    /// The creator can never leave; deleting the team is the only way out.
    pub fn leave(&self, team_id: u64, user_id: u64) -> Result<Team> {
        let db = self.db.clone();
        let team = self.db.with_team_mut(team_id, |team| {
            if !team.is_member(user_id) {
                return Err(AppError::Conflict(
                    "You are not a member of this team".to_string(),
                ));
            }
            if team.creator_id == user_id {
                return Err(AppError::Conflict(
                    "Team creator cannot leave the team. Delete the team instead".to_string(),
                ));
            }
            team.member_ids.remove(&user_id);
            team.total_points = sum_member_points(&db, team);
            Ok(team.clone())
        })?;

        tracing::info!(team_id, user_id, total = team.total_points, "User left team");
        Ok(team)
    }

    /// Recompute the cached total from current member profile totals.
    pub fn recompute_total(&self, team_id: u64) -> Result<Team> {
        let db = self.db.clone();
        self.db.with_team_mut(team_id, |team| {
            team.total_points = sum_member_points(&db, team);
            Ok(team.clone())
        })
    }

    /// Edit team metadata. Only the creator may do this.
    pub fn update_team(
        &self,
        team_id: u64,
        caller_id: u64,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Team> {
        let team = self.get_team(team_id)?;
        if team.creator_id != caller_id {
            return Err(AppError::Conflict(
                "Only the team creator can edit the team".to_string(),
            ));
        }
        if let Some(new_name) = &name {
            if let Some(existing) = self.db.get_team_by_name(new_name) {
                if existing.id != team_id {
                    return Err(AppError::Conflict(format!(
                        "Team '{}' already exists",
                        new_name
                    )));
                }
            }
        }
        self.db.with_team_mut(team_id, |team| {
            if let Some(new_name) = name {
                team.name = new_name;
            }
            if description.is_some() {
                team.description = description;
            }
            Ok(team.clone())
        })
    }

    /// Delete a team. Only the creator may do this.
    pub fn delete_team(&self, team_id: u64, caller_id: u64) -> Result<()> {
        let team = self.get_team(team_id)?;
        if team.creator_id != caller_id {
            return Err(AppError::Conflict(
                "Only the team creator can delete the team".to_string(),
            ));
        }
        self.db.delete_team(team_id)?;
        tracing::info!(team_id, caller_id, "Team deleted");
        Ok(())
    }

    pub fn get_team(&self, team_id: u64) -> Result<Team> {
        self.db
            .get_team(team_id)
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))
    }

    pub fn list_teams(&self) -> Vec<Team> {
        self.db.list_teams()
    }

    pub fn teams_for_member(&self, user_id: u64) -> Vec<Team> {
        self.db.teams_for_member(user_id)
    }
}

/// Sum of current member profile totals. Members without a profile (which
/// the registration invariant rules out) contribute zero.
fn sum_member_points(db: &MemoryDb, team: &Team) -> i64 {
    team.member_ids
        .iter()
        .filter_map(|&member_id| db.get_profile(member_id))
        .map(|profile| profile.total_points)
        .sum()
}
