// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Concurrent in-process record store with typed operations.
//!
//! Provides high-level operations for:
//! - Users and their paired fitness profiles
//! - Activities (with atomic point propagation)
//! - Teams (with set-membership updates)
//! - Workout suggestions and achievements
//!
//! Each record lives in a `DashMap` keyed by an opaque u64 ID, so single-record
//! updates are atomic under the map's per-entry locking. Cross-record
//! operations that must not race (registration, team creation, badge awards)
//! serialize on a dedicated mutex each.

use crate::error::AppError;
use crate::models::{
    Achievement, Activity, ActivityType, BadgeType, Profile, Team, User, WorkoutSuggestion,
};
use chrono::NaiveDate;
use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Shared record store. Cheap to clone; all clones see the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: AtomicU64,
    users: DashMap<u64, User>,
    profiles: DashMap<u64, Profile>,
    activities: DashMap<u64, Activity>,
    teams: DashMap<u64, Team>,
    suggestions: DashMap<u64, WorkoutSuggestion>,
    achievements: DashMap<u64, Achievement>,
    // Serializes username-uniqueness check + insert
    registration_lock: Mutex<()>,
    // Serializes team-name-uniqueness check + insert
    team_create_lock: Mutex<()>,
    // Serializes (user, badge) existence check + insert
    award_lock: Mutex<()>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next opaque record ID.
    fn next_id(&self) -> u64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Create a user account together with its fitness profile.
    ///
    /// The profile is constructed here, inside the same serialized section as
    /// the account insert, so the 1:1 user/profile invariant holds from the
    /// first moment the user is visible.
    pub fn create_user(
        &self,
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        password_hash: String,
        is_staff: bool,
    ) -> Result<User, AppError> {
        let _guard = self
            .inner
            .registration_lock
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        if self.get_user_by_username(&username).is_some() {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let now = chrono::Utc::now();
        let id = self.next_id();
        let user = User {
            id,
            username,
            email,
            first_name,
            last_name,
            password_hash,
            is_staff,
            created_at: now,
        };

        self.inner.users.insert(id, user.clone());
        self.inner.profiles.insert(id, Profile::new(id, now));

        Ok(user)
    }

    pub fn get_user(&self, user_id: u64) -> Option<User> {
        self.inner.users.get(&user_id).map(|u| u.clone())
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.clone())
    }

    // ─── Profile Operations ──────────────────────────────────────

    pub fn get_profile(&self, user_id: u64) -> Option<Profile> {
        self.inner.profiles.get(&user_id).map(|p| p.clone())
    }

    /// All profiles, ordered by total points descending. Ties break on user
    /// ID ascending, which is the stable order leaderboard ranks depend on.
    pub fn list_profiles(&self) -> Vec<Profile> {
        let mut profiles: Vec<Profile> = self.inner.profiles.iter().map(|p| p.clone()).collect();
        profiles.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then(a.user_id.cmp(&b.user_id))
        });
        profiles
    }

    /// Apply a metadata edit to a profile under the entry lock.
    /// The closure must not touch `total_points`; point changes go through
    /// [`MemoryDb::add_points`].
    pub fn update_profile<F>(&self, user_id: u64, edit: F) -> Result<Profile, AppError>
    where
        F: FnOnce(&mut Profile),
    {
        let mut entry = self
            .inner
            .profiles
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))?;
        edit(&mut entry);
        entry.updated_at = chrono::Utc::now();
        Ok(entry.clone())
    }

    /// Atomically add points to a profile's running total.
    /// Returns the new total.
    pub fn add_points(&self, user_id: u64, delta: i64) -> Result<i64, AppError> {
        let mut entry = self
            .inner
            .profiles
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))?;
        entry.total_points += delta;
        entry.updated_at = chrono::Utc::now();
        Ok(entry.total_points)
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Insert a freshly recorded activity and credit its points to the owning
    /// profile in one step.
    ///
    /// The profile entry lock is held across both writes, so a concurrent
    /// reader never sees the points credited twice or the profile total
    /// updated by two recordings interleaved. This runs only on first
    /// persistence; edits go through [`MemoryDb::update_activity`], which
    /// never touches the profile total.
    pub fn insert_activity_and_add_points(
        &self,
        mut activity: Activity,
    ) -> Result<Activity, AppError> {
        let mut profile = self.inner.profiles.get_mut(&activity.user_id).ok_or_else(|| {
            AppError::NotFound(format!("Profile for user {} not found", activity.user_id))
        })?;

        activity.id = self.next_id();
        self.inner.activities.insert(activity.id, activity.clone());

        profile.total_points += activity.points_earned;
        profile.updated_at = chrono::Utc::now();

        Ok(activity)
    }

    pub fn get_activity(&self, activity_id: u64) -> Option<Activity> {
        self.inner.activities.get(&activity_id).map(|a| a.clone())
    }

    /// Replace a stored activity. Does not touch the owner's point total.
    pub fn update_activity(&self, activity: Activity) -> Result<Activity, AppError> {
        let mut entry = self
            .inner
            .activities
            .get_mut(&activity.id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", activity.id)))?;
        *entry = activity.clone();
        Ok(activity)
    }

    pub fn delete_activity(&self, activity_id: u64) -> Result<(), AppError> {
        self.inner
            .activities
            .remove(&activity_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", activity_id)))
    }

    /// A user's activities, most recent date first, then most recently
    /// created first within the same date.
    pub fn activities_for_user(&self, user_id: u64) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .inner
            .activities
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.clone())
            .collect();
        activities.sort_by(|a, b| {
            b.date_performed
                .cmp(&a.date_performed)
                .then(b.created_at.cmp(&a.created_at))
        });
        activities
    }

    pub fn activity_count_for_user(&self, user_id: u64) -> usize {
        self.inner
            .activities
            .iter()
            .filter(|a| a.user_id == user_id)
            .count()
    }

    /// Lookup by the (user, type, date) natural key the sample loader uses
    /// for idempotent seeding.
    pub fn find_activity_by_natural_key(
        &self,
        user_id: u64,
        activity_type: ActivityType,
        date_performed: NaiveDate,
    ) -> Option<Activity> {
        self.inner
            .activities
            .iter()
            .find(|a| {
                a.user_id == user_id
                    && a.activity_type == activity_type
                    && a.date_performed == date_performed
            })
            .map(|a| a.clone())
    }

    // ─── Team Operations ─────────────────────────────────────────

    /// Create a team. The creator is added as the first member; the caller is
    /// expected to recompute the total immediately after.
    pub fn create_team(
        &self,
        name: String,
        description: Option<String>,
        creator_id: u64,
    ) -> Result<Team, AppError> {
        let _guard = self
            .inner
            .team_create_lock
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        if self.get_team_by_name(&name).is_some() {
            return Err(AppError::Conflict(format!(
                "Team '{}' already exists",
                name
            )));
        }

        let now = chrono::Utc::now();
        let id = self.next_id();
        let team = Team {
            id,
            name,
            description,
            creator_id,
            member_ids: BTreeSet::from([creator_id]),
            total_points: 0,
            created_at: now,
            updated_at: now,
        };

        self.inner.teams.insert(id, team.clone());
        Ok(team)
    }

    pub fn get_team(&self, team_id: u64) -> Option<Team> {
        self.inner.teams.get(&team_id).map(|t| t.clone())
    }

    pub fn get_team_by_name(&self, name: &str) -> Option<Team> {
        self.inner
            .teams
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.clone())
    }

    /// All teams, ordered by cached total points descending, ties broken by
    /// team ID ascending (the stable order team leaderboard ranks use).
    pub fn list_teams(&self) -> Vec<Team> {
        let mut teams: Vec<Team> = self.inner.teams.iter().map(|t| t.clone()).collect();
        teams.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then(a.id.cmp(&b.id))
        });
        teams
    }

    pub fn teams_for_member(&self, user_id: u64) -> Vec<Team> {
        let mut teams: Vec<Team> = self
            .inner
            .teams
            .iter()
            .filter(|t| t.is_member(user_id))
            .map(|t| t.clone())
            .collect();
        teams.sort_by_key(|t| t.id);
        teams
    }

    /// Apply a mutation to a team under its entry lock.
    ///
    /// Membership changes and total recomputation go through here so that two
    /// concurrent joins (or a join racing a recompute) serialize on the team
    /// record. The closure may read profiles but must not lock other teams.
    pub fn with_team_mut<F, R>(&self, team_id: u64, mutate: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut Team) -> Result<R, AppError>,
    {
        let mut entry = self
            .inner
            .teams
            .get_mut(&team_id)
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;
        let result = mutate(&mut entry)?;
        entry.updated_at = chrono::Utc::now();
        Ok(result)
    }

    pub fn delete_team(&self, team_id: u64) -> Result<(), AppError> {
        self.inner
            .teams
            .remove(&team_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))
    }

    // ─── Suggestion Operations ───────────────────────────────────

    pub fn insert_suggestion(&self, mut suggestion: WorkoutSuggestion) -> WorkoutSuggestion {
        suggestion.id = self.next_id();
        self.inner
            .suggestions
            .insert(suggestion.id, suggestion.clone());
        suggestion
    }

    pub fn get_suggestion(&self, suggestion_id: u64) -> Option<WorkoutSuggestion> {
        self.inner
            .suggestions
            .get(&suggestion_id)
            .map(|s| s.clone())
    }

    /// Apply a mutation to a suggestion under its entry lock.
    pub fn with_suggestion_mut<F>(
        &self,
        suggestion_id: u64,
        mutate: F,
    ) -> Result<WorkoutSuggestion, AppError>
    where
        F: FnOnce(&mut WorkoutSuggestion),
    {
        let mut entry = self.inner.suggestions.get_mut(&suggestion_id).ok_or_else(|| {
            AppError::NotFound(format!("Workout suggestion {} not found", suggestion_id))
        })?;
        mutate(&mut entry);
        Ok(entry.clone())
    }

    /// A user's suggestions, most recently created first.
    pub fn suggestions_for_user(&self, user_id: u64) -> Vec<WorkoutSuggestion> {
        let mut suggestions: Vec<WorkoutSuggestion> = self
            .inner
            .suggestions
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.clone())
            .collect();
        suggestions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        suggestions
    }

    pub fn find_suggestion_by_title(&self, user_id: u64, title: &str) -> Option<WorkoutSuggestion> {
        self.inner
            .suggestions
            .iter()
            .find(|s| s.user_id == user_id && s.title == title)
            .map(|s| s.clone())
    }

    // ─── Achievement Operations ──────────────────────────────────

    /// Insert a badge unless the user already holds it.
    ///
    /// Returns the new achievement, or `None` if one already existed for
    /// (user, badge type). The check and insert run under the award lock, so
    /// the uniqueness invariant holds even when two triggers fire at once.
    pub fn try_insert_achievement(
        &self,
        user_id: u64,
        badge_type: BadgeType,
    ) -> Option<Achievement> {
        let _guard = self
            .inner
            .award_lock
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        let already_earned = self
            .inner
            .achievements
            .iter()
            .any(|a| a.user_id == user_id && a.badge_type == badge_type);
        if already_earned {
            return None;
        }

        let achievement = Achievement {
            id: self.next_id(),
            user_id,
            title: badge_type.title().to_string(),
            description: badge_type.description().to_string(),
            badge_type,
            earned_at: chrono::Utc::now(),
        };
        self.inner
            .achievements
            .insert(achievement.id, achievement.clone());
        Some(achievement)
    }

    /// A user's achievements, most recently earned first.
    pub fn achievements_for_user(&self, user_id: u64) -> Vec<Achievement> {
        let mut achievements: Vec<Achievement> = self
            .inner
            .achievements
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.clone())
            .collect();
        achievements.sort_by(|a, b| b.earned_at.cmp(&a.earned_at).then(b.id.cmp(&a.id)));
        achievements
    }
}
