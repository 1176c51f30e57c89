// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Activity ledger.
//!
//! Owns the lifecycle of activity records and the propagation of their
//! derived points to the owning profile:
//! 1. Validate the draft (duration > 0, distance ≥ 0)
//! 2. Compute points (always, on create and on edit)
//! 3. Apply the points delta to the profile (first persistence only)
//!
//! Step 3 deliberately does not run on edits. Recomputing a stored
//! activity's points on every save while also re-crediting the profile would
//! double-count; keeping the delta application on the create path alone is
//! what makes edits safe.

use crate::db::MemoryDb;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityType, Intensity};
use crate::services::points;
use crate::services::AchievementService;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// User-supplied fields for creating or editing an activity.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub activity_type: ActivityType,
    pub duration_minutes: u32,
    pub distance_km: Option<f64>,
    pub calories_burned: Option<u32>,
    pub intensity: Intensity,
    pub notes: Option<String>,
    pub date_performed: NaiveDate,
}

/// Optional filters for activity listings.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    pub activity_type: Option<ActivityType>,
    /// Only activities performed strictly after this date
    pub after: Option<NaiveDate>,
}

/// Per-user activity statistics.
#[derive(Debug, Serialize)]
pub struct ActivityStatistics {
    pub total_activities: usize,
    pub total_duration: u64,
    pub total_distance: f64,
    /// The profile's running total, which reflects all point sources,
    /// not a re-sum of activity points.
    pub total_points: i64,
    pub activity_breakdown: HashMap<String, u32>,
}

/// Records activities and keeps profile point totals consistent.
#[derive(Clone)]
pub struct ActivityLedger {
    db: MemoryDb,
    achievements: AchievementService,
}

impl ActivityLedger {
    pub fn new(db: MemoryDb, achievements: AchievementService) -> Self {
        Self { db, achievements }
    }

    fn validate(draft: &ActivityDraft) -> Result<()> {
        if draft.duration_minutes == 0 {
            return Err(AppError::BadRequest(
                "Duration must be greater than 0 minutes".to_string(),
            ));
        }
        if let Some(distance) = draft.distance_km {
            if distance < 0.0 {
                return Err(AppError::BadRequest(
                    "Distance cannot be negative".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Record a new activity for `user_id`, crediting its points to the
    /// profile and evaluating achievement thresholds.
    ///
    /// Re-invocation records a new session and credits points again; that is
    /// intentional, each call represents a separately logged workout.
    pub fn record_activity(&self, user_id: u64, draft: ActivityDraft) -> Result<Activity> {
        Self::validate(&draft)?;

        let earned = points::points_earned(draft.duration_minutes, draft.intensity);
        let activity = Activity {
            id: 0, // assigned by the store
            user_id,
            activity_type: draft.activity_type,
            duration_minutes: draft.duration_minutes,
            distance_km: draft.distance_km,
            calories_burned: draft.calories_burned,
            intensity: draft.intensity,
            notes: draft.notes,
            points_earned: earned,
            date_performed: draft.date_performed,
            created_at: chrono::Utc::now(),
        };

        let stored = self.db.insert_activity_and_add_points(activity)?;

        tracing::info!(
            user_id,
            activity_id = stored.id,
            activity_type = stored.activity_type.as_str(),
            points = stored.points_earned,
            "Activity recorded"
        );

        self.achievements.evaluate_after_activity(user_id);

        Ok(stored)
    }

    /// Edit an existing activity owned by `user_id`.
    ///
    /// Points are recomputed for the activity record itself, but no delta is
    /// applied to the profile total: only first persistence credits points.
    pub fn update_activity(
        &self,
        user_id: u64,
        activity_id: u64,
        draft: ActivityDraft,
    ) -> Result<Activity> {
        Self::validate(&draft)?;

        let existing = self.owned_activity(user_id, activity_id)?;

        let updated = Activity {
            id: existing.id,
            user_id: existing.user_id,
            activity_type: draft.activity_type,
            duration_minutes: draft.duration_minutes,
            distance_km: draft.distance_km,
            calories_burned: draft.calories_burned,
            intensity: draft.intensity,
            notes: draft.notes,
            points_earned: points::points_earned(draft.duration_minutes, draft.intensity),
            date_performed: draft.date_performed,
            created_at: existing.created_at,
        };

        self.db.update_activity(updated)
    }

    /// Delete an activity owned by `user_id`. The profile total keeps the
    /// points the activity earned when it was recorded.
    pub fn delete_activity(&self, user_id: u64, activity_id: u64) -> Result<()> {
        self.owned_activity(user_id, activity_id)?;
        self.db.delete_activity(activity_id)
    }

    /// Fetch one activity, visible only to its owner.
    pub fn get_activity(&self, user_id: u64, activity_id: u64) -> Result<Activity> {
        self.owned_activity(user_id, activity_id)
    }

    /// A user's activities, newest date first, creation time breaking ties.
    pub fn list_for_user(&self, user_id: u64, filter: &ActivityFilter) -> Vec<Activity> {
        self.db
            .activities_for_user(user_id)
            .into_iter()
            .filter(|a| {
                filter
                    .activity_type
                    .is_none_or(|t| a.activity_type == t)
            })
            .filter(|a| filter.after.is_none_or(|after| a.date_performed > after))
            .collect()
    }

    /// Aggregate statistics for a user's logged activities.
    pub fn statistics(&self, user_id: u64) -> Result<ActivityStatistics> {
        let activities = self.db.activities_for_user(user_id);
        let profile = self
            .db
            .get_profile(user_id)
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))?;

        let mut breakdown: HashMap<String, u32> = HashMap::new();
        for activity in &activities {
            *breakdown
                .entry(activity.activity_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        Ok(ActivityStatistics {
            total_activities: activities.len(),
            total_duration: activities.iter().map(|a| u64::from(a.duration_minutes)).sum(),
            total_distance: activities.iter().filter_map(|a| a.distance_km).sum(),
            total_points: profile.total_points,
            activity_breakdown: breakdown,
        })
    }

    fn owned_activity(&self, user_id: u64, activity_id: u64) -> Result<Activity> {
        // A foreign activity reads as not-found rather than forbidden, so the
        // response does not leak which IDs exist.
        self.db
            .get_activity(activity_id)
            .filter(|a| a.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", activity_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (MemoryDb, ActivityLedger, u64) {
        let db = MemoryDb::new();
        let user = db
            .create_user(
                "alice".to_string(),
                "alice@example.com".to_string(),
                "Alice".to_string(),
                "Walker".to_string(),
                "hash".to_string(),
                false,
            )
            .unwrap();
        let ledger = ActivityLedger::new(db.clone(), AchievementService::new(db.clone()));
        (db, ledger, user.id)
    }

    fn draft(duration: u32, intensity: Intensity) -> ActivityDraft {
        ActivityDraft {
            activity_type: ActivityType::Running,
            duration_minutes: duration,
            distance_km: None,
            calories_burned: None,
            intensity,
            notes: None,
            date_performed: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
        }
    }

    #[test]
    fn test_record_activity_credits_profile() {
        let (db, ledger, user_id) = setup();

        let a = ledger.record_activity(user_id, draft(45, Intensity::High)).unwrap();
        assert_eq!(a.points_earned, 90);

        let b = ledger
            .record_activity(user_id, draft(60, Intensity::Extreme))
            .unwrap();
        assert_eq!(b.points_earned, 150);

        assert_eq!(db.get_profile(user_id).unwrap().total_points, 240);
    }

    #[test]
    fn test_record_activity_rejects_zero_duration() {
        let (db, ledger, user_id) = setup();
        let err = ledger
            .record_activity(user_id, draft(0, Intensity::Low))
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        // No mutation happened
        assert_eq!(db.get_profile(user_id).unwrap().total_points, 0);
        assert!(db.activities_for_user(user_id).is_empty());
    }

    #[test]
    fn test_record_activity_rejects_negative_distance() {
        let (_, ledger, user_id) = setup();
        let mut d = draft(30, Intensity::Low);
        d.distance_km = Some(-1.0);
        let err = ledger.record_activity(user_id, d).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_edit_recomputes_points_without_recrediting() {
        let (db, ledger, user_id) = setup();
        let recorded = ledger
            .record_activity(user_id, draft(45, Intensity::High))
            .unwrap();
        assert_eq!(db.get_profile(user_id).unwrap().total_points, 90);

        let edited = ledger
            .update_activity(user_id, recorded.id, draft(60, Intensity::High))
            .unwrap();
        assert_eq!(edited.points_earned, 120);

        // The profile total still reflects only the original credit
        assert_eq!(db.get_profile(user_id).unwrap().total_points, 90);
    }

    #[test]
    fn test_cannot_touch_another_users_activity() {
        let (db, ledger, user_id) = setup();
        let other = db
            .create_user(
                "bob".to_string(),
                "bob@example.com".to_string(),
                "Bob".to_string(),
                "Runner".to_string(),
                "hash".to_string(),
                false,
            )
            .unwrap();
        let recorded = ledger
            .record_activity(user_id, draft(30, Intensity::Low))
            .unwrap();

        let err = ledger
            .update_activity(other.id, recorded.id, draft(30, Intensity::Low))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_list_orders_by_date_then_created() {
        let (_, ledger, user_id) = setup();
        let mut older = draft(30, Intensity::Low);
        older.date_performed = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let mut newer = draft(30, Intensity::Low);
        newer.date_performed = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

        let first = ledger.record_activity(user_id, older).unwrap();
        let second = ledger.record_activity(user_id, newer).unwrap();

        let listed = ledger.list_for_user(user_id, &ActivityFilter::default());
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[test]
    fn test_statistics_uses_profile_total() {
        let (db, ledger, user_id) = setup();
        let mut d = draft(45, Intensity::High);
        d.distance_km = Some(8.5);
        ledger.record_activity(user_id, d).unwrap();

        // Points from a non-activity source are still reflected
        db.add_points(user_id, 10).unwrap();

        let stats = ledger.statistics(user_id).unwrap();
        assert_eq!(stats.total_activities, 1);
        assert_eq!(stats.total_duration, 45);
        assert_eq!(stats.total_distance, 8.5);
        assert_eq!(stats.total_points, 100);
        assert_eq!(stats.activity_breakdown.get("running"), Some(&1));
    }

    #[test]
    fn test_filter_by_type_and_after_date() {
        let (_, ledger, user_id) = setup();
        let mut run = draft(30, Intensity::Low);
        run.date_performed = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let mut yoga = draft(30, Intensity::Low);
        yoga.activity_type = ActivityType::Yoga;
        yoga.date_performed = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();

        ledger.record_activity(user_id, run).unwrap();
        ledger.record_activity(user_id, yoga).unwrap();

        let only_yoga = ledger.list_for_user(
            user_id,
            &ActivityFilter {
                activity_type: Some(ActivityType::Yoga),
                after: None,
            },
        );
        assert_eq!(only_yoga.len(), 1);

        let recent = ledger.list_for_user(
            user_id,
            &ActivityFilter {
                activity_type: None,
                after: NaiveDate::from_ymd_opt(2026, 8, 15),
            },
        );
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].activity_type, ActivityType::Yoga);
    }
}
