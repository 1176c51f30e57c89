// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Achievement evaluation.
//!
//! Badges are monotonic milestones: once earned they are never revoked, and
//! awarding the same badge twice leaves exactly one record. The award
//! primitive is idempotent; the evaluation helpers here are the trigger
//! points wired in after activity recording and team membership changes.

use crate::db::MemoryDb;
use crate::models::{Achievement, BadgeType};
use chrono::NaiveDate;

/// Evaluates badge thresholds and awards achievements.
#[derive(Clone)]
pub struct AchievementService {
    db: MemoryDb,
}

impl AchievementService {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    /// Award a badge unless the user already holds it.
    ///
    /// Returns the achievement if newly awarded, `None` if it already
    /// existed. Safe to call from any trigger, any number of times.
    pub fn award_if_eligible(&self, user_id: u64, badge_type: BadgeType) -> Option<Achievement> {
        let awarded = self.db.try_insert_achievement(user_id, badge_type);
        if let Some(achievement) = &awarded {
            tracing::info!(
                user_id,
                badge = achievement.badge_type.title(),
                "Achievement awarded"
            );
        }
        awarded
    }

    /// Evaluate all activity-driven thresholds for a user.
    ///
    /// Called after an activity is recorded. Looks at the profile's running
    /// point total (which reflects all point sources), cumulative distance,
    /// activity count, and the consecutive-day streak.
    pub fn evaluate_after_activity(&self, user_id: u64) {
        let activities = self.db.activities_for_user(user_id);

        if !activities.is_empty() {
            self.award_if_eligible(user_id, BadgeType::FirstActivity);
        }

        if let Some(profile) = self.db.get_profile(user_id) {
            if profile.total_points >= 100 {
                self.award_if_eligible(user_id, BadgeType::Points100);
            }
            if profile.total_points >= 500 {
                self.award_if_eligible(user_id, BadgeType::Points500);
            }
            if profile.total_points >= 1000 {
                self.award_if_eligible(user_id, BadgeType::Points1000);
            }
        }

        let total_distance_km: f64 = activities.iter().filter_map(|a| a.distance_km).sum();
        if total_distance_km >= 10.0 {
            self.award_if_eligible(user_id, BadgeType::Distance10k);
        }
        if total_distance_km >= 50.0 {
            self.award_if_eligible(user_id, BadgeType::Distance50k);
        }

        let dates: Vec<NaiveDate> = activities.iter().map(|a| a.date_performed).collect();
        let streak = longest_current_streak(&dates);
        if streak >= 7 {
            self.award_if_eligible(user_id, BadgeType::Streak7);
        }
        if streak >= 30 {
            self.award_if_eligible(user_id, BadgeType::Streak30);
        }
    }

    /// Trigger point for joining a team.
    pub fn evaluate_after_team_join(&self, user_id: u64) {
        self.award_if_eligible(user_id, BadgeType::TeamMember);
    }

    /// Trigger point for creating a team.
    pub fn evaluate_after_team_create(&self, user_id: u64) {
        // Creating a team makes the user both leader and member
        self.award_if_eligible(user_id, BadgeType::TeamLeader);
        self.award_if_eligible(user_id, BadgeType::TeamMember);
    }
}

/// Length in days of the consecutive-day run ending at the most recent
/// activity date. Duplicate dates count once.
fn longest_current_streak(dates: &[NaiveDate]) -> u32 {
    let mut distinct: Vec<NaiveDate> = dates.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let Some(&latest) = distinct.last() else {
        return 0;
    };

    let mut streak = 1u32;
    let mut expected = latest;
    for &date in distinct.iter().rev().skip(1) {
        expected = expected.pred_opt().unwrap_or(expected);
        if date == expected {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_streak_empty() {
        assert_eq!(longest_current_streak(&[]), 0);
    }

    #[test]
    fn test_streak_single_day() {
        assert_eq!(longest_current_streak(&[d(2026, 8, 1)]), 1);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let dates = vec![d(2026, 8, 1), d(2026, 8, 2), d(2026, 8, 3)];
        assert_eq!(longest_current_streak(&dates), 3);
    }

    #[test]
    fn test_streak_breaks_on_gap() {
        // Gap between the 3rd and the 5th: only 5th..=6th count
        let dates = vec![d(2026, 8, 2), d(2026, 8, 3), d(2026, 8, 5), d(2026, 8, 6)];
        assert_eq!(longest_current_streak(&dates), 2);
    }

    #[test]
    fn test_streak_dedups_same_day() {
        let dates = vec![d(2026, 8, 1), d(2026, 8, 1), d(2026, 8, 2)];
        assert_eq!(longest_current_streak(&dates), 2);
    }

    #[test]
    fn test_streak_spans_month_boundary() {
        let dates = vec![d(2026, 7, 31), d(2026, 8, 1)];
        assert_eq!(longest_current_streak(&dates), 2);
    }
}
