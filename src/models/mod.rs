// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Data models for the application.

pub mod achievement;
pub mod activity;
pub mod suggestion;
pub mod team;
pub mod user;

pub use achievement::{Achievement, BadgeType};
pub use activity::{Activity, ActivityType, Intensity};
pub use suggestion::WorkoutSuggestion;
pub use team::Team;
pub use user::{FitnessLevel, Profile, User};
