// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! HTTP middleware.

pub mod auth;
pub mod security;
