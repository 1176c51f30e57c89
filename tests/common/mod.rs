// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

use octofit_tracker::config::Config;
use octofit_tracker::db::MemoryDb;
use octofit_tracker::middleware::auth::create_jwt;
use octofit_tracker::models::User;
use octofit_tracker::routes::create_router;
use octofit_tracker::AppState;
use std::sync::Arc;

/// Create a test app over an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(), MemoryDb::new()));
    (create_router(state.clone()), state)
}

/// Create a user directly in the store and return it with a session token.
///
/// The password hash is a placeholder; tests that exercise login go through
/// the register endpoint instead.
#[allow(dead_code)]
pub fn create_test_user(state: &AppState, username: &str) -> (User, String) {
    let user = state
        .db
        .create_user(
            username.to_string(),
            format!("{}@example.com", username),
            String::new(),
            String::new(),
            "unusable-hash".to_string(),
            false,
        )
        .expect("test user creation failed");

    let token =
        create_jwt(user.id, &state.config.jwt_signing_key).expect("test JWT creation failed");
    (user, token)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}
