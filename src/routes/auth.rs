// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! Account registration and session routes.
//!
//! Registration constructs the user and its fitness profile in one store
//! operation, so the 1:1 pairing holds from the start instead of depending
//! on a side effect firing later.

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser, SESSION_COOKIE};
use crate::models::User;
use crate::password;
use crate::AppState;

/// Public auth routes (no session required).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}

/// Session routes mounted behind the auth middleware.
pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/user", get(current_user))
}

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 150))]
    #[serde(default)]
    pub first_name: String,
    #[validate(length(max = 150))]
    #[serde(default)]
    pub last_name: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account fields safe to expose.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_staff: user.is_staff,
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(30))
        .build()
}

/// Create an account with its paired fitness profile, then start a session.
async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let password_hash = password::hash_password(&payload.password)?;
    let user = state.db.create_user(
        payload.username,
        payload.email,
        payload.first_name,
        payload.last_name,
        password_hash,
        false,
    )?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let token = create_jwt(user.id, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    Ok((
        jar.add(session_cookie(token.clone())),
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// Verify credentials and start a session.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>)> {
    let user = state
        .db
        .get_user_by_username(&payload.username)
        // Same error for unknown user and bad password
        .ok_or(AppError::Unauthorized)?;

    if !password::verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let token = create_jwt(user.id, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok((
        jar.add(session_cookie(token.clone())),
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// Clear the session cookie.
async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    (
        jar.remove(Cookie::build(SESSION_COOKIE).path("/").build()),
        Json(serde_json::json!({ "detail": "Logged out" })),
    )
}

/// Current authenticated account.
async fn current_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let account = state
        .db
        .get_user(user.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;
    Ok(Json(account.into()))
}
