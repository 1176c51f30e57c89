//! Achievement routes (read-only).

use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

use crate::middleware::auth::AuthUser;
use crate::models::Achievement;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/achievements", get(list_achievements))
}

/// Current user's earned badges, newest first.
async fn list_achievements(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<Vec<Achievement>> {
    Json(state.db.achievements_for_user(user.user_id))
}
