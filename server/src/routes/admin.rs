//! Administration routes.
//!
//! `GET /api/admin/users` carries no auth check: role gating exists only in
//! the client's navigation.

use axum::extract::State;
use axum::response::Json;

use crate::services::users::PublicUser;
use crate::state::AppState;

/// `GET /api/admin/users`: every user, credentials stripped.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<PublicUser>> {
    let users: Vec<PublicUser> = state.users.list_all().iter().map(PublicUser::from).collect();
    tracing::debug!(count = users.len(), "listing users");
    Json(users)
}
