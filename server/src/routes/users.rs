//! User profile routes.

use axum::extract::{Path, State};
use axum::response::Json;

use super::error::ApiError;
use crate::services::users::PublicUser;
use crate::state::AppState;

/// `GET /api/user/{id}`: public record for one user.
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<PublicUser>, ApiError> {
    state
        .users
        .get_by_id(&id)
        .map(|user| Json(user.to_public()))
        .ok_or_else(|| {
            tracing::debug!(%id, "user lookup missed");
            ApiError::NotFound
        })
}
