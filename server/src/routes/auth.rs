//! Auth routes: credential login against the user directory.
//!
//! There is no server-side session. A successful login returns the public
//! user record and the client persists it.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::services::users::PublicUser;
use crate::state::AppState;

const MISSING_FIELDS: &str = "Username and password required";
const INVALID_BODY: &str = "Invalid request body";

/// `POST /api/auth/login` body. Fields are untyped JSON so a missing field
/// maps to a validation error and a non-string one to a failed match,
/// rather than either becoming a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

/// A field counts as supplied unless it is absent, `null`, `false`, `0` or
/// the empty string.
fn is_supplied(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Some(_) => true,
    }
}

/// Both fields supplied. `Ok(None)` when either is not a string: no
/// directory entry can match it.
pub(crate) fn credentials(req: &LoginRequest) -> Result<Option<(&str, &str)>, ApiError> {
    if !is_supplied(req.username.as_ref()) || !is_supplied(req.password.as_ref()) {
        return Err(ApiError::Validation(MISSING_FIELDS));
    }
    match (req.username.as_ref().and_then(Value::as_str), req.password.as_ref().and_then(Value::as_str)) {
        (Some(username), Some(password)) => Ok(Some((username, password))),
        _ => Ok(None),
    }
}

/// `POST /api/auth/login`: check credentials, return the public user.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "login body rejected");
        ApiError::Validation(INVALID_BODY)
    })?;
    let Some((username, password)) = credentials(&req)? else {
        tracing::warn!("login failed: non-string credential");
        return Err(ApiError::Authentication);
    };

    let Some(user) = state.users.authenticate(username, password) else {
        tracing::warn!(%username, "login failed");
        return Err(ApiError::Authentication);
    };

    tracing::info!(user_id = %user.id, %username, role = ?user.role, "login succeeded");
    Ok(Json(LoginResponse { message: "Login successful", user: user.to_public() }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
