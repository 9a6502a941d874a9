//! Request-boundary error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every handler failure is converted here into a status code and a JSON
//! `{ "message": ... }` body. Messages are fixed strings; internal detail
//! is logged, never returned.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// JSON body for every non-success response.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Missing or unreadable request input.
    #[error("{0}")]
    Validation(&'static str),
    /// Credentials did not match any directory entry.
    #[error("Invalid credentials")]
    Authentication,
    #[error("User not found")]
    NotFound,
    #[error("Server error")]
    Internal,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ApiMessage { message: self.to_string() })).into_response()
    }
}

/// Panic hook for `CatchPanicLayer`: log the payload, answer with a bare 500.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_owned());
    tracing::error!(%detail, "handler panicked");
    ApiError::Internal.into_response()
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
