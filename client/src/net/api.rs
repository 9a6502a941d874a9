//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning errors/`None`, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Requests are fire-and-forget: no retry, no timeout, no cancellation.
//! Transport failures and unexpected statuses collapse to one generic
//! message so callers can surface it without inspecting causes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::{ApiMessage, LoginRequest, LoginResponse};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Server rejected the request shape (400).
    #[error("{0}")]
    Validation(String),
    /// No user matched (401).
    #[error("{0}")]
    InvalidCredentials(String),
    /// Anything else, including transport failures.
    #[error("Login failed. Please try again.")]
    Unexpected,
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/api/user/{user_id}")
}

/// Map a non-success login status to the error surfaced to the user.
#[must_use]
pub fn login_error_for_status(status: u16, message: Option<String>) -> LoginError {
    match status {
        400 => LoginError::Validation(message.unwrap_or_else(|| "Username and password required".to_owned())),
        401 => LoginError::InvalidCredentials(message.unwrap_or_else(|| "Invalid credentials".to_owned())),
        _ => LoginError::Unexpected,
    }
}

/// Submit credentials to `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the mapped `LoginError` for any non-success outcome.
pub async fn login(username: &str, password: &str) -> Result<User, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { username, password })
            .map_err(|e| {
                log::error!("login request build failed: {e}");
                LoginError::Unexpected
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("login request failed: {e}");
                LoginError::Unexpected
            })?;
        if !resp.ok() {
            let message = resp.json::<ApiMessage>().await.ok().map(|m| m.message);
            return Err(login_error_for_status(resp.status(), message));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| {
            log::error!("login response parse failed: {e}");
            LoginError::Unexpected
        })?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(LoginError::Unexpected)
    }
}

/// Fetch one user's public record from `/api/user/{user_id}`.
/// Returns `None` on any failure or outside the browser.
pub async fn fetch_user(user_id: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}
