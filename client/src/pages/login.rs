//! Login page flow: validate input, call the API, hand the user to the
//! session controller.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;

use crate::net::api::{self, LoginError};
use crate::net::types::User;
use crate::state::session::SessionController;
use crate::util::storage::SessionStore;

const MISSING_INPUT: &str = "Enter both username and password.";

/// Reject blank input. Values are passed on exactly as typed: the server
/// matches credentials without normalization.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(MISSING_INPUT);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Run the login flow against the server.
///
/// # Errors
///
/// Returns the user-facing message on validation or API failure; the
/// controller is left untouched in that case.
pub async fn submit_login<S: SessionStore>(
    controller: &mut SessionController<S>,
    username: &str,
    password: &str,
) -> Result<(), String> {
    submit_login_with(controller, username, password, |u, p| async move { api::login(&u, &p).await }).await
}

/// Login flow with the credential check supplied by the caller.
///
/// # Errors
///
/// Same as `submit_login`.
pub async fn submit_login_with<S, F, Fut>(
    controller: &mut SessionController<S>,
    username: &str,
    password: &str,
    login: F,
) -> Result<(), String>
where
    S: SessionStore,
    F: FnOnce(String, String) -> Fut,
    Fut: Future<Output = Result<User, LoginError>>,
{
    let (username, password) = validate_login_input(username, password).map_err(str::to_owned)?;
    match login(username.clone(), password).await {
        Ok(user) => {
            controller.login(user);
            Ok(())
        }
        Err(e) => {
            log::warn!("login failed for {username}: {e}");
            Err(e.to_string())
        }
    }
}
