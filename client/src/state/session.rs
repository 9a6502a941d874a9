//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two states, `Anonymous` and `Authenticated(user)`. The public user record
//! from the last successful login is mirrored to the store under `user` and
//! rehydrated on every page load. There is no expiry and no server-side
//! session to validate against.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::routes::{self, HOME_PATH, LOGIN_PATH, Page};
use crate::util::storage::SessionStore;

/// Storage key holding the serialized public user.
pub const SESSION_KEY: &str = "user";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

/// Owns the session and the current location.
#[derive(Debug)]
pub struct SessionController<S: SessionStore> {
    store: S,
    state: SessionState,
    location: String,
}

impl<S: SessionStore> SessionController<S> {
    /// Rehydrate from `store` at the page-load `path`. Unparseable data is
    /// removed and treated as anonymous. The path is kept either way;
    /// anonymous sessions render the login page wherever they are.
    #[must_use]
    pub fn restore(mut store: S, path: &str) -> Self {
        let state = match store.get_item(SESSION_KEY) {
            None => SessionState::Anonymous,
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    log::info!("restored session for {}", user.username);
                    SessionState::Authenticated(user)
                }
                Err(e) => {
                    log::warn!("discarding malformed persisted session: {e}");
                    store.remove_item(SESSION_KEY);
                    SessionState::Anonymous
                }
            },
        };
        let location = routes::normalize_path(path).to_owned();
        Self { store, state, location }
    }

    /// Accept a user returned by the login endpoint: persist it and go home.
    pub fn login(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => self.store.set_item(SESSION_KEY, &raw),
            Err(e) => log::error!("session serialization failed: {e}"),
        }
        log::info!("signed in as {} ({:?})", user.username, user.role);
        self.state = SessionState::Authenticated(user);
        self.location = HOME_PATH.to_owned();
    }

    /// Clear the persisted session and go to the login page.
    pub fn logout(&mut self) {
        self.store.remove_item(SESSION_KEY);
        self.state = SessionState::Anonymous;
        self.location = LOGIN_PATH.to_owned();
    }

    /// Move to `path` and return the page it renders.
    pub fn navigate(&mut self, path: &str) -> Page {
        routes::normalize_path(path).clone_into(&mut self.location);
        self.current_page()
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        routes::resolve(&self.location, &self.state)
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Hand back the store, e.g. to rebuild the controller after a reload.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
