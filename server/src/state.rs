//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the user directory, which is read-only after startup, so handlers
//! share it through an `Arc` with no locking.

use std::sync::Arc;

use crate::services::users::UserDirectory;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the directory is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserDirectory>,
}

impl AppState {
    #[must_use]
    pub fn new(users: UserDirectory) -> Self {
        Self { users: Arc::new(users) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` backed by the built-in demo directory.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(UserDirectory::builtin())
    }
}
