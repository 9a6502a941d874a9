//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's public shapes. `User` is also the
//! persisted session record, so it deliberately has no credential field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Coarse permission tier, serialized lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Public user record returned by login and profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login body.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

/// Error body returned with every non-success status.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
