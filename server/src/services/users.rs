//! Fixed user directory: credential matching and lookups.
//!
//! DESIGN
//! ======
//! The directory is loaded once at startup (built-in seed or a YAML file)
//! and never mutated afterwards, so it is shared as a plain `Arc` without
//! locking. Every lookup is a linear scan; the directory is small by
//! construction.
//!
//! Records carry a salted digest instead of a password. `PublicUser` is the
//! only shape that crosses the HTTP boundary and has no credential field.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::password::{PasswordHash, hash_password};

/// Coarse permission tier. Gates only the administration page on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(format!("unknown role '{other}' (expected 'admin' or 'user')")),
        }
    }
}

/// One directory entry, in the shape of the YAML directory file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub role: Role,
    #[serde(flatten)]
    pub credential: PasswordHash,
}

/// User fields safe to expose to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl UserRecord {
    #[must_use]
    pub fn to_public(&self) -> PublicUser {
        PublicUser { id: self.id.clone(), username: self.username.clone(), role: self.role }
    }
}

/// Render one record as a YAML list item for a directory file.
///
/// # Errors
///
/// Returns the serializer error, which only occurs for unrepresentable data.
pub fn directory_entry_yaml(record: &UserRecord) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(std::slice::from_ref(record))
}

impl From<&UserRecord> for PublicUser {
    fn from(record: &UserRecord) -> Self {
        record.to_public()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read user directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse user directory: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate user id: {0}")]
    DuplicateId(String),
    #[error("duplicate username: {0}")]
    DuplicateUsername(String),
    #[error("malformed credential for user: {0}")]
    MalformedCredential(String),
}

// Seed salts; digests are computed at construction.
const SEED: &[(&str, &str, &str, Role, &str)] = &[
    ("1", "sagor", "6a1f3c9e27b45d80e1f2a3b4c5d6e7f8", Role::Admin, "1234"),
    ("2", "shohid", "b2c4d6e8f0a1b3c5d7e9f1a2b3c4d5e6", Role::User, "1234"),
];

/// Read-only set of known users.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    /// Build a directory, enforcing unique ids, unique usernames and
    /// well-formed credentials.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found, in record order.
    pub fn new(users: Vec<UserRecord>) -> Result<Self, DirectoryError> {
        let mut ids = HashSet::new();
        let mut usernames = HashSet::new();
        for user in &users {
            if !ids.insert(user.id.as_str()) {
                return Err(DirectoryError::DuplicateId(user.id.clone()));
            }
            if !usernames.insert(user.username.as_str()) {
                return Err(DirectoryError::DuplicateUsername(user.username.clone()));
            }
            if !user.credential.is_well_formed() {
                return Err(DirectoryError::MalformedCredential(user.username.clone()));
            }
        }
        Ok(Self { users })
    }

    /// The demo directory: `sagor` (admin) and `shohid` (user).
    #[must_use]
    pub fn builtin() -> Self {
        let users = SEED
            .iter()
            .map(|&(id, username, salt, role, password)| UserRecord {
                id: id.to_owned(),
                username: username.to_owned(),
                role,
                credential: PasswordHash { salt: salt.to_owned(), digest: hash_password(salt, password) },
            })
            .collect();
        Self { users }
    }

    /// Parse a YAML list of `{id, username, role, salt, password_hash}`.
    ///
    /// # Errors
    ///
    /// Returns `Parse` on invalid YAML and any `new` invariant violation.
    pub fn from_yaml_str(raw: &str) -> Result<Self, DirectoryError> {
        let users: Vec<UserRecord> = serde_yaml::from_str(raw)?;
        Self::new(users)
    }

    /// Load a YAML directory file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as `from_yaml_str`.
    pub fn from_yaml_file(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| DirectoryError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&raw)
    }

    /// Record matching both fields exactly, or `None`.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&UserRecord> {
        self.get_by_username(username)
            .filter(|u| u.credential.verify(password))
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn get_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Every record in directory order. Project to `PublicUser` before
    /// exposing.
    #[must_use]
    pub fn list_all(&self) -> &[UserRecord] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
