//! Salted credential digests.
//!
//! DESIGN
//! ======
//! Each directory entry carries its own random salt. The stored digest is
//! `sha256(salt || password)` in lowercase hex, so the same password never
//! produces the same digest across users. Matching is exact and
//! case-sensitive; no normalization is applied to the password.

use std::fmt::Write;

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 16;
const DIGEST_HEX_LEN: usize = 64;

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 16-byte hex salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; SALT_BYTES] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Hex digest of `salt || password`.
#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Stored credential for one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    pub salt: String,
    #[serde(rename = "password_hash")]
    pub digest: String,
}

impl PasswordHash {
    /// Mint a credential with a fresh salt.
    #[must_use]
    pub fn new(password: &str) -> Self {
        let salt = generate_salt();
        let digest = hash_password(&salt, password);
        Self { salt, digest }
    }

    /// Both fields are non-empty lowercase-or-uppercase hex and the digest
    /// has the length of a SHA-256 output.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.salt.is_empty()
            && self.salt.chars().all(|c| c.is_ascii_hexdigit())
            && self.digest.len() == DIGEST_HEX_LEN
            && self.digest.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Check `password` against the stored digest.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        let candidate = hash_password(&self.salt, password);
        digests_match(&candidate, &self.digest.to_ascii_lowercase())
    }
}

/// Compare two digests without bailing out on the first differing byte.
fn digests_match(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
