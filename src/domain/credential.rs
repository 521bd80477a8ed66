//! Credential records and password hashing
//!
//! Passwords are hashed with Argon2id using a random per-record salt and
//! stored as PHC strings (`$argon2id$v=19$...`), so the parameters and salt
//! travel with the hash.

use crate::error::{DiaryError, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::{Deserialize, Serialize};

/// A registered user and the hash of their password
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
}

impl Credential {
    /// Hash `password` with a fresh salt and build a record for `username`
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self> {
        Ok(Credential {
            username: username.into(),
            password_hash: hash_password(password)?,
        })
    }

    /// Constant-time check of `password` against the stored hash.
    ///
    /// A stored hash that is not a valid PHC string never verifies.
    pub fn verify(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                log::warn!("Stored password hash for '{}' is unreadable: {}", self.username, e);
                false
            }
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DiaryError::PasswordHash(e.to_string()))
}
