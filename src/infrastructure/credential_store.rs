//! Credential store backed by a single JSON file

use crate::domain::Credential;
use crate::error::{DiaryError, Result};
use crate::infrastructure::json_file;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// All registered users, keyed by username
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    users: BTreeMap<String, Credential>,
}

impl CredentialStore {
    /// Load the store from `path`. A missing file is a first run and yields
    /// an empty store; the file is only created on the first registration.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let users: BTreeMap<String, Credential> = json_file::load_or_default(&path)?;

        if let Some((key, cred)) = users.iter().find(|(k, c)| **k != c.username) {
            return Err(DiaryError::decode(
                &path,
                format!(
                    "record '{}' holds credentials for '{}'",
                    key, cred.username
                ),
            ));
        }

        log::debug!("Loaded {} user(s) from {}", users.len(), path.display());
        Ok(CredentialStore { path, users })
    }

    /// Register a new user and persist the store.
    ///
    /// If saving fails the user stays registered in memory only.
    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() {
            return Err(DiaryError::EmptyUsername);
        }

        if self.users.contains_key(username) {
            return Err(DiaryError::DuplicateUsername(username.to_string()));
        }

        let credential = Credential::new(username, password)?;
        self.users.insert(username.to_string(), credential);
        log::info!("Registered user '{}'", username);

        self.save()
    }

    /// Check a username/password pair. Unknown users simply fail.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let authenticated = self
            .users
            .get(username)
            .is_some_and(|cred| cred.verify(password));

        if !authenticated {
            log::warn!("Failed login attempt for '{}'", username);
        }
        authenticated
    }

    /// Rewrite the whole backing file
    pub fn save(&self) -> Result<()> {
        json_file::save(&self.path, &self.users)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
