//! Persisted client-side credentials.
//!
//! A small JSON file standing in for the browser's local storage: it holds
//! the access token and the serialized user record, and survives process
//! restarts. No expiry is tracked client-side.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ClientError;
use crate::models::user::User;

const CREDENTIALS_FILE: &str = "credentials.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedCredentials {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

/// File-backed store for the access token and user record. Token and user
/// are cleared independently because logout semantics require it.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join(CREDENTIALS_FILE),
        }
    }

    pub fn access_token(&self) -> Result<Option<String>, ClientError> {
        Ok(self.load()?.access_token)
    }

    pub fn user(&self) -> Result<Option<User>, ClientError> {
        Ok(self.load()?.user)
    }

    pub fn store_token(&self, token: &str) -> Result<(), ClientError> {
        let mut state = self.load()?;
        state.access_token = Some(token.to_string());
        self.save(&state)
    }

    pub fn store_user(&self, user: &User) -> Result<(), ClientError> {
        let mut state = self.load()?;
        state.user = Some(user.clone());
        self.save(&state)
    }

    pub fn clear_user(&self) -> Result<(), ClientError> {
        let mut state = self.load()?;
        state.user = None;
        self.save(&state)
    }

    /// Removes both token and user.
    pub fn clear(&self) -> Result<(), ClientError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// A missing file is an empty store; a corrupt file is treated the same
    /// way (with a warning) so that rehydration can never wedge app start.
    fn load(&self) -> Result<PersistedCredentials, ClientError> {
        if !self.path.exists() {
            return Ok(PersistedCredentials::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(state) => Ok(state),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "corrupt credential file; starting empty");
                Ok(PersistedCredentials::default())
            }
        }
    }

    fn save(&self, state: &PersistedCredentials) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in_tempdir() -> (tempfile::TempDir, CredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let (_dir, store) = store_in_tempdir();
        assert!(store.access_token().unwrap().is_none());
        assert!(store.user().unwrap().is_none());
    }

    #[test]
    fn test_token_and_user_round_trip() {
        let (_dir, store) = store_in_tempdir();
        let user = User::from_email("casey@example.com");

        store.store_token("tok-123").unwrap();
        store.store_user(&user).unwrap();

        assert_eq!(store.access_token().unwrap().as_deref(), Some("tok-123"));
        assert_eq!(store.user().unwrap(), Some(user));
    }

    #[test]
    fn test_clear_user_keeps_token() {
        let (_dir, store) = store_in_tempdir();
        store.store_token("tok-123").unwrap();
        store.store_user(&User::from_email("casey@example.com")).unwrap();

        store.clear_user().unwrap();

        assert!(store.user().unwrap().is_none());
        assert_eq!(store.access_token().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_clear_removes_everything() {
        let (_dir, store) = store_in_tempdir();
        store.store_token("tok-123").unwrap();
        store.store_user(&User::from_email("casey@example.com")).unwrap();

        store.clear().unwrap();

        assert!(store.access_token().unwrap().is_none());
        assert!(store.user().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let (dir, store) = store_in_tempdir();
        fs::write(dir.path().join(CREDENTIALS_FILE), "not json").unwrap();

        assert!(store.access_token().unwrap().is_none());
    }

    #[test]
    fn test_store_survives_reconstruction() {
        let (dir, store) = store_in_tempdir();
        store.store_token("tok-123").unwrap();

        let reopened = CredentialStore::new(dir.path());
        assert_eq!(reopened.access_token().unwrap().as_deref(), Some("tok-123"));
    }
}
