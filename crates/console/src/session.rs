//! Client-held session state.
//!
//! The authenticated identity and its bearer token persist between runs in
//! one JSON file with two fixed keys, `current_user` and `access_token` -
//! the console's equivalent of the browser's local storage entries.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::User;

/// Errors that can occur while persisting the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session file could not be read or written.
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The session state could not be serialized.
    #[error("session encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk representation of the session.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    current_user: Option<User>,
    access_token: Option<String>,
}

/// The current session: who is logged in, and with which token.
///
/// Every mutation persists immediately; [`SessionStore::logout`] removes
/// the file entirely.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    user: Option<User>,
    access_token: Option<SecretString>,
}

impl SessionStore {
    /// Open the session store, loading persisted state if present.
    ///
    /// A missing file means no session. A corrupt file is treated the same
    /// way - the user re-authenticates rather than the console crashing.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stored = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<StoredSession>(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "discarding corrupt session file");
                StoredSession::default()
            }),
            Err(_) => StoredSession::default(),
        };

        Self {
            path,
            user: stored.current_user,
            access_token: stored.access_token.map(SecretString::from),
        }
    }

    /// The authenticated user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Replace the authenticated user and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be written.
    pub fn set_current_user(&mut self, user: User) -> Result<(), SessionError> {
        self.user = Some(user);
        self.persist()
    }

    /// The bearer token, if the login flow returned one.
    #[must_use]
    pub fn access_token(&self) -> Option<&SecretString> {
        self.access_token.as_ref()
    }

    /// Replace the bearer token and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be written.
    pub fn set_access_token(&mut self, token: Option<SecretString>) -> Result<(), SessionError> {
        self.access_token = token;
        self.persist()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the logged-in user holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_admin())
    }

    /// Clear all session state and remove the persisted file.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file exists but cannot be removed.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.user = None;
        self.access_token = None;
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Path of the persisted session file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), SessionError> {
        let stored = StoredSession {
            current_user: self.user.clone(),
            access_token: self
                .access_token
                .as_ref()
                .map(|t| t.expose_secret().to_string()),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, serde_json::to_vec_pretty(&stored)?)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use hotelier_core::{UserId, UserRole};

    fn sample_user(id: i32, role: UserRole) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "email": "guest@example.com",
            "first_name": "Анна",
            "last_name": "Иванова",
            "role": role,
            "created_at": "2024-03-01T09:30:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_fresh_store_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json"));
        assert!(!store.is_authenticated());
        assert!(!store.is_admin());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::open(&path);
        store.set_current_user(sample_user(7, UserRole::Admin)).unwrap();
        store
            .set_access_token(Some(SecretString::from("tok-123".to_string())))
            .unwrap();

        let reopened = SessionStore::open(&path);
        assert!(reopened.is_authenticated());
        assert!(reopened.is_admin());
        assert_eq!(reopened.current_user().unwrap().id, UserId::new(7));
        assert_eq!(
            reopened.access_token().unwrap().expose_secret(),
            "tok-123"
        );
    }

    #[test]
    fn test_logout_clears_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::open(&path);
        store.set_current_user(sample_user(7, UserRole::User)).unwrap();
        assert!(path.exists());

        store.logout().unwrap();
        assert!(!store.is_authenticated());
        assert!(!path.exists());

        // A reopened store sees no session.
        let reopened = SessionStore::open(&path);
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn test_logout_without_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("session.json"));
        store.logout().unwrap();
    }

    #[test]
    fn test_corrupt_file_starts_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::open(&path);
        assert!(!store.is_authenticated());
    }
}
