//! Persisted session token.
//!
//! The token lives in a small TOML file under a fixed key. The store is owned
//! by the UI loop; other parts of the app observe sign-in/sign-out through a
//! `watch` channel.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write session file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed session file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

pub struct SessionStore {
    path: PathBuf,
    token: Option<String>,
    signed_in: watch::Sender<bool>,
}

impl SessionStore {
    /// Load the store from `path`. A missing file is an empty session.
    pub fn open(path: PathBuf) -> Result<Self, SessionError> {
        let token = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|source| SessionError::Read {
                path: path.clone(),
                source,
            })?;
            let file: SessionFile = toml::from_str(&contents)?;
            file.token.filter(|t| !t.is_empty())
        } else {
            None
        };
        let (signed_in, _) = watch::channel(token.is_some());
        Ok(Self {
            path,
            token,
            signed_in,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        *self.signed_in.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.signed_in.subscribe()
    }

    /// Store a new token and persist it.
    pub fn set(&mut self, token: String) -> Result<(), SessionError> {
        self.token = Some(token);
        let result = self.persist();
        self.signed_in.send_replace(true);
        result
    }

    /// Forget the token and remove it from disk.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.token = None;
        let result = self.persist();
        self.signed_in.send_replace(false);
        result
    }

    fn persist(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SessionError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = toml::to_string(&SessionFile {
            token: self.token.clone(),
        })?;
        std::fs::write(&self.path, contents).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("signed_in", &self.token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.toml")).unwrap();
        assert_eq!(store.get(), None);
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");
        let mut store = SessionStore::open(path.clone()).unwrap();
        store.set("abc.def.ghi".into()).unwrap();

        let reopened = SessionStore::open(path).unwrap();
        assert_eq!(reopened.get(), Some("abc.def.ghi"));
        assert!(reopened.is_signed_in());
    }

    #[test]
    fn test_clear_removes_token_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        let mut store = SessionStore::open(path.clone()).unwrap();
        store.set("tok".into()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
        assert_eq!(SessionStore::open(path).unwrap().get(), None);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::open(dir.path().join("session.toml")).unwrap();
        let mut rx = store.subscribe();
        assert!(!*rx.borrow_and_update());

        store.set("tok".into()).unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());

        store.clear().unwrap();
        assert!(!*rx.borrow_and_update());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "token = [").unwrap();
        assert!(matches!(
            SessionStore::open(path),
            Err(SessionError::Parse(_))
        ));
    }
}
