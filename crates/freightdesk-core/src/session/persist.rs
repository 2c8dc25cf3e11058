//! Session persistence: the `auth-storage` document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use super::AuthSession;

/// Failure while loading or saving the persisted session.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying storage I/O failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document is not a valid session.
    #[error("session storage holds invalid data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Where the session snapshot lives between runs.
pub trait SessionStore: Send + Sync {
    /// Load the stored session. `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<AuthSession>, PersistError>;

    /// Replace the stored session.
    fn save(&self, session: &AuthSession) -> Result<(), PersistError>;
}

/// One pretty-printed JSON document on disk.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<AuthSession>, PersistError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    fn save(&self, session: &AuthSession) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let doc = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, doc)?;
        debug!("session persisted to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and single-run use.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<AuthSession>, PersistError> {
        Ok(self.slot.lock().expect("session slot poisoned").clone())
    }

    fn save(&self, session: &AuthSession) -> Result<(), PersistError> {
        *self.slot.lock().expect("session slot poisoned") = Some(session.clone());
        Ok(())
    }
}
