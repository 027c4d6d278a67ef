//! File-backed session persistence
//!
//! Holds at most one session: persisting a new one replaces the old one in
//! place. Writes are atomic (temp file + rename) so a crash mid-write never
//! leaves a half-written session on disk.

use async_trait::async_trait;
use auth::{Session, SessionStore, SessionStoreError};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Session store error types
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A session store persisted as a JSON file
///
/// The in-memory copy is the source of truth after [`init`](Self::init);
/// the file exists so the session survives an app restart.
pub struct PersistentSessionStore {
    path: PathBuf,
    cached: RwLock<Option<Session>>,
}

impl PersistentSessionStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    /// Load the persisted session from disk, if any
    ///
    /// A missing file means no session. An unreadable session file is
    /// discarded rather than surfaced: the user simply starts logged out.
    pub async fn init(&self) -> Result<(), StoreError> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted session");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                debug!(customer_id = session.customer.id, "restored persisted session");
                let mut cached = self.cached.write().await;
                *cached = Some(session);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
                let _ = fs::remove_file(&self.path).await;
            }
        }

        Ok(())
    }

    async fn write_atomic(&self, contents: &str) -> Result<(), StoreError> {
        let temp_path = self.path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }

    async fn persist_inner(&self, session: &Session) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(session)?;

        // The lock is held across the file write so concurrent persists
        // cannot interleave disk and cache updates from different sessions.
        let mut cached = self.cached.write().await;
        self.write_atomic(&json).await?;
        *cached = Some(session.clone());
        Ok(())
    }

    async fn clear_inner(&self) -> Result<(), StoreError> {
        let mut cached = self.cached.write().await;
        *cached = None;

        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl SessionStore for PersistentSessionStore {
    async fn persist(&self, session: &Session) -> Result<(), SessionStoreError> {
        self.persist_inner(session)
            .await
            .map_err(|e| SessionStoreError::Persist(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.clear_inner()
            .await
            .map_err(|e| SessionStoreError::Persist(e.to_string()))
    }

    async fn current(&self) -> Option<Session> {
        self.cached.read().await.clone()
    }
}
