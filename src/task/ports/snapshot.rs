//! Repository port for durable task board snapshots.

use crate::task::domain::StoreSnapshot;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot repository operations.
pub type SnapshotRepositoryResult<T> = Result<T, SnapshotRepositoryError>;

/// Durable storage contract for the task board.
///
/// Each save replaces the previous snapshot as a whole.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Reads the most recently saved snapshot.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError::Malformed`] when stored data cannot
    /// be decoded, or [`SnapshotRepositoryError::Persistence`] when storage
    /// cannot be read.
    async fn load(&self) -> SnapshotRepositoryResult<Option<StoreSnapshot>>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError::Persistence`] when the snapshot
    /// cannot be written.
    async fn save(&self, snapshot: &StoreSnapshot) -> SnapshotRepositoryResult<()>;
}

/// Errors returned by snapshot repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotRepositoryError {
    /// Stored data exists but is not a valid snapshot.
    #[error("malformed snapshot: {0}")]
    Malformed(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotRepositoryError {
    /// Wraps a decoding failure.
    pub fn malformed(err: impl fmt::Display) -> Self {
        Self::Malformed(err.to_string())
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
