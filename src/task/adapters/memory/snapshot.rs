//! In-memory snapshot repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::StoreSnapshot,
    ports::{SnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult},
};

/// Thread-safe in-memory snapshot repository.
///
/// Clones share the same storage, so a test can keep a handle and inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotRepository {
    state: Arc<RwLock<InMemorySnapshotState>>,
}

#[derive(Debug, Default)]
struct InMemorySnapshotState {
    snapshot: Option<StoreSnapshot>,
    saves: usize,
}

impl InMemorySnapshotRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        let state = InMemorySnapshotState {
            snapshot: Some(snapshot),
            saves: 0,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the stored snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn stored(&self) -> SnapshotRepositoryResult<Option<StoreSnapshot>> {
        let state = self.state.read().map_err(|err| {
            SnapshotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.snapshot.clone())
    }

    /// Returns how many snapshots have been saved.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn save_count(&self) -> SnapshotRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            SnapshotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.saves)
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepository {
    async fn load(&self) -> SnapshotRepositoryResult<Option<StoreSnapshot>> {
        self.stored()
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> SnapshotRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SnapshotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.snapshot = Some(snapshot.clone());
        state.saves += 1;
        Ok(())
    }
}
