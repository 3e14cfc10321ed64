//! Task store: the single owner of board state.
//!
//! The store loads its board lazily on first access, serialises every
//! read-modify-write behind one lock, and writes a snapshot through to the
//! repository before each successful mutation returns. Snapshot failures
//! are logged and counted but never surfaced to callers; the in-memory
//! board stays authoritative for the running process.

use crate::task::{
    domain::{
        ImpactSummary, NewTask, StoreSnapshot, Task, TaskBoard, TaskDomainError, TaskId,
        Volunteer, seed_board,
    },
    ports::SnapshotRepository,
};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Board state after the first access, with the revision of its latest
/// mutation.
#[derive(Debug)]
struct LoadedBoard {
    board: TaskBoard,
    revision: u64,
}

impl LoadedBoard {
    fn pending_write(&self) -> PendingWrite {
        PendingWrite {
            revision: self.revision,
            snapshot: self.board.snapshot(),
        }
    }
}

/// Snapshot captured under the state lock, written after it is released.
#[derive(Debug)]
struct PendingWrite {
    revision: u64,
    snapshot: StoreSnapshot,
}

/// Single-process task store with write-through persistence.
pub struct TaskStore<S, C>
where
    S: SnapshotRepository,
    C: Clock + Send + Sync,
{
    snapshots: Arc<S>,
    clock: Arc<C>,
    /// `None` until the first access loads or seeds the board.
    state: Mutex<Option<LoadedBoard>>,
    /// Revision of the newest snapshot known to be on storage.
    persisted_revision: Mutex<u64>,
    persistence_failures: AtomicU64,
}

impl<S, C> TaskStore<S, C>
where
    S: SnapshotRepository,
    C: Clock + Send + Sync,
{
    /// Creates a store. No storage is touched until the first access.
    #[must_use]
    pub fn new(snapshots: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            snapshots,
            clock,
            state: Mutex::new(None),
            persisted_revision: Mutex::new(0),
            persistence_failures: AtomicU64::new(0),
        }
    }

    /// Loads the board if this is the first access. Later calls are no-ops.
    pub async fn ensure_loaded(&self) {
        self.read(|_| ()).await;
    }

    /// Returns every task in display order.
    pub async fn list(&self) -> Vec<Task> {
        self.read(|board| board.tasks().to_vec()).await
    }

    /// Returns the full board state as it would be persisted.
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.read(TaskBoard::snapshot).await
    }

    /// Computes completed and open counts from current state.
    pub async fn impact_summary(&self) -> ImpactSummary {
        self.read(TaskBoard::impact_summary).await
    }

    /// Appends a new open task under the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdentifiersExhausted`] when no fresh
    /// identifier remains.
    pub async fn create(&self, fields: NewTask) -> Result<Task, TaskDomainError> {
        let task = self.mutate(|board, clock| board.create(fields, clock)).await?;
        debug!(task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Claims an open task for a volunteer.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown identifier and
    /// [`TaskDomainError::InvalidTransition`] when the task is not open.
    pub async fn claim(&self, id: TaskId, volunteer: Volunteer) -> Result<Task, TaskDomainError> {
        let task = self.mutate(|board, _| board.claim(id, volunteer)).await?;
        debug!(task_id = %id, "claimed task");
        Ok(task)
    }

    /// Completes a claimed task and bumps the completion counter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown identifier and
    /// [`TaskDomainError::InvalidTransition`] when the task is not claimed.
    pub async fn complete(&self, id: TaskId) -> Result<Task, TaskDomainError> {
        let task = self.mutate(|board, _| board.complete(id)).await?;
        debug!(task_id = %id, "completed task");
        Ok(task)
    }

    /// Returns how many snapshot loads or writes have failed.
    #[must_use]
    pub fn persistence_failures(&self) -> u64 {
        self.persistence_failures.load(Ordering::Relaxed)
    }

    async fn read<T>(&self, view: impl FnOnce(&TaskBoard) -> T + Send) -> T {
        let (value, pending) = {
            let mut slot = self.state.lock().await;
            let (loaded, initial_write) = self.load_slot(&mut slot).await;
            (view(&loaded.board), initial_write)
        };
        if let Some(write) = pending {
            self.persist(write).await;
        }
        value
    }

    async fn mutate<T, E>(
        &self,
        operation: impl FnOnce(&mut TaskBoard, &C) -> Result<T, E> + Send,
    ) -> Result<T, E> {
        let (outcome, pending) = {
            let mut slot = self.state.lock().await;
            let (loaded, initial_write) = self.load_slot(&mut slot).await;
            match operation(&mut loaded.board, &*self.clock) {
                Ok(value) => {
                    loaded.revision += 1;
                    (Ok(value), Some(loaded.pending_write()))
                }
                Err(err) => (Err(err), initial_write),
            }
        };
        if let Some(write) = pending {
            self.persist(write).await;
        }
        outcome
    }

    async fn load_slot<'a>(
        &self,
        slot: &'a mut Option<LoadedBoard>,
    ) -> (&'a mut LoadedBoard, Option<PendingWrite>) {
        if let Some(loaded) = slot.take() {
            return (slot.insert(loaded), None);
        }
        let (board, seeded) = self.load_board().await;
        let loaded = slot.insert(LoadedBoard {
            board,
            revision: u64::from(seeded),
        });
        let pending = seeded.then(|| loaded.pending_write());
        (loaded, pending)
    }

    /// Returns the restored board, or a freshly seeded one and `true` when
    /// the seed must be persisted.
    async fn load_board(&self) -> (TaskBoard, bool) {
        match self.snapshots.load().await {
            Ok(Some(snapshot)) => match TaskBoard::restore(snapshot) {
                Ok(board) => {
                    info!(
                        tasks = board.tasks().len(),
                        next_id = %board.next_id(),
                        "restored task board from snapshot"
                    );
                    (board, false)
                }
                Err(err) => {
                    self.record_failure();
                    warn!(error = %err, "stored snapshot is inconsistent; reseeding");
                    (self.seed(), true)
                }
            },
            Ok(None) => {
                info!("no snapshot found; seeding demo tasks");
                (self.seed(), true)
            }
            Err(err) => {
                self.record_failure();
                warn!(error = %err, "failed to load snapshot; reseeding");
                (self.seed(), true)
            }
        }
    }

    fn seed(&self) -> TaskBoard {
        seed_board(&*self.clock).unwrap_or_else(|err| {
            error!(error = %err, "demo seed is invalid; starting with an empty board");
            TaskBoard::new()
        })
    }

    async fn persist(&self, write: PendingWrite) {
        let mut persisted = self.persisted_revision.lock().await;
        if *persisted >= write.revision {
            debug!(
                revision = write.revision,
                persisted = *persisted,
                "newer snapshot already persisted"
            );
            return;
        }
        match self.snapshots.save(&write.snapshot).await {
            Ok(()) => *persisted = write.revision,
            Err(err) => {
                self.record_failure();
                error!(
                    revision = write.revision,
                    error = %err,
                    "failed to persist task snapshot; keeping in-memory state"
                );
            }
        }
    }

    fn record_failure(&self) {
        self.persistence_failures.fetch_add(1, Ordering::Relaxed);
    }
}
