//! Service layer for the volunteer task lifecycle.

use super::{
    store::TaskStore,
    validation::{
        ClaimTaskRequest, CreateTaskRequest, ValidationError, validate_claim, validate_create,
    },
};
use crate::task::{
    domain::{ImpactSummary, Task, TaskDomainError, TaskId, TaskStatus},
    ports::SnapshotRepository,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The request was incomplete or carried invalid values.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The task's status does not allow the requested transition.
    #[error("task {id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Task identifier.
        id: TaskId,
        /// Status held by the task.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// Any other domain rule was violated.
    #[error(transparent)]
    Domain(TaskDomainError),
}

impl From<TaskDomainError> for TaskLifecycleError {
    fn from(err: TaskDomainError) -> Self {
        match err {
            TaskDomainError::NotFound(id) => Self::NotFound(id),
            TaskDomainError::InvalidTransition { id, from, to } => {
                Self::InvalidTransition { id, from, to }
            }
            other => Self::Domain(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Validated task lifecycle operations over a shared [`TaskStore`].
pub struct TaskLifecycleService<S, C>
where
    S: SnapshotRepository,
    C: Clock + Send + Sync,
{
    store: Arc<TaskStore<S, C>>,
}

impl<S, C> Clone for TaskLifecycleService<S, C>
where
    S: SnapshotRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: SnapshotRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<S, C>>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &TaskStore<S, C> {
        &self.store
    }

    /// Returns every task in display order.
    pub async fn list(&self) -> Vec<Task> {
        self.store.list().await
    }

    /// Opens a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] naming every missing or
    /// invalid field. Nothing is stored in that case.
    /// [`TaskLifecycleError::Domain`] is returned when no fresh identifier
    /// remains.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let fields = validate_create(request)?;
        Ok(self.store.create(fields).await?)
    }

    /// Claims an open task for a volunteer.
    ///
    /// The request is validated before the task is looked up.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for an incomplete request,
    /// [`TaskLifecycleError::NotFound`] for an unknown task, and
    /// [`TaskLifecycleError::InvalidTransition`] when the task is not open.
    pub async fn claim(&self, id: TaskId, request: ClaimTaskRequest) -> TaskLifecycleResult<Task> {
        let volunteer = validate_claim(request)?;
        Ok(self.store.claim(id, volunteer).await?)
    }

    /// Marks a claimed task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task and
    /// [`TaskLifecycleError::InvalidTransition`] when the task is not claimed.
    pub async fn complete(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        Ok(self.store.complete(id).await?)
    }

    /// Returns the completed-today and open-task counters.
    pub async fn impact_summary(&self) -> ImpactSummary {
        self.store.impact_summary().await
    }
}
