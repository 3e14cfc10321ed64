//! Shared world state for volunteer lifecycle BDD scenarios.

use std::sync::Arc;

use helpboard::task::{
    adapters::memory::InMemorySnapshotRepository,
    domain::{StoreSnapshot, Task, TaskId},
    services::{TaskLifecycleError, TaskLifecycleService, TaskStore},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemorySnapshotRepository, DefaultClock>;

/// Scenario world for volunteer lifecycle behaviour tests.
pub struct VolunteerWorld {
    pub service: TestTaskService,
    pub current_task: Option<TaskId>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl VolunteerWorld {
    /// Creates a world whose store starts from `repository`.
    #[must_use]
    pub fn with_repository(repository: InMemorySnapshotRepository) -> Self {
        let store = TaskStore::new(Arc::new(repository), Arc::new(DefaultClock));
        Self {
            service: TaskLifecycleService::new(Arc::new(store)),
            current_task: None,
            last_result: None,
        }
    }

    /// Replaces the store with one that has saved an empty board.
    pub fn reset_to_empty_board(&mut self) {
        *self = Self::with_repository(InMemorySnapshotRepository::with_snapshot(StoreSnapshot {
            tasks: Vec::new(),
            next_id: Some(1),
            completed_today: Some(0),
        }));
    }

    /// Returns the task the scenario is working on.
    pub fn current_task(&self) -> Result<TaskId, eyre::Report> {
        self.current_task
            .ok_or_else(|| eyre::eyre!("no request posted in scenario world"))
    }
}

impl Default for VolunteerWorld {
    fn default() -> Self {
        Self::with_repository(InMemorySnapshotRepository::new())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> VolunteerWorld {
    VolunteerWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
