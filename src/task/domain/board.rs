//! In-memory task board: ordered tasks plus the durable counters.

use super::{
    ImpactSummary, NewTask, StoreSnapshot, Task, TaskDomainError, TaskId, TaskStatus, Volunteer,
};
use mockable::Clock;
use std::collections::HashSet;

/// The complete state owned by the task store.
///
/// Tasks keep insertion order. `next_id` only grows and `completed_today`
/// is never decremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    next_id: TaskId,
    completed_today: u64,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
            completed_today: 0,
        }
    }

    /// Rebuilds a board from a durable snapshot.
    ///
    /// A stored `nextId` is kept only when it exceeds every task identifier;
    /// otherwise the next identifier follows the highest one in use.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTaskId`] when two tasks share an
    /// identifier, and [`TaskDomainError::IdentifiersExhausted`] when no
    /// identifier follows the highest one in use.
    pub fn restore(snapshot: StoreSnapshot) -> Result<Self, TaskDomainError> {
        let mut seen = HashSet::with_capacity(snapshot.tasks.len());
        for task in &snapshot.tasks {
            if !seen.insert(task.id()) {
                return Err(TaskDomainError::DuplicateTaskId(task.id()));
            }
        }

        let derived = match snapshot.tasks.iter().map(Task::id).max() {
            Some(highest) => highest
                .next()
                .ok_or(TaskDomainError::IdentifiersExhausted(highest))?,
            None => TaskId::FIRST,
        };
        let next_id = snapshot
            .next_id
            .map(TaskId::new)
            .filter(|stored| *stored >= derived)
            .unwrap_or(derived);

        Ok(Self {
            tasks: snapshot.tasks,
            next_id,
            completed_today: snapshot.completed_today.unwrap_or_default(),
        })
    }

    /// Captures the full board state for durable storage.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tasks: self.tasks.clone(),
            next_id: Some(self.next_id.value()),
            completed_today: Some(self.completed_today),
        }
    }

    /// Returns every task in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the identifier the next created task will receive.
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Returns the completion counter.
    #[must_use]
    pub const fn completed_today(&self) -> u64 {
        self.completed_today
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Appends a new open task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdentifiersExhausted`] when issuing
    /// another identifier would repeat one. The board is left unchanged.
    pub fn create(
        &mut self,
        fields: NewTask,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        let following = self
            .next_id
            .next()
            .ok_or(TaskDomainError::IdentifiersExhausted(self.next_id))?;
        let task = Task::open(self.next_id, fields, clock);
        self.next_id = following;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Claims an open task for a volunteer.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown identifier and
    /// [`TaskDomainError::InvalidTransition`] when the task is not open.
    pub fn claim(&mut self, id: TaskId, volunteer: Volunteer) -> Result<Task, TaskDomainError> {
        let task = self.find_mut(id)?;
        task.claim(volunteer)?;
        Ok(task.clone())
    }

    /// Completes a claimed task and bumps the completion counter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown identifier and
    /// [`TaskDomainError::InvalidTransition`] when the task is not claimed.
    pub fn complete(&mut self, id: TaskId) -> Result<Task, TaskDomainError> {
        let task = self.find_mut(id)?;
        task.complete()?;
        let completed = task.clone();
        self.completed_today = self.completed_today.saturating_add(1);
        Ok(completed)
    }

    /// Computes the impact counters from current state.
    #[must_use]
    pub fn impact_summary(&self) -> ImpactSummary {
        ImpactSummary {
            completed_today: self.completed_today,
            open_tasks: self
                .tasks
                .iter()
                .filter(|task| task.status() == TaskStatus::Open)
                .count(),
        }
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskDomainError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskDomainError::NotFound(id))
    }
}
