//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A required text field was empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// No task carries the requested identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The task's current status does not permit the requested transition.
    #[error("task {id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Task identifier.
        id: TaskId,
        /// Status held by the task.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// No identifier remains after the given one.
    #[error("no task identifier follows {0}")]
    IdentifiersExhausted(TaskId),

    /// Two tasks in a restored snapshot share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),

    /// Volunteer fields disagree with the task status.
    #[error("task {id} has volunteer fields inconsistent with status {status}")]
    InconsistentVolunteer {
        /// Task identifier.
        id: TaskId,
        /// Status held by the task.
        status: TaskStatus,
    },
}

/// Error returned while parsing a task status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a category string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

/// Error returned while parsing an urgency string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown urgency: {0}")]
pub struct ParseUrgencyError(pub String);
