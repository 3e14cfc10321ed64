//! Task aggregate root and its lifecycle transitions.

use super::{Category, RequiredText, TaskDomainError, TaskId, TaskStatus, Urgency};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated fields supplied by a requester when opening a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Short summary of the request.
    pub title: RequiredText,
    /// What the volunteer is asked to do.
    pub description: RequiredText,
    /// Kind of help requested.
    pub category: Category,
    /// How soon help is needed.
    pub urgency: Urgency,
    /// Where the help is needed.
    pub location: RequiredText,
    /// Who asked for help.
    pub requester_name: RequiredText,
}

/// Volunteer details recorded when a task is claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volunteer {
    name: RequiredText,
    note: String,
}

impl Volunteer {
    /// Creates volunteer details. The note may be empty.
    #[must_use]
    pub fn new(name: RequiredText, note: impl Into<String>) -> Self {
        Self {
            name,
            note: note.into(),
        }
    }

    /// Returns the volunteer name.
    #[must_use]
    pub const fn name(&self) -> &RequiredText {
        &self.name
    }

    /// Returns the note left by the volunteer.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Task aggregate root.
///
/// Identity, request fields, and `created_at` never change after creation.
/// Volunteer details are present exactly when the status is not `Open`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TaskRecord", try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: RequiredText,
    description: RequiredText,
    category: Category,
    urgency: Urgency,
    location: RequiredText,
    requester_name: RequiredText,
    status: TaskStatus,
    volunteer: Option<Volunteer>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Opens a new task with the given identifier.
    #[must_use]
    pub fn open(id: TaskId, fields: NewTask, clock: &impl Clock) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            urgency: fields.urgency,
            location: fields.location,
            requester_name: fields.requester_name,
            status: TaskStatus::Open,
            volunteer: None,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &RequiredText {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &RequiredText {
        &self.description
    }

    /// Returns the task category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the task urgency.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Returns where help is needed.
    #[must_use]
    pub const fn location(&self) -> &RequiredText {
        &self.location
    }

    /// Returns who requested help.
    #[must_use]
    pub const fn requester_name(&self) -> &RequiredText {
        &self.requester_name
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the volunteer details, if the task has been claimed.
    #[must_use]
    pub const fn volunteer(&self) -> Option<&Volunteer> {
        self.volunteer.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Assigns a volunteer and moves the task to [`TaskStatus::Claimed`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is not
    /// open. The task is left unchanged.
    pub fn claim(&mut self, volunteer: Volunteer) -> Result<(), TaskDomainError> {
        self.ensure_transition(TaskStatus::Claimed)?;
        self.volunteer = Some(volunteer);
        self.status = TaskStatus::Claimed;
        Ok(())
    }

    /// Moves a claimed task to [`TaskStatus::Completed`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is not
    /// claimed. The task is left unchanged.
    pub fn complete(&mut self) -> Result<(), TaskDomainError> {
        self.ensure_transition(TaskStatus::Completed)?;
        self.status = TaskStatus::Completed;
        Ok(())
    }

    const fn ensure_transition(&self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if self.status.can_transition_to(target) {
            return Ok(());
        }
        Err(TaskDomainError::InvalidTransition {
            id: self.id,
            from: self.status,
            to: target,
        })
    }
}

/// Flat wire representation of a task shared by the API and the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    title: String,
    description: String,
    category: Category,
    urgency: Urgency,
    location: String,
    requester_name: String,
    status: TaskStatus,
    volunteer_name: Option<String>,
    volunteer_note: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        let (volunteer_name, volunteer_note) = match task.volunteer {
            Some(volunteer) => (Some(volunteer.name.into_inner()), Some(volunteer.note)),
            None => (None, None),
        };
        Self {
            id: task.id,
            title: task.title.into_inner(),
            description: task.description.into_inner(),
            category: task.category,
            urgency: task.urgency,
            location: task.location.into_inner(),
            requester_name: task.requester_name.into_inner(),
            status: task.status,
            volunteer_name,
            volunteer_note,
            created_at: task.created_at,
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let volunteer = match (
            record.status.has_volunteer(),
            record.volunteer_name,
            record.volunteer_note,
        ) {
            (false, None, None) => None,
            (true, Some(name), Some(note)) => {
                Some(Volunteer::new(RequiredText::new("volunteerName", name)?, note))
            }
            _ => {
                return Err(TaskDomainError::InconsistentVolunteer {
                    id: record.id,
                    status: record.status,
                });
            }
        };

        Ok(Self {
            id: record.id,
            title: RequiredText::new("title", record.title)?,
            description: RequiredText::new("description", record.description)?,
            category: record.category,
            urgency: record.urgency,
            location: RequiredText::new("location", record.location)?,
            requester_name: RequiredText::new("requesterName", record.requester_name)?,
            status: record.status,
            volunteer,
            created_at: record.created_at,
        })
    }
}
