//! Task lifecycle status.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a help request.
///
/// Status only advances `Open -> Claimed -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Waiting for a volunteer.
    Open,
    /// A volunteer has taken the task on.
    Claimed,
    /// The volunteer finished the task.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Claimed => "Claimed",
            Self::Completed => "Completed",
        }
    }

    /// Returns whether a task in this status may move to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::Claimed) | (Self::Claimed, Self::Completed)
        )
    }

    /// Returns whether volunteer fields are expected for this status.
    #[must_use]
    pub const fn has_volunteer(self) -> bool {
        !matches!(self, Self::Open)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Open" => Ok(Self::Open),
            "Claimed" => Ok(Self::Claimed),
            "Completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
