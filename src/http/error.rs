//! JSON error responses for the HTTP adapter.

use crate::task::{domain::TaskStatus, services::TaskLifecycleError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Body returned with every error status: `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

/// Status code and message for a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error response.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Response for an unknown task or malformed task identifier.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

const fn transition_message(target: TaskStatus) -> &'static str {
    match target {
        TaskStatus::Claimed => "Task not open",
        TaskStatus::Completed => "Task must be claimed before completing",
        TaskStatus::Open => "Task cannot be reopened",
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Validation(validation) => {
                Self::new(StatusCode::BAD_REQUEST, validation.to_string())
            }
            TaskLifecycleError::NotFound(_) => Self::not_found(),
            TaskLifecycleError::InvalidTransition { to, .. } => {
                Self::new(StatusCode::BAD_REQUEST, transition_message(to))
            }
            TaskLifecycleError::Domain(domain) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, domain.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
