//! Request handlers mapping HTTP calls onto the lifecycle service.

use super::error::ApiError;
use crate::task::{
    domain::{ImpactSummary, Task, TaskId},
    ports::SnapshotRepository,
    services::{ClaimTaskRequest, CreateTaskRequest, TaskLifecycleService},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use mockable::Clock;
use serde_json::{Map, Value};

/// Decodes a JSON object body. Anything that is not an object reads as `{}`.
fn object_body(body: &Bytes) -> Map<String, Value> {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Accepts only plain decimal digits, so `+5` or ` 5` do not name task 5.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::not_found());
    }
    raw.parse::<u64>()
        .map(TaskId::new)
        .map_err(|_| ApiError::not_found())
}

/// `GET /tasks`
pub async fn list_tasks<S, C>(
    State(service): State<TaskLifecycleService<S, C>>,
) -> Json<Vec<Task>>
where
    S: SnapshotRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Json(service.list().await)
}

/// `POST /tasks`
///
/// # Errors
///
/// Returns 400 naming every missing or invalid field.
pub async fn create_task<S, C>(
    State(service): State<TaskLifecycleService<S, C>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    S: SnapshotRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let request = CreateTaskRequest::from_object(object_body(&body));
    let task = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `POST /tasks/{id}/volunteer`
///
/// # Errors
///
/// Returns 400 for missing fields or a task that is not open, and 404 for an
/// unknown task.
pub async fn claim_task<S, C>(
    State(service): State<TaskLifecycleService<S, C>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Task>, ApiError>
where
    S: SnapshotRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let request = ClaimTaskRequest::from_object(object_body(&body));
    Ok(Json(service.claim(id, request).await?))
}

/// `POST /tasks/{id}/complete`
///
/// # Errors
///
/// Returns 400 when the task is not claimed and 404 for an unknown task.
pub async fn complete_task<S, C>(
    State(service): State<TaskLifecycleService<S, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    S: SnapshotRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    Ok(Json(service.complete(id).await?))
}

/// `GET /impact`
pub async fn impact<S, C>(
    State(service): State<TaskLifecycleService<S, C>>,
) -> Json<ImpactSummary>
where
    S: SnapshotRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Json(service.impact_summary().await)
}
