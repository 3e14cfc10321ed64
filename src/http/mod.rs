//! HTTP adapter exposing the task lifecycle as a JSON API.
//!
//! | Method & path                  | Success                 |
//! |--------------------------------|-------------------------|
//! | `GET /tasks`                   | 200, array of tasks     |
//! | `POST /tasks`                  | 201, created task       |
//! | `POST /tasks/{id}/volunteer`   | 200, claimed task       |
//! | `POST /tasks/{id}/complete`    | 200, completed task     |
//! | `GET /impact`                  | 200, impact summary     |
//!
//! Failures carry `{ "error": "<message>" }` with status 400 or 404.

mod error;
mod handlers;

pub use error::{ApiError, ErrorBody};

use crate::task::{ports::SnapshotRepository, services::TaskLifecycleService};
use axum::{
    Router,
    routing::{get, post},
};
use mockable::Clock;

/// Builds the API routes without a path prefix.
pub fn router<S, C>(service: TaskLifecycleService<S, C>) -> Router
where
    S: SnapshotRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<S, C>).post(handlers::create_task::<S, C>),
        )
        .route("/tasks/{id}/volunteer", post(handlers::claim_task::<S, C>))
        .route("/tasks/{id}/complete", post(handlers::complete_task::<S, C>))
        .route("/impact", get(handlers::impact::<S, C>))
        .with_state(service)
}

/// Builds the API routes nested under `prefix` (for example `/api`).
///
/// An empty prefix or `/` serves the routes at the root.
pub fn app<S, C>(service: TaskLifecycleService<S, C>, prefix: &str) -> Router
where
    S: SnapshotRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let routes = router(service);
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        return routes;
    }
    let nested = if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    };
    Router::new().nest(&nested, routes)
}
