//! Application services for the volunteer task lifecycle.

mod lifecycle;
mod store;
mod validation;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use store::TaskStore;
pub use validation::{
    ClaimTaskRequest, CreateTaskRequest, ValidationError, validate_claim, validate_create,
};
