//! Domain model for volunteer help requests.
//!
//! The domain owns the task state machine (`Open -> Claimed -> Completed`),
//! the board that holds tasks and counters, and the durable snapshot shape.
//! Infrastructure concerns stay outside this boundary.

mod board;
mod classification;
mod error;
mod ids;
mod seed;
mod snapshot;
mod status;
mod summary;
mod task;

pub use board::TaskBoard;
pub use classification::{Category, Urgency};
pub use error::{ParseCategoryError, ParseTaskStatusError, ParseUrgencyError, TaskDomainError};
pub use ids::{RequiredText, TaskId};
pub use seed::{DEMO_VOLUNTEER, DEMO_VOLUNTEER_NOTE, seed_board};
pub use snapshot::StoreSnapshot;
pub use status::TaskStatus;
pub use summary::ImpactSummary;
pub use task::{NewTask, Task, Volunteer};
