//! Port contracts for task board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod snapshot;

pub use snapshot::{SnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult};
