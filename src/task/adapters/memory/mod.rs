//! In-memory adapters for tests and ephemeral runs.

mod snapshot;

pub use snapshot::InMemorySnapshotRepository;
