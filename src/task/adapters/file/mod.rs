//! Filesystem adapters.

mod snapshot;

pub use snapshot::{DEFAULT_SNAPSHOT_FILE, JsonFileSnapshotRepository};
