//! Durable snapshot schema for the task board.

use super::Task;
use serde::{Deserialize, Serialize};

/// Full board state as written to durable storage.
///
/// Counters are optional on read so that hand-edited or older snapshots can
/// still be restored; the board derives sensible values when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// Tasks in display order.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Identifier to assign to the next created task.
    #[serde(default)]
    pub next_id: Option<u64>,
    /// Number of completions recorded since the counter was last reset.
    #[serde(default)]
    pub completed_today: Option<u64>,
}
