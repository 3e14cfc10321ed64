//! Aggregate counters reported by the impact endpoint.

use serde::{Deserialize, Serialize};

/// Completed and open task counts derived from board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    /// Completions recorded since the counter was last reset.
    pub completed_today: u64,
    /// Tasks currently waiting for a volunteer.
    pub open_tasks: usize,
}
