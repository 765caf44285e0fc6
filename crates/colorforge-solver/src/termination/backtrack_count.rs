//! Backtrack count termination.

use super::Termination;
use crate::stats::SearchStats;

/// Terminates once the search has backtracked `limit` times.
#[derive(Debug, Clone)]
pub struct BacktrackCountTermination {
    limit: u64,
}

impl BacktrackCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for BacktrackCountTermination {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        stats.backtracks >= self.limit
    }
}
