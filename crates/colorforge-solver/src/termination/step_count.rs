//! Step count termination.

use super::Termination;
use crate::stats::SearchStats;

/// Terminates after a number of variable selections.
///
/// # Example
///
/// ```
/// use colorforge_solver::termination::StepCountTermination;
///
/// // Terminate after 1000 selections
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        stats.selections >= self.limit
    }
}
