//! Search statistics.
//!
//! Plain counters owned by one search call; nothing here is shared between
//! calls.

use std::time::{Duration, Instant};

/// Counters collected while a search runs.
///
/// # Example
///
/// ```
/// use colorforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_selection(0);
/// stats.record_selection(1);
/// stats.record_assignment();
/// stats.record_backtrack();
///
/// assert_eq!(stats.selections, 2);
/// assert_eq!(stats.max_depth, 1);
/// assert_eq!(stats.backtracks, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// `SELECT` visits, including the one that finds nothing left to assign.
    pub selections: u64,
    /// Tentative branch assignments.
    pub assignments: u64,
    /// Assignments forced by singleton propagation.
    pub forced_assignments: u64,
    /// Candidates skipped because a neighbor already held the color.
    pub rejected_candidates: u64,
    /// Domains emptied by forward checking or propagation.
    pub wipeouts: u64,
    /// Failed branch attempts.
    pub backtracks: u64,
    /// Deepest decision level reached (root is 0).
    pub max_depth: usize,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_selection(&mut self, depth: usize) {
        self.selections += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_assignment(&mut self) {
        self.assignments += 1;
    }

    pub fn record_forced_assignment(&mut self) {
        self.forced_assignments += 1;
    }

    pub fn record_rejected_candidate(&mut self) {
        self.rejected_candidates += 1;
    }

    pub fn record_wipeout(&mut self) {
        self.wipeouts += 1;
    }

    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    /// Returns branch assignments per second.
    pub fn assignments_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.assignments as f64 / secs
        } else {
            0.0
        }
    }
}
