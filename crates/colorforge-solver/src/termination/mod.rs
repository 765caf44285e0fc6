//! Termination conditions for the search.
//!
//! Conditions are consulted every time the search selects a variable. A
//! triggered condition unwinds the recursion and the result reports
//! [`SearchOutcome::Terminated`](crate::SearchOutcome::Terminated).

mod backtrack_count;
mod composite;
mod external;
mod step_count;
mod time;

use std::fmt::Debug;

use crate::stats::SearchStats;

pub use backtrack_count::BacktrackCountTermination;
pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, stats: &SearchStats) -> bool;
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _stats: &SearchStats) -> bool {
        false
    }
}

/// An absent condition never terminates.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(stats))
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        (**self).is_terminated(stats)
    }
}

#[cfg(test)]
mod tests;
