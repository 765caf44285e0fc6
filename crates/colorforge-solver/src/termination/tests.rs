//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;

#[test]
fn test_step_count_termination() {
    let mut stats = SearchStats::default();
    let term = StepCountTermination::new(3);

    assert!(!term.is_terminated(&stats));
    stats.record_selection(0);
    stats.record_selection(1);
    assert!(!term.is_terminated(&stats));
    stats.record_selection(2);
    assert!(term.is_terminated(&stats));
}

#[test]
fn test_backtrack_count_termination() {
    let mut stats = SearchStats::default();
    let term = BacktrackCountTermination::new(2);

    stats.record_backtrack();
    assert!(!term.is_terminated(&stats));
    stats.record_backtrack();
    assert!(term.is_terminated(&stats));
}

#[test]
fn test_time_termination() {
    let mut stats = SearchStats::default();
    stats.start();
    assert!(!TimeTermination::seconds(3600).is_terminated(&stats));
    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&stats));
}

#[test]
fn test_external_termination() {
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));
    let stats = SearchStats::default();

    assert!(!term.is_terminated(&stats));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&stats));
}

#[test]
fn test_or_termination() {
    let mut stats = SearchStats::default();
    let term = OrTermination((
        StepCountTermination::new(10),
        BacktrackCountTermination::new(1),
    ));

    assert!(!term.is_terminated(&stats));
    stats.record_backtrack();
    assert!(term.is_terminated(&stats));
}

#[test]
fn test_no_termination_and_none() {
    let mut stats = SearchStats::default();
    stats.selections = u64::MAX;
    assert!(!NoTermination.is_terminated(&stats));
    assert!(!None::<StepCountTermination>.is_terminated(&stats));
    assert!(Some(StepCountTermination::new(1)).is_terminated(&stats));
}

#[test]
fn test_boxed_termination() {
    let mut stats = SearchStats::default();
    let term: Box<dyn Termination> = Box::new(BacktrackCountTermination::new(1));
    assert!(!term.is_terminated(&stats));
    stats.backtracks = 1;
    assert!(term.is_terminated(&stats));
}
