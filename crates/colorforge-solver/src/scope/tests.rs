//! Tests for the search scope.

use super::*;
use colorforge_test::graphs::{star, triangle};

#[test]
fn test_new_scope() {
    let graph = triangle();
    let scope = SearchScope::new(&graph, 3);
    assert_eq!(scope.domains().node_count(), 3);
    assert!(scope.assignment().is_empty());
    assert_eq!(scope.stats().backtracks, 0);
}

#[test]
fn test_unassigned_degree() {
    let graph = star(4);
    let mut scope = SearchScope::new(&graph, 2);
    assert_eq!(scope.unassigned_degree(NodeId::new(0)), 4);
    scope.assign(NodeId::new(1), ColorId::new(0));
    scope.assign(NodeId::new(2), ColorId::new(0));
    assert_eq!(scope.unassigned_degree(NodeId::new(0)), 2);
    assert_eq!(scope.unassigned_degree(NodeId::new(3)), 1);
}

#[test]
fn test_rollback_restores_domains_and_assignment() {
    let graph = triangle();
    let mut scope = SearchScope::new(&graph, 3);
    scope.assign(NodeId::new(0), ColorId::new(0));
    scope.domains_mut().remove(NodeId::new(1), ColorId::new(0));
    let domains_before = scope.domains().clone();
    let assignment_before = scope.assignment().clone();

    let checkpoint = scope.checkpoint();
    scope.assign(NodeId::new(1), ColorId::new(1));
    scope.domains_mut().remove(NodeId::new(2), ColorId::new(1));
    scope.assign(NodeId::new(2), ColorId::new(2));
    scope.rollback(checkpoint);

    assert_eq!(scope.domains(), &domains_before);
    assert_eq!(scope.assignment(), &assignment_before);
}
