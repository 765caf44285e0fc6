//! Assertion helpers for colorings.

use std::fmt::Debug;

use colorforge_core::{Coloring, Graph, NodeKey};

/// Panics unless `coloring` is a proper coloring of `graph`.
///
/// Reports the first uncolored node or every conflicting edge.
pub fn assert_proper_coloring<N, C>(graph: &Graph<N>, coloring: &Coloring<N, C>)
where
    N: NodeKey,
    C: PartialEq + Debug,
{
    if let Some(missing) = graph.keys().find(|key| coloring.get(key).is_none()) {
        panic!("node {missing:?} is not colored");
    }
    let conflicts = coloring.conflicts(graph);
    assert!(
        conflicts.is_empty(),
        "adjacent nodes share a color: {conflicts:?}"
    );
}

/// Panics unless `coloring` uses exactly `expected` distinct colors.
pub fn assert_color_count<N, C>(coloring: &Coloring<N, C>, expected: usize)
where
    N: NodeKey,
    C: PartialEq,
{
    let used = coloring.distinct_color_count();
    assert_eq!(used, expected, "expected {expected} colors, found {used}");
}
