//! Complete node-to-color assignments.

use std::collections::HashMap;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NodeKey};

/// A color for every node, in graph input order.
///
/// Produced by a successful search; this is the only thing renderers and
/// other consumers see.
///
/// # Example
///
/// ```
/// use colorforge_core::{Coloring, Graph};
///
/// let graph = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["A"])]).unwrap();
/// let coloring = Coloring::from_entries(vec![("A", "red"), ("B", "blue")]);
///
/// assert_eq!(coloring.get(&"B"), Some(&"blue"));
/// assert_eq!(coloring.distinct_color_count(), 2);
/// assert!(coloring.is_proper_for(&graph));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<(N, C)>",
        into = "Vec<(N, C)>",
        bound(
            serialize = "N: NodeKey + Serialize, C: Clone + Serialize",
            deserialize = "N: NodeKey + Deserialize<'de>, C: Deserialize<'de>"
        )
    )
)]
pub struct Coloring<N: NodeKey, C> {
    entries: Vec<(N, C)>,
    index: HashMap<N, usize>,
}

impl<N: NodeKey, C> Coloring<N, C> {
    /// Creates a coloring from `(node, color)` pairs.
    ///
    /// If a node appears twice, the later entry wins on lookup.
    pub fn from_entries(entries: Vec<(N, C)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (node, _))| (node.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Returns the color of a node.
    pub fn get(&self, node: &N) -> Option<&C> {
        self.index.get(node).map(|&i| &self.entries[i].1)
    }

    /// Iterates `(node, color)` pairs in graph order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&N, &C)> {
        self.entries.iter().map(|(node, color)| (node, color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(N, C)> {
        self.entries
    }
}

impl<N: NodeKey, C: PartialEq> Coloring<N, C> {
    /// Returns the number of distinct colors actually used.
    pub fn distinct_color_count(&self) -> usize {
        let mut seen: Vec<&C> = Vec::new();
        for (_, color) in &self.entries {
            if !seen.contains(&color) {
                seen.push(color);
            }
        }
        seen.len()
    }

    /// Returns every edge of `graph` whose endpoints share a color.
    ///
    /// Nodes missing from the coloring never conflict.
    pub fn conflicts<'g>(&self, graph: &'g Graph<N>) -> Vec<(&'g N, &'g N)> {
        graph
            .edges()
            .filter(|(a, b)| match (self.get(a), self.get(b)) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            })
            .collect()
    }

    /// Returns true if every node of `graph` is colored and no edge joins two
    /// nodes of the same color.
    pub fn is_proper_for(&self, graph: &Graph<N>) -> bool {
        graph.keys().all(|key| self.get(key).is_some()) && self.conflicts(graph).is_empty()
    }
}

impl<N: NodeKey, C> From<Vec<(N, C)>> for Coloring<N, C> {
    fn from(entries: Vec<(N, C)>) -> Self {
        Self::from_entries(entries)
    }
}

impl<N: NodeKey, C> From<Coloring<N, C>> for Vec<(N, C)> {
    fn from(coloring: Coloring<N, C>) -> Self {
        coloring.entries
    }
}
