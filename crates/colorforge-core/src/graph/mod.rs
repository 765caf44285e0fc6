//! Read-only adjacency structure over node identifiers.
//!
//! Nodes are stored in input order and addressed internally by a dense
//! [`NodeId`]. Input order is significant: it is the default variable order
//! of the search and the source of the estimator's tie-breaks, so a caller
//! that wants to randomize exploration reorders the graph with
//! [`Graph::reordered`].
//!
//! # Example
//!
//! ```
//! use colorforge_core::Graph;
//!
//! let graph = Graph::from_adjacency([
//!     ("WA", vec!["NT", "SA"]),
//!     ("NT", vec!["WA", "SA"]),
//!     ("SA", vec!["WA", "NT"]),
//! ]).unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! assert_eq!(graph.max_degree(), 2);
//! ```

mod builder;

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::error::GraphError;

pub use builder::GraphBuilder;

/// Requirements on a node identifier.
///
/// `Ord` is needed by the chromatic estimator, which breaks degree ties by
/// identifier.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> NodeKey for T {}

/// Dense index of a node within one [`Graph`], in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a node id from a raw index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Undirected graph with symmetric, loop-free adjacency.
///
/// Every constructor validates or guarantees the invariants the search relies
/// on, so a `Graph` value is always well formed.
#[derive(Clone)]
pub struct Graph<N> {
    keys: Vec<N>,
    index: HashMap<N, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
}

impl<N: NodeKey> Graph<N> {
    /// Creates a graph with no nodes.
    pub fn empty() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Builds a graph from `(node, neighbors)` entries.
    ///
    /// Node order and per-node neighbor order are preserved.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] for duplicate nodes, unknown neighbors,
    /// self-loops, repeated neighbors or asymmetric edges.
    pub fn from_adjacency<I, A>(entries: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, A)>,
        A: IntoIterator<Item = N>,
    {
        let mut keys = Vec::new();
        let mut index = HashMap::new();
        let mut raw_neighbors = Vec::new();

        for (key, neighbors) in entries {
            let id = NodeId(keys.len());
            if index.insert(key.clone(), id).is_some() {
                return Err(GraphError::DuplicateNode {
                    node: format!("{key:?}"),
                });
            }
            keys.push(key);
            raw_neighbors.push(neighbors.into_iter().collect::<Vec<_>>());
        }

        let mut adjacency = Vec::with_capacity(keys.len());
        for (node, neighbors) in raw_neighbors.into_iter().enumerate() {
            let mut resolved: Vec<NodeId> = Vec::with_capacity(neighbors.len());
            for neighbor in neighbors {
                let Some(&id) = index.get(&neighbor) else {
                    return Err(GraphError::DanglingNeighbor {
                        node: format!("{:?}", keys[node]),
                        neighbor: format!("{neighbor:?}"),
                    });
                };
                if id.0 == node {
                    return Err(GraphError::SelfLoop {
                        node: format!("{:?}", keys[node]),
                    });
                }
                if resolved.contains(&id) {
                    return Err(GraphError::DuplicateNeighbor {
                        node: format!("{:?}", keys[node]),
                        neighbor: format!("{neighbor:?}"),
                    });
                }
                resolved.push(id);
            }
            adjacency.push(resolved);
        }

        for (node, neighbors) in adjacency.iter().enumerate() {
            for neighbor in neighbors {
                if !adjacency[neighbor.0].contains(&NodeId(node)) {
                    return Err(GraphError::AsymmetricEdge {
                        from: format!("{:?}", keys[node]),
                        to: format!("{:?}", keys[neighbor.0]),
                    });
                }
            }
        }

        Ok(Self {
            keys,
            index,
            adjacency,
        })
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterates node ids in input order.
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.keys.len()).map(NodeId)
    }

    /// Iterates node identifiers in input order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &N> {
        self.keys.iter()
    }

    /// Returns the identifier of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn key(&self, id: NodeId) -> &N {
        &self.keys[id.0]
    }

    /// Looks up the id of an identifier.
    pub fn id_of(&self, key: &N) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Returns the neighbors of a node in their input order.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id.0]
    }

    /// Returns the number of neighbors of a node.
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency[id.0].len()
    }

    /// Returns the largest degree, or 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns true if `a` and `b` share an edge.
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency[a.0].contains(&b)
    }

    /// Iterates each undirected edge once, earlier node first.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(node, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |neighbor| neighbor.0 > node)
                    .map(move |neighbor| (&self.keys[node], &self.keys[neighbor.0]))
            })
    }

    /// Iterates `(node, neighbors)` pairs in input order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&N, Vec<&N>)> {
        self.keys.iter().zip(&self.adjacency).map(move |(key, ids)| {
            let neighbors = ids.iter().map(|id| &self.keys[id.0]).collect();
            (key, neighbors)
        })
    }

    /// Returns the same graph with nodes iterated in `order`.
    ///
    /// `order[i]` is the current id of the node that becomes the `i`-th node.
    /// Neighbor lists keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidNodeOrder`] if `order` is not a
    /// permutation of this graph's node ids.
    pub fn reordered(&self, order: &[NodeId]) -> Result<Self, GraphError> {
        let node_count = self.node_count();
        let invalid = || GraphError::InvalidNodeOrder { node_count };
        if order.len() != node_count {
            return Err(invalid());
        }

        let mut new_position: Vec<Option<NodeId>> = vec![None; node_count];
        for (position, old) in order.iter().enumerate() {
            let Some(slot) = new_position.get_mut(old.0) else {
                return Err(invalid());
            };
            if slot.is_some() {
                return Err(invalid());
            }
            *slot = Some(NodeId(position));
        }
        // Every slot is filled once the loop above completes.
        let remap = |old: NodeId| new_position[old.0].unwrap_or(old);

        let keys: Vec<N> = order.iter().map(|old| self.keys[old.0].clone()).collect();
        let index = keys
            .iter()
            .enumerate()
            .map(|(position, key)| (key.clone(), NodeId(position)))
            .collect();
        let adjacency = order
            .iter()
            .map(|old| self.adjacency[old.0].iter().map(|&n| remap(n)).collect())
            .collect();

        Ok(Self {
            keys,
            index,
            adjacency,
        })
    }

    pub(crate) fn from_parts(keys: Vec<N>, adjacency: Vec<Vec<NodeId>>) -> Self {
        let index = keys
            .iter()
            .enumerate()
            .map(|(position, key)| (key.clone(), NodeId(position)))
            .collect();
        Self {
            keys,
            index,
            adjacency,
        }
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N: NodeKey> Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.adjacency()).finish()
    }
}
