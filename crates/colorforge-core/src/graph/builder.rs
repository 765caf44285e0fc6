//! Edge-list construction of graphs.

use std::collections::HashMap;

use super::{Graph, NodeId, NodeKey};
use crate::error::GraphError;

/// Incremental graph builder that keeps adjacency symmetric by construction.
///
/// Nodes are numbered in first-mention order. Adding an edge twice is a
/// no-op; self-loops are rejected.
///
/// # Example
///
/// ```
/// use colorforge_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_edge("A", "B").unwrap();
/// builder.add_edge("B", "C").unwrap();
/// builder.add_edge("C", "A").unwrap();
/// builder.add_node("D");
///
/// let graph = builder.build();
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    keys: Vec<N>,
    index: HashMap<N, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
}

impl<N: NodeKey> GraphBuilder<N> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Adds a node if it is not present yet and returns its id.
    pub fn add_node(&mut self, key: N) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId::new(self.keys.len());
        self.index.insert(key.clone(), id);
        self.keys.push(key);
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds an undirected edge, creating missing endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if both endpoints are the same node.
    pub fn add_edge(&mut self, a: N, b: N) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop {
                node: format!("{a:?}"),
            });
        }
        let a = self.add_node(a);
        let b = self.add_node(b);
        if !self.adjacency[a.index()].contains(&b) {
            self.adjacency[a.index()].push(b);
            self.adjacency[b.index()].push(a);
        }
        Ok(())
    }

    /// Consuming variant of [`add_edge`](Self::add_edge) for chaining.
    pub fn with_edge(mut self, a: N, b: N) -> Result<Self, GraphError> {
        self.add_edge(a, b)?;
        Ok(self)
    }

    /// Returns the number of nodes added so far.
    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    pub fn build(self) -> Graph<N> {
        Graph::from_parts(self.keys, self.adjacency)
    }
}

impl<N: NodeKey> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
