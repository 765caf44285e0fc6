//! Error types for ColorForge

use thiserror::Error;

/// Structural violations detected while building a [`Graph`](crate::Graph).
///
/// Node identifiers are rendered with their `Debug` representation so the
/// error stays independent of the key type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The same identifier appears twice as a key.
    #[error("node {node} is defined more than once")]
    DuplicateNode { node: String },

    /// A neighbor list references an identifier that is not a key.
    #[error("node {node} references unknown neighbor {neighbor}")]
    DanglingNeighbor { node: String, neighbor: String },

    /// A node lists itself as a neighbor.
    #[error("node {node} lists itself as a neighbor")]
    SelfLoop { node: String },

    /// A neighbor list contains the same identifier twice.
    #[error("node {node} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { node: String, neighbor: String },

    /// `to` appears in `from`'s neighbor list but not the other way round.
    #[error("edge {from} -> {to} has no matching edge {to} -> {from}")]
    AsymmetricEdge { from: String, to: String },

    /// A reordering was not a permutation of the graph's nodes.
    #[error("node order is not a permutation of the {node_count} graph nodes")]
    InvalidNodeOrder { node_count: usize },
}

/// Main error type for ColorForge operations
#[derive(Debug, Error)]
pub enum ColorForgeError {
    /// The input graph violates an adjacency invariant
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    /// The palette or token sequence cannot be used
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for ColorForge operations
pub type Result<T> = std::result::Result<T, ColorForgeError>;
