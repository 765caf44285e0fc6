//! Legality of a single assignment.

use colorforge_core::{ColorId, Graph, NodeId, NodeKey};

use crate::assignment::Assignment;

/// Returns true if no neighbor of `node` currently holds `color`.
///
/// Runs in O(degree) and mutates nothing.
///
/// # Example
///
/// ```
/// use colorforge_core::{ColorId, Graph, NodeId};
/// use colorforge_solver::assignment::Assignment;
/// use colorforge_solver::consistency::is_legal;
///
/// let graph = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["A"])]).unwrap();
/// let mut assignment = Assignment::new(2);
/// assignment.assign(NodeId::new(0), ColorId::new(0));
///
/// assert!(!is_legal(&graph, &assignment, NodeId::new(1), ColorId::new(0)));
/// assert!(is_legal(&graph, &assignment, NodeId::new(1), ColorId::new(1)));
/// ```
pub fn is_legal<N: NodeKey>(
    graph: &Graph<N>,
    assignment: &Assignment,
    node: NodeId,
    color: ColorId,
) -> bool {
    graph
        .neighbors(node)
        .iter()
        .all(|&neighbor| assignment.get(neighbor) != Some(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorforge_test::graphs::{isolated, star};

    #[test]
    fn test_ignores_non_neighbors() {
        let graph = star(3);
        let mut assignment = Assignment::new(4);
        assignment.assign(NodeId::new(1), ColorId::new(0));
        // Leaves are not adjacent to each other.
        assert!(is_legal(&graph, &assignment, NodeId::new(2), ColorId::new(0)));
        assert!(!is_legal(&graph, &assignment, NodeId::new(0), ColorId::new(0)));
    }

    #[test]
    fn test_isolated_node_always_legal() {
        let graph = isolated(2);
        let mut assignment = Assignment::new(2);
        assignment.assign(NodeId::new(0), ColorId::new(0));
        assert!(is_legal(&graph, &assignment, NodeId::new(1), ColorId::new(0)));
    }
}
