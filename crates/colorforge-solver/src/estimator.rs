//! Greedy upper bound on the chromatic number.
//!
//! Nodes are visited by `(degree, key)` descending and each takes the first
//! token of a sequence that no already-colored neighbor holds. The number of
//! distinct tokens used is an upper bound, never presented as exact.

use std::fmt::Debug;

use colorforge_core::{ColorForgeError, Coloring, Graph, NodeId, NodeKey, Result};
use tracing::info;

/// A greedy coloring and the bound it witnesses.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyColoring<T> {
    bound: usize,
    tokens: Vec<T>,
}

impl<T> GreedyColoring<T> {
    /// Number of distinct tokens used.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Token of a node.
    pub fn token(&self, node: NodeId) -> &T {
        &self.tokens[node.index()]
    }

    /// Tokens in node order.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Pairs every node key with its token.
    pub fn to_coloring<N: NodeKey>(&self, graph: &Graph<N>) -> Coloring<N, T>
    where
        T: Clone,
    {
        Coloring::from_entries(
            graph
                .keys()
                .cloned()
                .zip(self.tokens.iter().cloned())
                .collect(),
        )
    }
}

/// Returns an upper bound on the number of colors `graph` needs.
///
/// Always at most `node_count` and at most `max_degree + 1`; an empty graph
/// yields 0.
///
/// # Example
///
/// ```
/// use colorforge_core::Graph;
/// use colorforge_solver::estimate_chromatic_number;
///
/// let path = Graph::from_adjacency([
///     ("A", vec!["B"]),
///     ("B", vec!["A", "C"]),
///     ("C", vec!["B"]),
/// ]).unwrap();
///
/// assert_eq!(estimate_chromatic_number(&path), 2);
/// ```
pub fn estimate_chromatic_number<N: NodeKey>(graph: &Graph<N>) -> usize {
    let bound = greedy_coloring(graph).bound();
    info!(
        event = "estimate",
        node_count = graph.node_count(),
        max_degree = graph.max_degree(),
        bound,
    );
    bound
}

/// Greedy coloring using node positions `0..node_count` as tokens.
pub fn greedy_coloring<N: NodeKey>(graph: &Graph<N>) -> GreedyColoring<usize> {
    let slots = first_fit_slots(graph);
    let bound = distinct_slots(&slots);
    GreedyColoring {
        bound,
        tokens: slots,
    }
}

/// Greedy coloring drawing tokens from `tokens`, in order.
///
/// Passing `graph.keys().cloned()` colors nodes with node identifiers.
///
/// # Errors
///
/// Returns [`ColorForgeError::InvalidPalette`] if the sequence runs out
/// before every node is colored, or repeats a token it had to use.
pub fn greedy_coloring_with<N, T, I>(graph: &Graph<N>, tokens: I) -> Result<GreedyColoring<T>>
where
    N: NodeKey,
    T: Clone + PartialEq + Debug,
    I: IntoIterator<Item = T>,
{
    let slots = first_fit_slots(graph);
    let bound = distinct_slots(&slots);
    let available: Vec<T> = tokens.into_iter().take(bound).collect();
    if available.len() < bound {
        return Err(ColorForgeError::InvalidPalette(format!(
            "greedy coloring needs {bound} tokens, sequence yielded {}",
            available.len()
        )));
    }
    for (i, token) in available.iter().enumerate() {
        if available[..i].contains(token) {
            return Err(ColorForgeError::InvalidPalette(format!(
                "token {token:?} appears more than once"
            )));
        }
    }
    Ok(GreedyColoring {
        bound,
        tokens: slots.iter().map(|&slot| available[slot].clone()).collect(),
    })
}

/// Returns, per node, the index of the first token not held by a colored
/// neighbor, visiting nodes by `(degree, key)` descending.
fn first_fit_slots<N: NodeKey>(graph: &Graph<N>) -> Vec<usize> {
    let mut order: Vec<NodeId> = graph.node_ids().collect();
    order.sort_by(|&a, &b| {
        (graph.degree(b), graph.key(b)).cmp(&(graph.degree(a), graph.key(a)))
    });

    let mut slots: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut taken: Vec<bool> = Vec::new();
    for node in order {
        taken.clear();
        taken.resize(graph.degree(node) + 1, false);
        for &neighbor in graph.neighbors(node) {
            if let Some(slot) = slots[neighbor.index()] {
                if slot < taken.len() {
                    taken[slot] = true;
                }
            }
        }
        // A node has at most `degree` colored neighbors, so a free slot
        // always exists within `0..=degree`.
        let slot = taken.iter().position(|&t| !t).unwrap_or(taken.len());
        slots[node.index()] = Some(slot);
    }
    slots.into_iter().map(|slot| slot.unwrap_or(0)).collect()
}

fn distinct_slots(slots: &[usize]) -> usize {
    // First-fit slots are downward closed, so the count is max + 1.
    slots.iter().max().map_or(0, |&max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorforge_test::assert_proper_coloring;
    use colorforge_test::graphs::{complete, cycle, isolated, petersen, star, triangle, wheel};

    #[test]
    fn test_known_bounds() {
        assert_eq!(estimate_chromatic_number(&triangle()), 3);
        assert_eq!(estimate_chromatic_number(&star(4)), 2);
        assert_eq!(estimate_chromatic_number(&isolated(5)), 1);
        assert_eq!(estimate_chromatic_number(&complete(5)), 5);
        assert_eq!(estimate_chromatic_number(&cycle(4)), 2);
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(estimate_chromatic_number(&Graph::<u32>::empty()), 0);
        assert!(greedy_coloring(&Graph::<u32>::empty()).tokens().is_empty());
    }

    #[test]
    fn test_bound_limits() {
        for graph in [cycle(5), cycle(6), wheel(5), wheel(6), petersen(), star(7)] {
            let bound = estimate_chromatic_number(&graph);
            assert!(bound <= graph.node_count());
            assert!(bound <= graph.max_degree() + 1);
            assert!(bound >= 1);
        }
    }

    #[test]
    fn test_witness_is_proper() {
        for graph in [cycle(7), wheel(5), petersen(), complete(4)] {
            let greedy = greedy_coloring(&graph);
            let coloring = greedy.to_coloring(&graph);
            assert_proper_coloring(&graph, &coloring);
            assert_eq!(coloring.distinct_color_count(), greedy.bound());
        }
    }

    #[test]
    fn test_highest_degree_first() {
        let graph = star(3);
        let greedy = greedy_coloring(&graph);
        assert_eq!(*greedy.token(NodeId::new(0)), 0);
        assert_eq!(greedy.tokens(), &[0, 1, 1, 1]);
    }

    #[test]
    fn test_degree_ties_by_key_descending() {
        let graph = triangle();
        let greedy = greedy_coloring(&graph);
        // C is visited first, then B, then A.
        assert_eq!(greedy.tokens(), &[2, 1, 0]);
    }

    #[test]
    fn test_custom_tokens() {
        let graph = star(2);
        let greedy = greedy_coloring_with(&graph, ["red", "green", "blue"]).unwrap();
        assert_eq!(greedy.bound(), 2);
        assert_eq!(greedy.tokens(), &["red", "green", "green"]);
    }

    #[test]
    fn test_node_keys_as_tokens() {
        let graph = triangle();
        let greedy = greedy_coloring_with(&graph, graph.keys().cloned()).unwrap();
        assert_eq!(greedy.bound(), 3);
        assert_eq!(greedy.tokens(), &["C", "B", "A"]);
    }

    #[test]
    fn test_token_sequence_exhausted() {
        let err = greedy_coloring_with(&triangle(), [1, 2]).unwrap_err();
        assert!(matches!(err, ColorForgeError::InvalidPalette(_)));
    }

    #[test]
    fn test_duplicate_tokens_rejected() {
        let err = greedy_coloring_with(&triangle(), [1, 1, 2]).unwrap_err();
        assert!(matches!(err, ColorForgeError::InvalidPalette(_)));
    }

    #[test]
    fn test_infinite_token_sequence() {
        let greedy = greedy_coloring_with(&complete(4), 10..).unwrap();
        assert_eq!(greedy.bound(), 4);
    }
}
