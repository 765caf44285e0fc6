//! Variable selectors.

use colorforge_core::{NodeId, NodeKey};

use super::VariableSelector;
use crate::scope::SearchScope;

/// First unassigned node in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select<N: NodeKey>(&self, scope: &SearchScope<'_, N>) -> Option<NodeId> {
        scope.assignment().unassigned().next()
    }
}

/// Smallest remaining domain, then most unassigned neighbors, then input
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemainingValues;

impl VariableSelector for MinimumRemainingValues {
    fn select<N: NodeKey>(&self, scope: &SearchScope<'_, N>) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize, usize)> = None;
        for node in scope.assignment().unassigned() {
            let size = scope.domains().size(node);
            let degree = scope.unassigned_degree(node);
            let better = match best {
                None => true,
                // Strict comparison keeps the earliest node on ties.
                Some((_, best_size, best_degree)) => {
                    size < best_size || (size == best_size && degree > best_degree)
                }
            };
            if better {
                best = Some((node, size, degree));
            }
        }
        best.map(|(node, _, _)| node)
    }
}
