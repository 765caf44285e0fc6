//! Value orderers.

use colorforge_core::{ColorId, NodeId, NodeKey};

use super::{Candidates, ValueOrderer};
use crate::scope::SearchScope;

/// Colors in stored domain order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainOrder;

impl ValueOrderer for DomainOrder {
    fn order<N: NodeKey>(&self, scope: &SearchScope<'_, N>, node: NodeId) -> Candidates {
        scope.domains().domain(node).iter().copied().collect()
    }
}

/// Colors that rule out the fewest options for unassigned neighbors first.
///
/// The sort is stable, so colors with equal conflict counts keep domain
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstrainingValue;

impl LeastConstrainingValue {
    /// Counts unassigned neighbors of `node` whose domain still holds `color`.
    pub fn conflicts<N: NodeKey>(scope: &SearchScope<'_, N>, node: NodeId, color: ColorId) -> usize {
        scope
            .graph()
            .neighbors(node)
            .iter()
            .filter(|&&neighbor| {
                !scope.assignment().is_assigned(neighbor)
                    && scope.domains().contains(neighbor, color)
            })
            .count()
    }
}

impl ValueOrderer for LeastConstrainingValue {
    fn order<N: NodeKey>(&self, scope: &SearchScope<'_, N>, node: NodeId) -> Candidates {
        let mut candidates = DomainOrder.order(scope, node);
        candidates.sort_by_key(|&color| Self::conflicts(scope, node, color));
        candidates
    }
}
