//! Forward checking and singleton propagation.
//!
//! Both routines only shrink domains and extend the assignment; the caller
//! takes a [`Checkpoint`](crate::scope::Checkpoint) first and rolls back on
//! [`Contradiction`].

use colorforge_core::{ColorId, NodeId, NodeKey};
use tracing::trace;

use crate::consistency::is_legal;
use crate::scope::SearchScope;

/// Why a branch attempt cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contradiction {
    /// A node has no color left.
    Wipeout { node: NodeId },
    /// The only color left for a node is held by a neighbor.
    IllegalForcedColor { node: NodeId, color: ColorId },
}

/// Removes `color` from every unassigned neighbor of `node`.
///
/// Stops at the first neighbor whose domain becomes empty.
pub fn forward_check<N: NodeKey>(
    scope: &mut SearchScope<'_, N>,
    node: NodeId,
    color: ColorId,
) -> Result<(), Contradiction> {
    let graph = scope.graph();
    for &neighbor in graph.neighbors(node) {
        if scope.assignment().is_assigned(neighbor) {
            continue;
        }
        let domains = scope.domains_mut();
        if domains.remove(neighbor, color) && domains.is_wiped_out(neighbor) {
            scope.stats_mut().record_wipeout();
            return Err(Contradiction::Wipeout { node: neighbor });
        }
    }
    Ok(())
}

/// Assigns every unassigned node whose domain holds a single color, then
/// forward-checks its neighbors, until a pass forces nothing.
///
/// Returns the number of forced assignments.
pub fn propagate_singletons<N: NodeKey>(
    scope: &mut SearchScope<'_, N>,
) -> Result<usize, Contradiction> {
    let mut forced = 0;
    loop {
        let singletons: Vec<NodeId> = scope
            .assignment()
            .unassigned()
            .filter(|&node| scope.domains().size(node) <= 1)
            .collect();
        if singletons.is_empty() {
            return Ok(forced);
        }

        for node in singletons {
            let Some(color) = scope.domains().singleton(node) else {
                scope.stats_mut().record_wipeout();
                return Err(Contradiction::Wipeout { node });
            };
            if !is_legal(scope.graph(), scope.assignment(), node, color) {
                return Err(Contradiction::IllegalForcedColor { node, color });
            }
            scope.assign(node, color);
            scope.stats_mut().record_forced_assignment();
            forced += 1;
            trace!(
                event = "forced",
                node = ?scope.graph().key(node),
                color = color.index(),
            );
            forward_check(scope, node, color)?;
        }
    }
}
