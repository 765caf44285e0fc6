//! Per-call search state.

use colorforge_core::{ColorId, Graph, NodeId, NodeKey};

use crate::assignment::Assignment;
use crate::domain::{DomainCheckpoint, DomainStore};
use crate::stats::SearchStats;

/// Everything one search call mutates.
///
/// The scope exclusively owns domains, the partial assignment and the
/// statistics, so concurrent searches over the same graph never share
/// counters.
#[derive(Debug)]
pub struct SearchScope<'g, N: NodeKey> {
    graph: &'g Graph<N>,
    domains: DomainStore,
    assignment: Assignment,
    stats: SearchStats,
}

/// Restore point taken before a branch attempt.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    domains: DomainCheckpoint,
    trail_len: usize,
}

impl<'g, N: NodeKey> SearchScope<'g, N> {
    /// Creates a scope where every node can take any of `palette_len` colors.
    pub fn new(graph: &'g Graph<N>, palette_len: usize) -> Self {
        Self {
            graph,
            domains: DomainStore::new(graph.node_count(), palette_len),
            assignment: Assignment::new(graph.node_count()),
            stats: SearchStats::default(),
        }
    }

    pub fn graph(&self) -> &'g Graph<N> {
        self.graph
    }

    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub fn domains_mut(&mut self) -> &mut DomainStore {
        &mut self.domains
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Assigns `color` to `node`.
    pub fn assign(&mut self, node: NodeId, color: ColorId) {
        self.assignment.assign(node, color);
    }

    /// Counts unassigned neighbors of `node`.
    pub fn unassigned_degree(&self, node: NodeId) -> usize {
        self.graph
            .neighbors(node)
            .iter()
            .filter(|&&neighbor| !self.assignment.is_assigned(neighbor))
            .count()
    }

    /// Captures domains and assignment.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            domains: self.domains.checkpoint(),
            trail_len: self.assignment.trail_len(),
        }
    }

    /// Restores domains and assignment to `checkpoint`.
    ///
    /// Undoes the branch decision and any assignment forced after it.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.domains.rollback(checkpoint.domains);
        self.assignment.undo_to(checkpoint.trail_len);
    }
}

#[cfg(test)]
mod tests;
