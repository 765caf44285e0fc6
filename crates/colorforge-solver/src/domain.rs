//! Per-node domains with checkpoint/rollback.
//!
//! Domains live in an arena indexed by [`NodeId`]. A checkpoint is a full
//! copy of every domain; rolling back replaces the live domains with it, so
//! any sequence of removals between the two is undone exactly.

use colorforge_core::{ColorId, NodeId};
use smallvec::SmallVec;

/// Ordered, duplicate-free list of the colors still legal for one node.
pub type Domain = SmallVec<[ColorId; 8]>;

/// Domains of every node of a graph.
///
/// # Example
///
/// ```
/// use colorforge_core::{ColorId, NodeId};
/// use colorforge_solver::domain::DomainStore;
///
/// let mut domains = DomainStore::new(2, 3);
/// let checkpoint = domains.checkpoint();
///
/// assert!(domains.remove(NodeId::new(0), ColorId::new(1)));
/// assert_eq!(domains.domain(NodeId::new(0)), &[ColorId::new(0), ColorId::new(2)]);
///
/// domains.rollback(checkpoint);
/// assert_eq!(domains.size(NodeId::new(0)), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<Domain>,
}

/// Snapshot of a [`DomainStore`], restored by [`DomainStore::rollback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheckpoint {
    domains: Vec<Domain>,
}

impl DomainStore {
    /// Gives every node the full palette `0..palette_len`, in palette order.
    pub fn new(node_count: usize, palette_len: usize) -> Self {
        let full: Domain = (0..palette_len).map(ColorId::new).collect();
        Self {
            domains: vec![full; node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.domains.len()
    }

    /// Returns the remaining colors of a node in stored order.
    pub fn domain(&self, node: NodeId) -> &[ColorId] {
        &self.domains[node.index()]
    }

    /// Returns the number of remaining colors of a node.
    pub fn size(&self, node: NodeId) -> usize {
        self.domains[node.index()].len()
    }

    pub fn contains(&self, node: NodeId, color: ColorId) -> bool {
        self.domains[node.index()].contains(&color)
    }

    /// Returns true if the node has no color left.
    pub fn is_wiped_out(&self, node: NodeId) -> bool {
        self.domains[node.index()].is_empty()
    }

    /// Returns the only remaining color, if exactly one is left.
    pub fn singleton(&self, node: NodeId) -> Option<ColorId> {
        match self.domains[node.index()].as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Removes a color, keeping the order of the others.
    ///
    /// Returns false if the color was already absent.
    pub fn remove(&mut self, node: NodeId, color: ColorId) -> bool {
        let domain = &mut self.domains[node.index()];
        match domain.iter().position(|&c| c == color) {
            Some(position) => {
                domain.remove(position);
                true
            }
            None => false,
        }
    }

    /// Copies every domain.
    pub fn checkpoint(&self) -> DomainCheckpoint {
        DomainCheckpoint {
            domains: self.domains.clone(),
        }
    }

    /// Replaces every domain with a previous checkpoint.
    pub fn rollback(&mut self, checkpoint: DomainCheckpoint) {
        self.domains = checkpoint.domains;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn c(i: usize) -> ColorId {
        ColorId::new(i)
    }

    #[test]
    fn test_new_gives_full_palette() {
        let domains = DomainStore::new(3, 4);
        assert_eq!(domains.node_count(), 3);
        for i in 0..3 {
            assert_eq!(domains.domain(n(i)), &[c(0), c(1), c(2), c(3)]);
        }
    }

    #[test]
    fn test_remove_preserves_order_and_is_idempotent() {
        let mut domains = DomainStore::new(1, 4);
        assert!(domains.remove(n(0), c(1)));
        assert!(!domains.remove(n(0), c(1)));
        assert_eq!(domains.domain(n(0)), &[c(0), c(2), c(3)]);
        assert!(!domains.contains(n(0), c(1)));
        assert!(domains.contains(n(0), c(3)));
    }

    #[test]
    fn test_singleton_and_wipeout() {
        let mut domains = DomainStore::new(1, 2);
        assert_eq!(domains.singleton(n(0)), None);
        domains.remove(n(0), c(0));
        assert_eq!(domains.singleton(n(0)), Some(c(1)));
        assert!(!domains.is_wiped_out(n(0)));
        domains.remove(n(0), c(1));
        assert_eq!(domains.singleton(n(0)), None);
        assert!(domains.is_wiped_out(n(0)));
    }

    #[test]
    fn test_rollback_restores_exact_state() {
        let mut domains = DomainStore::new(3, 3);
        domains.remove(n(2), c(0));
        let before = domains.clone();

        let checkpoint = domains.checkpoint();
        domains.remove(n(0), c(2));
        domains.remove(n(1), c(0));
        domains.remove(n(1), c(1));
        domains.rollback(checkpoint);

        assert_eq!(domains, before);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut domains = DomainStore::new(1, 3);
        let outer = domains.checkpoint();
        domains.remove(n(0), c(0));
        let inner = domains.checkpoint();
        domains.remove(n(0), c(1));

        domains.rollback(inner);
        assert_eq!(domains.domain(n(0)), &[c(1), c(2)]);
        domains.rollback(outer);
        assert_eq!(domains.size(n(0)), 3);
    }

    #[test]
    fn test_empty_palette() {
        let domains = DomainStore::new(2, 0);
        assert!(domains.is_wiped_out(n(0)));
        assert!(domains.is_wiped_out(n(1)));
    }
}
