//! Partial assignment with an undo trail.

use colorforge_core::{ColorId, NodeId};

/// Colors assigned so far, `None` meaning unassigned.
///
/// Every assignment is pushed on a trail. Undoing to an earlier trail length
/// clears exactly the assignments made since, which covers both the branch
/// decision and everything propagation forced after it.
///
/// # Example
///
/// ```
/// use colorforge_core::{ColorId, NodeId};
/// use colorforge_solver::assignment::Assignment;
///
/// let mut assignment = Assignment::new(3);
/// let mark = assignment.trail_len();
/// assignment.assign(NodeId::new(1), ColorId::new(0));
/// assignment.assign(NodeId::new(2), ColorId::new(1));
/// assert_eq!(assignment.assigned_count(), 2);
///
/// assignment.undo_to(mark);
/// assert!(assignment.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    colors: Vec<Option<ColorId>>,
    trail: Vec<NodeId>,
}

impl Assignment {
    pub fn new(node_count: usize) -> Self {
        Self {
            colors: vec![None; node_count],
            trail: Vec::new(),
        }
    }

    pub fn get(&self, node: NodeId) -> Option<ColorId> {
        self.colors[node.index()]
    }

    pub fn is_assigned(&self, node: NodeId) -> bool {
        self.colors[node.index()].is_some()
    }

    /// Assigns a color to an unassigned node and records it on the trail.
    pub fn assign(&mut self, node: NodeId, color: ColorId) {
        debug_assert!(
            !self.is_assigned(node),
            "{node} is already assigned; undo before reassigning"
        );
        self.colors[node.index()] = Some(color);
        self.trail.push(node);
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Unassigns every node assigned after the trail had length `len`.
    pub fn undo_to(&mut self, len: usize) {
        while self.trail.len() > len {
            if let Some(node) = self.trail.pop() {
                self.colors[node.index()] = None;
            }
        }
    }

    /// Iterates unassigned nodes in node order.
    pub fn unassigned(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.colors
            .iter()
            .enumerate()
            .filter(|(_, color)| color.is_none())
            .map(|(i, _)| NodeId::new(i))
    }

    pub fn assigned_count(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Returns true if every node holds a color.
    pub fn is_complete(&self) -> bool {
        self.trail.len() == self.colors.len()
    }

    /// Returns the assigned colors in node order, or `None` if incomplete.
    pub fn to_complete(&self) -> Option<Vec<ColorId>> {
        self.colors.iter().copied().collect()
    }
}
