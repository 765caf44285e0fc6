//! Variable and value ordering.
//!
//! A [`VariableSelector`] picks the next node to branch on and a
//! [`ValueOrderer`] decides the order its colors are tried in. The search
//! pairs [`InputOrder`] with [`DomainOrder`] when heuristics are off and
//! [`MinimumRemainingValues`] with [`LeastConstrainingValue`] when they are on.

mod value;
mod variable;

use colorforge_core::{ColorId, NodeId, NodeKey};
use smallvec::SmallVec;

use crate::scope::SearchScope;

pub use value::{DomainOrder, LeastConstrainingValue};
pub use variable::{InputOrder, MinimumRemainingValues};

/// Candidate colors for one node, in try-order.
pub type Candidates = SmallVec<[ColorId; 8]>;

/// Picks the next unassigned node to branch on.
pub trait VariableSelector {
    /// Returns `None` when every node is assigned.
    fn select<N: NodeKey>(&self, scope: &SearchScope<'_, N>) -> Option<NodeId>;
}

/// Orders the remaining colors of a node.
pub trait ValueOrderer {
    fn order<N: NodeKey>(&self, scope: &SearchScope<'_, N>, node: NodeId) -> Candidates;
}
