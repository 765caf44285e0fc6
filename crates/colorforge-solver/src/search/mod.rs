//! Backtracking search.
//!
//! Recursive depth-first search over a [`SearchScope`]. Each level selects an
//! unassigned node and tries its candidate colors in order; a candidate that
//! a neighbor already holds is skipped without counting. A legal candidate is
//! assigned after a checkpoint, optionally followed by forward checking and
//! singleton propagation. A contradiction or a failed subtree rolls the scope
//! back to the checkpoint and counts one backtrack.

use std::fmt::{self, Debug};
use std::time::Duration;

use colorforge_config::{HeuristicScope, SearchConfig};
use colorforge_core::{ColorId, Coloring, Graph, NodeId, NodeKey, Palette};
use tracing::{debug, info, trace};

use crate::consistency::is_legal;
use crate::heuristic::{
    Candidates, DomainOrder, InputOrder, LeastConstrainingValue, MinimumRemainingValues,
    ValueOrderer, VariableSelector,
};
use crate::propagation::{forward_check, propagate_singletons, Contradiction};
use crate::scope::{Checkpoint, SearchScope};
use crate::stats::SearchStats;
use crate::termination::{NoTermination, Termination};

/// Pruning and ordering toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SearchFlags {
    /// Remove an assigned color from unassigned neighbors' domains.
    pub forward_checking: bool,
    /// Force singleton domains after each assignment.
    pub propagation: bool,
    /// Order variables by MRV then degree, and values by LCV.
    pub heuristics: bool,
}

impl SearchFlags {
    /// Plain backtracking.
    pub const VANILLA: Self = Self {
        forward_checking: false,
        propagation: false,
        heuristics: false,
    };

    pub const fn new(forward_checking: bool, propagation: bool, heuristics: bool) -> Self {
        Self {
            forward_checking,
            propagation,
            heuristics,
        }
    }

    pub const fn with_forward_checking(mut self, enabled: bool) -> Self {
        self.forward_checking = enabled;
        self
    }

    pub const fn with_propagation(mut self, enabled: bool) -> Self {
        self.propagation = enabled;
        self
    }

    pub const fn with_heuristics(mut self, enabled: bool) -> Self {
        self.heuristics = enabled;
        self
    }

    /// All eight flag combinations, vanilla first.
    pub fn all() -> [Self; 8] {
        let mut combos = [Self::VANILLA; 8];
        for (i, flags) in combos.iter_mut().enumerate() {
            *flags = Self::new(i & 1 != 0, i & 2 != 0, i & 4 != 0);
        }
        combos
    }

    /// Short label such as `fc+prop+heur`, or `vanilla`.
    pub fn label(&self) -> String {
        let parts: Vec<&str> = [
            (self.forward_checking, "fc"),
            (self.propagation, "prop"),
            (self.heuristics, "heur"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        if parts.is_empty() {
            "vanilla".to_string()
        } else {
            parts.join("+")
        }
    }
}

impl fmt::Display for SearchFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<&SearchConfig> for SearchFlags {
    fn from(config: &SearchConfig) -> Self {
        Self::new(config.forward_checking, config.propagation, config.heuristics)
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<N: NodeKey, C> {
    /// Every node colored, no edge monochromatic.
    Solved(Coloring<N, C>),
    /// The palette cannot color the graph.
    Unsatisfiable,
    /// A termination condition stopped the search first.
    Terminated,
}

impl<N: NodeKey, C> SearchOutcome<N, C> {
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    pub fn coloring(&self) -> Option<&Coloring<N, C>> {
        match self {
            Self::Solved(coloring) => Some(coloring),
            _ => None,
        }
    }

    pub fn into_coloring(self) -> Option<Coloring<N, C>> {
        match self {
            Self::Solved(coloring) => Some(coloring),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solved(_) => "solved",
            Self::Unsatisfiable => "unsatisfiable",
            Self::Terminated => "terminated",
        }
    }
}

/// Outcome plus the counters of one search call.
#[derive(Debug, Clone)]
pub struct SearchResult<N: NodeKey, C> {
    pub outcome: SearchOutcome<N, C>,
    pub backtracks: u64,
    pub stats: SearchStats,
    pub solve_time: Duration,
}

impl<N: NodeKey, C> SearchResult<N, C> {
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    pub fn coloring(&self) -> Option<&Coloring<N, C>> {
        self.outcome.coloring()
    }

    /// Splits into `(outcome, backtrack_count)`.
    pub fn into_parts(self) -> (SearchOutcome<N, C>, u64) {
        (self.outcome, self.backtracks)
    }
}

enum Step {
    Solved,
    Failed,
    Terminated,
}

/// Backtracking search engine.
///
/// # Example
///
/// ```
/// use colorforge_core::{Graph, Palette};
/// use colorforge_solver::{BacktrackingSearch, SearchFlags};
/// use colorforge_solver::termination::BacktrackCountTermination;
///
/// let graph = Graph::from_adjacency([
///     ("A", vec!["B", "C"]),
///     ("B", vec!["A", "C"]),
///     ("C", vec!["A", "B"]),
/// ]).unwrap();
/// let palette = Palette::new(["red", "green", "blue"]).unwrap();
///
/// let search = BacktrackingSearch::new(SearchFlags::new(true, true, true))
///     .with_termination(BacktrackCountTermination::new(1_000));
/// let result = search.solve(&graph, &palette);
///
/// let coloring = result.coloring().unwrap();
/// assert!(coloring.is_proper_for(&graph));
/// assert_eq!(coloring.distinct_color_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackingSearch<T = NoTermination> {
    flags: SearchFlags,
    heuristic_scope: HeuristicScope,
    termination: T,
}

impl BacktrackingSearch<NoTermination> {
    pub fn new(flags: SearchFlags) -> Self {
        Self {
            flags,
            heuristic_scope: HeuristicScope::EveryDepth,
            termination: NoTermination,
        }
    }

    /// Creates a search from the `[search]` section of a config.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(SearchFlags::from(config)).with_heuristic_scope(config.heuristic_scope)
    }
}

impl<T: Termination> BacktrackingSearch<T> {
    pub fn with_heuristic_scope(mut self, heuristic_scope: HeuristicScope) -> Self {
        self.heuristic_scope = heuristic_scope;
        self
    }

    /// Replaces the termination condition.
    pub fn with_termination<U: Termination>(self, termination: U) -> BacktrackingSearch<U> {
        BacktrackingSearch {
            flags: self.flags,
            heuristic_scope: self.heuristic_scope,
            termination,
        }
    }

    pub fn flags(&self) -> SearchFlags {
        self.flags
    }

    pub fn heuristic_scope(&self) -> HeuristicScope {
        self.heuristic_scope
    }

    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Searches for a proper coloring of `graph` drawn from `palette`.
    ///
    /// Infeasibility is reported as [`SearchOutcome::Unsatisfiable`], never
    /// as an error. Identical inputs give identical results.
    pub fn solve<N, C>(&self, graph: &Graph<N>, palette: &Palette<C>) -> SearchResult<N, C>
    where
        N: NodeKey,
        C: Clone + PartialEq + Debug,
    {
        let mut scope = SearchScope::new(graph, palette.len());
        scope.stats_mut().start();

        info!(
            event = "solve_start",
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            palette_size = palette.len(),
            flags = %self.flags,
        );

        let outcome = match self.explore(&mut scope, 0) {
            Step::Solved => SearchOutcome::Solved(Self::extract(&scope, palette)),
            Step::Failed => SearchOutcome::Unsatisfiable,
            Step::Terminated => SearchOutcome::Terminated,
        };

        let solve_time = scope.stats().elapsed();
        let stats = scope.into_stats();
        info!(
            event = "solve_end",
            outcome = outcome.label(),
            backtracks = stats.backtracks,
            nodes = stats.selections,
            duration_ms = solve_time.as_millis() as u64,
        );

        SearchResult {
            outcome,
            backtracks: stats.backtracks,
            stats,
            solve_time,
        }
    }

    fn uses_heuristics_at(&self, depth: usize) -> bool {
        self.flags.heuristics
            && match self.heuristic_scope {
                HeuristicScope::EveryDepth => true,
                HeuristicScope::RootOnly => depth == 0,
            }
    }

    fn explore<N: NodeKey>(&self, scope: &mut SearchScope<'_, N>, depth: usize) -> Step {
        if self.termination.is_terminated(scope.stats()) {
            debug!(
                event = "terminated",
                depth,
                backtracks = scope.stats().backtracks,
                nodes = scope.stats().selections,
            );
            return Step::Terminated;
        }
        scope.stats_mut().record_selection(depth);

        let ordered = self.uses_heuristics_at(depth);
        let selected = if ordered {
            MinimumRemainingValues.select(scope)
        } else {
            InputOrder.select(scope)
        };
        let Some(node) = selected else {
            return Step::Solved;
        };
        let candidates: Candidates = if ordered {
            LeastConstrainingValue.order(scope, node)
        } else {
            DomainOrder.order(scope, node)
        };

        for color in candidates {
            if !is_legal(scope.graph(), scope.assignment(), node, color) {
                scope.stats_mut().record_rejected_candidate();
                continue;
            }

            let checkpoint = scope.checkpoint();
            scope.assign(node, color);
            scope.stats_mut().record_assignment();
            trace!(
                event = "assign",
                depth,
                node = ?scope.graph().key(node),
                color = color.index(),
            );

            if let Err(contradiction) = self.prune(scope, node, color) {
                self.backtrack(scope, checkpoint, depth, node, Some(contradiction));
                continue;
            }

            match self.explore(scope, depth + 1) {
                Step::Solved => return Step::Solved,
                Step::Terminated => return Step::Terminated,
                Step::Failed => self.backtrack(scope, checkpoint, depth, node, None),
            }
        }
        Step::Failed
    }

    fn prune<N: NodeKey>(
        &self,
        scope: &mut SearchScope<'_, N>,
        node: NodeId,
        color: ColorId,
    ) -> Result<(), Contradiction> {
        if self.flags.forward_checking {
            forward_check(scope, node, color)?;
        }
        if self.flags.propagation {
            propagate_singletons(scope)?;
        }
        Ok(())
    }

    fn backtrack<N: NodeKey>(
        &self,
        scope: &mut SearchScope<'_, N>,
        checkpoint: Checkpoint,
        depth: usize,
        node: NodeId,
        contradiction: Option<Contradiction>,
    ) {
        scope.rollback(checkpoint);
        scope.stats_mut().record_backtrack();
        debug!(
            event = "backtrack",
            depth,
            node = ?scope.graph().key(node),
            cause = ?contradiction,
            backtracks = scope.stats().backtracks,
        );
    }

    /// Reads the coloring out of a solved scope.
    ///
    /// `explore` reports success only once the selector finds no unassigned
    /// node, so every node holds a color here.
    fn extract<N, C>(scope: &SearchScope<'_, N>, palette: &Palette<C>) -> Coloring<N, C>
    where
        N: NodeKey,
        C: Clone + PartialEq + Debug,
    {
        let graph = scope.graph();
        Coloring::from_entries(
            graph
                .node_ids()
                .map(|id| match scope.assignment().get(id) {
                    Some(color) => (graph.key(id).clone(), palette.color(color).clone()),
                    None => unreachable!("solved search left {:?} unassigned", graph.key(id)),
                })
                .collect(),
        )
    }
}

/// Searches for a proper coloring with the given flags and no termination.
///
/// # Example
///
/// ```
/// use colorforge_core::{Graph, Palette};
/// use colorforge_solver::{search, SearchFlags, SearchOutcome};
///
/// let graph = Graph::from_adjacency([
///     ("A", vec!["B", "C"]),
///     ("B", vec!["A", "C"]),
///     ("C", vec!["A", "B"]),
/// ]).unwrap();
/// let palette = Palette::new([1, 2]).unwrap();
///
/// let (outcome, _backtracks) = search(&graph, &palette, SearchFlags::VANILLA).into_parts();
/// assert_eq!(outcome, SearchOutcome::Unsatisfiable);
/// ```
pub fn search<N, C>(graph: &Graph<N>, palette: &Palette<C>, flags: SearchFlags) -> SearchResult<N, C>
where
    N: NodeKey,
    C: Clone + PartialEq + Debug,
{
    BacktrackingSearch::new(flags).solve(graph, palette)
}

#[cfg(test)]
mod tests;
