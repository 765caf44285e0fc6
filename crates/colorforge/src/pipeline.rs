//! Estimate-then-search workflow.

use std::fmt::Debug;

use colorforge_core::{Graph, NodeKey, Palette};
use colorforge_solver::{estimate_chromatic_number, BacktrackingSearch, SearchResult, Termination};
use tracing::warn;

/// Result of [`solve_with_estimated_palette`].
#[derive(Debug, Clone)]
pub struct EstimatedSolve<N: NodeKey, C> {
    /// Greedy upper bound on the chromatic number.
    pub estimate: usize,
    /// The candidate palette cut down to the estimate.
    pub palette: Palette<C>,
    pub result: SearchResult<N, C>,
}

/// Truncates `candidates` to the greedy estimate, then searches with it.
///
/// The estimate is an upper bound, so the truncated palette always suffices
/// when `candidates` is at least that long. A shorter candidate palette is
/// used whole and may leave the search unsatisfiable.
pub fn solve_with_estimated_palette<N, C, T>(
    graph: &Graph<N>,
    candidates: &Palette<C>,
    search: &BacktrackingSearch<T>,
) -> EstimatedSolve<N, C>
where
    N: NodeKey,
    C: Clone + PartialEq + Debug,
    T: Termination,
{
    let estimate = estimate_chromatic_number(graph);
    if candidates.len() < estimate {
        warn!(
            event = "palette_short",
            estimate,
            palette_size = candidates.len(),
        );
    }
    let palette = candidates.truncated(estimate);
    let result = search.solve(graph, &palette);
    EstimatedSolve {
        estimate,
        palette,
        result,
    }
}
