//! Strategy grids.

use std::fmt::Debug;

use colorforge_core::{Graph, NodeKey, Palette};
use colorforge_solver::{BacktrackingSearch, HeuristicScope, SearchFlags, Termination};

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::result::BenchmarkResult;
use crate::runner::Benchmark;

/// A named set of search flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub name: String,
    pub flags: SearchFlags,
}

impl Strategy {
    pub fn new(name: impl Into<String>, flags: SearchFlags) -> Self {
        Self {
            name: name.into(),
            flags,
        }
    }
}

/// Several strategies benchmarked with one config over one graph.
///
/// # Example
///
/// ```
/// use colorforge_benchmark::{BenchmarkConfig, StrategyMatrix};
/// use colorforge_core::{Graph, Palette};
///
/// let graph = Graph::from_adjacency([
///     ("ACT", vec!["NSW"]),
///     ("NSW", vec!["ACT"]),
/// ]).unwrap();
/// let palette = Palette::new(["y", "g"]).unwrap();
///
/// let matrix = StrategyMatrix::standard();
/// assert_eq!(matrix.strategies().len(), 6);
///
/// let results = matrix
///     .run(&BenchmarkConfig::new("pair").with_run_count(2), "pair", &graph, &palette)
///     .unwrap();
/// assert!(results.iter().all(|r| r.solved_count() == 2));
/// ```
#[derive(Debug, Clone)]
pub struct StrategyMatrix {
    strategies: Vec<Strategy>,
    heuristic_scope: HeuristicScope,
}

impl StrategyMatrix {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self {
            strategies,
            heuristic_scope: HeuristicScope::EveryDepth,
        }
    }

    /// Vanilla, forward checking, and forward checking with propagation,
    /// each without and then with ordering heuristics.
    pub fn standard() -> Self {
        let pruning = [
            ("vanilla", SearchFlags::VANILLA),
            ("forward checking", SearchFlags::new(true, false, false)),
            ("forward checking + propagation", SearchFlags::new(true, true, false)),
        ];
        let mut strategies = Vec::with_capacity(pruning.len() * 2);
        for heuristics in [false, true] {
            for (name, flags) in pruning {
                let name = if heuristics {
                    format!("{name} + heuristics")
                } else {
                    name.to_string()
                };
                strategies.push(Strategy::new(name, flags.with_heuristics(heuristics)));
            }
        }
        Self::new(strategies)
    }

    pub fn with_heuristic_scope(mut self, heuristic_scope: HeuristicScope) -> Self {
        self.heuristic_scope = heuristic_scope;
        self
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Benchmarks every strategy without a termination limit.
    pub fn run<N, C>(
        &self,
        config: &BenchmarkConfig,
        problem_name: &str,
        graph: &Graph<N>,
        palette: &Palette<C>,
    ) -> Result<Vec<BenchmarkResult>, BenchmarkError>
    where
        N: NodeKey,
        C: Clone + PartialEq + Debug,
    {
        self.run_with(config, problem_name, graph, palette, |search| search)
    }

    /// Benchmarks every strategy, letting `configure` attach a termination
    /// to each engine.
    pub fn run_with<N, C, T, F>(
        &self,
        config: &BenchmarkConfig,
        problem_name: &str,
        graph: &Graph<N>,
        palette: &Palette<C>,
        configure: F,
    ) -> Result<Vec<BenchmarkResult>, BenchmarkError>
    where
        N: NodeKey,
        C: Clone + PartialEq + Debug,
        T: Termination,
        F: Fn(BacktrackingSearch) -> BacktrackingSearch<T>,
    {
        self.strategies
            .iter()
            .map(|strategy| {
                let search = configure(
                    BacktrackingSearch::new(strategy.flags)
                        .with_heuristic_scope(self.heuristic_scope),
                );
                Benchmark::new(
                    config.clone(),
                    &strategy.name,
                    problem_name,
                    graph,
                    palette,
                    search,
                )
                .run()
            })
            .collect()
    }
}

impl Default for StrategyMatrix {
    fn default() -> Self {
        Self::standard()
    }
}
