//! Benchmark runner.

use std::fmt::Debug;

use colorforge_core::{Graph, NodeId, NodeKey, Palette};
use colorforge_solver::{BacktrackingSearch, Termination};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::result::{BenchmarkResult, BenchmarkRun};

/// Runs one search configuration repeatedly over one graph.
///
/// Every run searches a copy of the graph with its nodes in a freshly
/// shuffled order, since backtrack counts depend heavily on that order.
pub struct Benchmark<'a, N: NodeKey, C, T> {
    config: BenchmarkConfig,
    strategy_name: String,
    problem_name: String,
    graph: &'a Graph<N>,
    palette: &'a Palette<C>,
    search: BacktrackingSearch<T>,
}

impl<'a, N, C, T> Benchmark<'a, N, C, T>
where
    N: NodeKey,
    C: Clone + PartialEq + Debug,
    T: Termination,
{
    pub fn new(
        config: BenchmarkConfig,
        strategy_name: impl Into<String>,
        problem_name: impl Into<String>,
        graph: &'a Graph<N>,
        palette: &'a Palette<C>,
        search: BacktrackingSearch<T>,
    ) -> Self {
        Self {
            config,
            strategy_name: strategy_name.into(),
            problem_name: problem_name.into(),
            graph,
            palette,
            search,
        }
    }

    /// Runs warmups, then measurement runs, and returns aggregated results.
    pub fn run(&self) -> Result<BenchmarkResult, BenchmarkError> {
        info!(
            event = "benchmark_start",
            name = self.config.name(),
            strategy = %self.strategy_name,
            problem = %self.problem_name,
            runs = self.config.run_count(),
        );

        let mut seeds = ChaCha8Rng::seed_from_u64(self.config.seed());
        for _ in 0..self.config.warmup_count() {
            self.run_once(0, seeds.random())?;
        }

        // Measured runs restart the seed stream, so run `i` sees the same
        // order in every benchmark built from an equal config.
        let mut seeds = ChaCha8Rng::seed_from_u64(self.config.seed());
        let mut result = BenchmarkResult::new(
            self.config.name(),
            &self.strategy_name,
            &self.problem_name,
            self.search.flags(),
        );
        for run_index in 0..self.config.run_count() {
            let run = self.run_once(run_index, seeds.random())?;
            debug!(
                event = "benchmark_run",
                run = run_index,
                backtracks = run.backtracks,
                solved = run.solved,
                duration_ms = run.solve_time.as_millis() as u64,
            );
            result.add_run(run);
        }

        info!(
            event = "benchmark_end",
            strategy = %self.strategy_name,
            avg_backtracks = result.avg_backtracks(),
            avg_time_ms = result.avg_solve_time().as_secs_f64() * 1000.0,
            solved = result.solved_count(),
        );
        Ok(result)
    }

    fn run_once(&self, run_index: usize, seed: u64) -> Result<BenchmarkRun, BenchmarkError> {
        let (node_order_seed, outcome) = if self.config.shuffle_nodes() {
            let graph = self.graph.reordered(&shuffled_order(self.graph, seed))?;
            (Some(seed), self.search.solve(&graph, self.palette))
        } else {
            (None, self.search.solve(self.graph, self.palette))
        };

        Ok(BenchmarkRun {
            run_index,
            node_order_seed,
            solve_time: outcome.solve_time,
            backtracks: outcome.backtracks,
            selections: outcome.stats.selections,
            solved: outcome.is_solved(),
        })
    }
}

/// Returns the nodes of `graph` in an order shuffled by `seed`.
///
/// # Example
///
/// ```
/// use colorforge_benchmark::shuffled_order;
/// use colorforge_core::Graph;
///
/// let graph = Graph::from_adjacency([("A", vec![]), ("B", vec![]), ("C", vec![])]).unwrap();
/// let order = shuffled_order(&graph, 9);
///
/// assert_eq!(order.len(), 3);
/// assert_eq!(order, shuffled_order(&graph, 9));
/// ```
pub fn shuffled_order<N: NodeKey>(graph: &Graph<N>, seed: u64) -> Vec<NodeId> {
    let mut order: Vec<NodeId> = graph.node_ids().collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorforge_solver::{SearchFlags, StepCountTermination};
    use colorforge_test::graphs::{complete, cycle, palette, petersen, triangle};

    #[test]
    fn test_runs_are_recorded() {
        let graph = petersen();
        let palette = palette(3);
        let benchmark = Benchmark::new(
            BenchmarkConfig::new("petersen").with_run_count(4).with_warmup_count(2),
            "vanilla",
            "petersen",
            &graph,
            &palette,
            BacktrackingSearch::new(SearchFlags::VANILLA),
        );
        let result = benchmark.run().unwrap();

        assert_eq!(result.run_count(), 4);
        assert_eq!(result.solved_count(), 4);
        let indices: Vec<_> = result.runs.iter().map(|r| r.run_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(result.runs.iter().all(|r| r.node_order_seed.is_some()));
    }

    #[test]
    fn test_same_seed_same_runs() {
        let graph = cycle(9);
        let palette = palette(3);
        let run = || {
            Benchmark::new(
                BenchmarkConfig::new("c9").with_seed(11),
                "fc",
                "c9",
                &graph,
                &palette,
                BacktrackingSearch::new(SearchFlags::VANILLA.with_forward_checking(true)),
            )
            .run()
            .unwrap()
        };
        let first = run();
        let second = run();
        for (a, b) in first.runs.iter().zip(&second.runs) {
            assert_eq!(a.node_order_seed, b.node_order_seed);
            assert_eq!(a.backtracks, b.backtracks);
        }
    }

    #[test]
    fn test_without_shuffle_matches_plain_search() {
        let graph = triangle();
        let palette = palette(2);
        let result = Benchmark::new(
            BenchmarkConfig::new("t").with_shuffle_nodes(false).with_run_count(2),
            "vanilla",
            "triangle",
            &graph,
            &palette,
            BacktrackingSearch::new(SearchFlags::VANILLA),
        )
        .run()
        .unwrap();

        assert_eq!(result.solved_count(), 0);
        assert!(result.runs.iter().all(|r| r.node_order_seed.is_none()));
        assert!(result.runs.iter().all(|r| r.backtracks == 4));
    }

    #[test]
    fn test_terminated_runs_are_unsolved() {
        let graph = complete(6);
        let palette = palette(5);
        let search = BacktrackingSearch::new(SearchFlags::VANILLA)
            .with_termination(StepCountTermination::new(3));
        let result = Benchmark::new(
            BenchmarkConfig::new("k6").with_run_count(2),
            "limited",
            "k6",
            &graph,
            &palette,
            search,
        )
        .run()
        .unwrap();
        assert_eq!(result.solved_count(), 0);
        assert!(result.runs.iter().all(|r| r.selections == 3));
    }

    #[test]
    fn test_shuffled_order_is_permutation() {
        let graph = petersen();
        let mut order = shuffled_order(&graph, 3);
        order.sort();
        assert_eq!(order, graph.node_ids().collect::<Vec<_>>());
    }
}
