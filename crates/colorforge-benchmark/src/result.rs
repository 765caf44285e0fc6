//! Benchmark result types.

use std::time::Duration;

use colorforge_solver::SearchFlags;

/// Result of a single benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRun {
    /// Run index (0-based).
    pub run_index: usize,
    /// Seed of the node-order shuffle, `None` when nodes kept input order.
    pub node_order_seed: Option<u64>,
    /// Total solve time.
    pub solve_time: Duration,
    /// Backtracks counted by the search.
    pub backtracks: u64,
    /// Variable selections made by the search.
    pub selections: u64,
    /// Whether a coloring was found.
    pub solved: bool,
}

impl BenchmarkRun {
    /// Returns backtracks per second.
    ///
    /// # Example
    ///
    /// ```
    /// use colorforge_benchmark::BenchmarkRun;
    /// use std::time::Duration;
    ///
    /// let run = BenchmarkRun {
    ///     run_index: 0,
    ///     node_order_seed: Some(1),
    ///     solve_time: Duration::from_secs(2),
    ///     backtracks: 1000,
    ///     selections: 1500,
    ///     solved: true,
    /// };
    ///
    /// assert!((run.backtracks_per_second() - 500.0).abs() < 0.001);
    /// ```
    pub fn backtracks_per_second(&self) -> f64 {
        if self.solve_time.is_zero() {
            0.0
        } else {
            self.backtracks as f64 / self.solve_time.as_secs_f64()
        }
    }
}

/// Aggregated results from multiple runs of one strategy.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Strategy name.
    pub strategy_name: String,
    /// Problem instance name.
    pub problem_name: String,
    /// Flags the strategy searched with.
    pub flags: SearchFlags,
    /// Individual runs.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    pub fn new(
        name: impl Into<String>,
        strategy_name: impl Into<String>,
        problem_name: impl Into<String>,
        flags: SearchFlags,
    ) -> Self {
        Self {
            name: name.into(),
            strategy_name: strategy_name.into(),
            problem_name: problem_name.into(),
            flags,
            runs: Vec::new(),
        }
    }

    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Number of runs that found a coloring.
    pub fn solved_count(&self) -> usize {
        self.runs.iter().filter(|r| r.solved).count()
    }

    /// Returns the average backtrack count.
    ///
    /// # Example
    ///
    /// ```
    /// use colorforge_benchmark::{BenchmarkResult, BenchmarkRun};
    /// use colorforge_solver::SearchFlags;
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Test", "vanilla", "AU", SearchFlags::VANILLA);
    /// for (i, backtracks) in [4, 7].into_iter().enumerate() {
    ///     result.add_run(BenchmarkRun {
    ///         run_index: i,
    ///         node_order_seed: None,
    ///         solve_time: Duration::from_millis(100 * (i as u64 + 1)),
    ///         backtracks,
    ///         selections: 10,
    ///         solved: true,
    ///     });
    /// }
    ///
    /// assert_eq!(result.avg_backtracks(), 5.5);
    /// assert_eq!(result.min_backtracks(), Some(4));
    /// assert_eq!(result.avg_solve_time(), Duration::from_millis(150));
    /// ```
    pub fn avg_backtracks(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        let total: u64 = self.runs.iter().map(|r| r.backtracks).sum();
        total as f64 / self.runs.len() as f64
    }

    pub fn min_backtracks(&self) -> Option<u64> {
        self.runs.iter().map(|r| r.backtracks).min()
    }

    pub fn max_backtracks(&self) -> Option<u64> {
        self.runs.iter().map(|r| r.backtracks).max()
    }

    /// Returns the average solve time.
    pub fn avg_solve_time(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.runs.iter().map(|r| r.solve_time).sum();
        total / self.runs.len() as u32
    }

    /// Returns the minimum solve time.
    pub fn min_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the maximum solve time.
    pub fn max_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}
