//! Benchmarking harness for ColorForge.
//!
//! Runs search strategies repeatedly over one graph, shuffling the node
//! order before every run, and reports backtracks and solve time.
//!
//! # Overview
//!
//! The harness allows you to:
//! - Run one search configuration many times with reproducible node orders
//! - Execute warmup runs before measurement
//! - Compare the standard strategy grid with [`StrategyMatrix`]
//! - Export results to CSV and Markdown
//!
//! Node orders come from a seeded ChaCha RNG. Run `i` of every strategy sees
//! the same order, so strategies are compared on identical inputs.
//!
//! # Example
//!
//! ```
//! use colorforge_benchmark::BenchmarkConfig;
//!
//! let config = BenchmarkConfig::new("US states")
//!     .with_warmup_count(1)
//!     .with_run_count(5)
//!     .with_seed(42)
//!     .with_csv_output("results.csv")
//!     .with_markdown_output("report.md");
//!
//! assert_eq!(config.name(), "US states");
//! assert_eq!(config.run_count(), 5);
//! assert_eq!(config.seed(), 42);
//! ```
//!
//! Full benchmark usage:
//!
//! ```
//! use colorforge_benchmark::{Benchmark, BenchmarkConfig};
//! use colorforge_core::{Graph, Palette};
//! use colorforge_solver::{BacktrackingSearch, SearchFlags};
//!
//! let graph = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["A"])]).unwrap();
//! let palette = Palette::new(["y", "g"]).unwrap();
//!
//! let benchmark = Benchmark::new(
//!     BenchmarkConfig::new("pair").with_run_count(3),
//!     "forward checking",
//!     "A-B",
//!     &graph,
//!     &palette,
//!     BacktrackingSearch::new(SearchFlags::VANILLA.with_forward_checking(true)),
//! );
//! let result = benchmark.run().unwrap();
//! assert_eq!(result.solved_count(), 3);
//! ```

mod config;
mod error;
mod matrix;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use error::BenchmarkError;
pub use matrix::{Strategy, StrategyMatrix};
pub use report::{export_reports, CsvExporter, MarkdownReport};
pub use result::{BenchmarkResult, BenchmarkRun};
pub use runner::{shuffled_order, Benchmark};
