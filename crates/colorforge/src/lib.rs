//! ColorForge - Graph coloring by backtracking search in Rust
//!
//! Estimate how many colors a graph needs, then search for a proper coloring
//! with optional forward checking, singleton propagation and ordering
//! heuristics.
//!
//! # Example
//!
//! ```rust
//! use colorforge::prelude::*;
//!
//! let graph = colorforge::maps::au_states().unwrap();
//! let palette = Palette::new(["yellow", "green", "red", "blue", "magenta"]).unwrap();
//!
//! let search = BacktrackingSearch::new(SearchFlags::new(true, true, true));
//! let solved = colorforge::solve_with_estimated_palette(&graph, &palette, &search);
//!
//! assert_eq!(solved.estimate, 3);
//! assert_eq!(solved.palette.len(), 3);
//! assert!(solved.result.coloring().unwrap().is_proper_for(&graph));
//! ```

pub mod maps;
pub mod render;

mod pipeline;
pub use pipeline::{solve_with_estimated_palette, EstimatedSolve};

#[cfg(feature = "console")]
pub mod console;

// Graph model
pub use colorforge_core::{
    ColorForgeError, ColorId, Coloring, Graph, GraphBuilder, GraphError, NodeId, NodeKey, Palette,
};

// Configuration
pub use colorforge_config::{
    BenchmarkSettings, ConfigError, HeuristicScope, SearchConfig, SolverConfig, TerminationConfig,
};

// Search
pub use colorforge_solver::{
    estimate_chromatic_number, greedy_coloring, greedy_coloring_with, search,
    BacktrackCountTermination, BacktrackingSearch, ExternalTermination, GreedyColoring,
    NoTermination, OrTermination, SearchBuilder, SearchFlags, SearchOutcome, SearchResult,
    SearchStats, StepCountTermination, Termination, TerminationBuilder, TimeTermination,
};

// Benchmarking
pub use colorforge_benchmark::{
    export_reports, Benchmark, BenchmarkConfig, BenchmarkError, BenchmarkResult, BenchmarkRun,
    CsvExporter, MarkdownReport, Strategy, StrategyMatrix,
};

pub mod prelude {
    pub use super::{
        estimate_chromatic_number, search, BacktrackingSearch, Coloring, Graph, GraphBuilder,
        Palette, SearchFlags, SearchOutcome, SearchResult,
    };
}
