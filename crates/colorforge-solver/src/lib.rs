//! ColorForge Solver Engine
//!
//! This crate provides the coloring search and its supporting pieces:
//! - Greedy chromatic-number estimator
//! - Domain store and assignment trail with checkpoint/rollback
//! - Forward checking and singleton propagation
//! - MRV/degree variable selection and LCV value ordering
//! - Backtracking search engine and termination conditions
//! - Configuration wiring (builder module)

pub mod assignment;
pub mod builder;
pub mod consistency;
pub mod domain;
pub mod estimator;
pub mod heuristic;
pub mod propagation;
pub mod scope;
pub mod search;
pub mod stats;
pub mod termination;

pub use builder::{ConfiguredTermination, SearchBuilder, TerminationBuilder};
pub use colorforge_config::HeuristicScope;
pub use estimator::{
    estimate_chromatic_number, greedy_coloring, greedy_coloring_with, GreedyColoring,
};
pub use scope::SearchScope;
pub use search::{search, BacktrackingSearch, SearchFlags, SearchOutcome, SearchResult};
pub use stats::SearchStats;
pub use termination::{
    BacktrackCountTermination, ExternalTermination, NoTermination, OrTermination,
    StepCountTermination, Termination, TimeTermination,
};
