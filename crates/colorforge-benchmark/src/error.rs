//! Benchmark errors.

use colorforge_core::GraphError;
use thiserror::Error;

/// Errors raised while running or exporting a benchmark.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid node order: {0}")]
    NodeOrder(#[from] GraphError),
}
