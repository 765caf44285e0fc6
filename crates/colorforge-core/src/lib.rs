//! ColorForge Core - Core types for graph coloring
//!
//! This crate provides the fundamental abstractions for ColorForge:
//! - The validated, symmetric [`Graph`] model and its [`GraphBuilder`]
//! - Ordered color [`Palette`]s
//! - The [`Coloring`] produced by a successful search
//! - Error types shared by the other crates

pub mod coloring;
pub mod error;
pub mod graph;
pub mod palette;

pub use coloring::Coloring;
pub use error::{ColorForgeError, GraphError, Result};
pub use graph::{Graph, GraphBuilder, NodeId, NodeKey};
pub use palette::{ColorId, Palette};
