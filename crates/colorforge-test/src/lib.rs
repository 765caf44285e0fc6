//! Shared test fixtures for ColorForge crates.
//!
//! This crate provides small graphs with known chromatic numbers and
//! assertion helpers. It depends only on `colorforge-core` so that every
//! other crate can use it as a dev-dependency.
//!
//! - [`graphs`] - Fixture graphs (triangle, cycles, star, wheel, Petersen, ...)
//! - [`assertions`] - Proper-coloring checks with readable failure messages
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! colorforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use colorforge_test::graphs::{cycle, triangle};
//!
//! assert_eq!(triangle().edge_count(), 3);
//! assert_eq!(cycle(4).node_count(), 4);
//! ```

pub mod assertions;
pub mod graphs;

pub use assertions::{assert_color_count, assert_proper_coloring};
pub use graphs::{
    complete, cycle, isolated, palette, petersen, star, triangle, triangle_with_isolated, wheel,
};
