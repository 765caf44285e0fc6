//! Fixture graphs.
//!
//! String-keyed fixtures use single letters so failures read like the
//! hand-drawn examples they come from; generated families use `u32` keys
//! numbered from 0.

use colorforge_core::{Graph, GraphBuilder, Palette};

fn build(edges: &[(u32, u32)], node_count: u32) -> Graph<u32> {
    let mut builder = GraphBuilder::new();
    for node in 0..node_count {
        builder.add_node(node);
    }
    for &(a, b) in edges {
        builder
            .add_edge(a, b)
            .expect("fixture edges never form self-loops");
    }
    builder.build()
}

/// Three mutually adjacent nodes `A`, `B`, `C`. Chromatic number 3.
pub fn triangle() -> Graph<&'static str> {
    Graph::from_adjacency([
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["A", "B"]),
    ])
    .expect("triangle fixture is valid")
}

/// A triangle plus an isolated node `D`. Chromatic number 3.
pub fn triangle_with_isolated() -> Graph<&'static str> {
    Graph::from_adjacency([
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["A", "B"]),
        ("D", vec![]),
    ])
    .expect("triangle fixture is valid")
}

/// Cycle `0 - 1 - ... - (n-1) - 0`.
///
/// Chromatic number 2 for even `n`, 3 for odd `n`. Requires `n >= 3`.
pub fn cycle(n: u32) -> Graph<u32> {
    assert!(n >= 3, "a cycle needs at least 3 nodes");
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    build(&edges, n)
}

/// Hub `0` joined to leaves `1..=leaves`. Chromatic number 2.
pub fn star(leaves: u32) -> Graph<u32> {
    let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    build(&edges, leaves + 1)
}

/// `n` nodes and no edges. Chromatic number 1 (0 when `n == 0`).
pub fn isolated(n: u32) -> Graph<u32> {
    build(&[], n)
}

/// Complete graph on `n` nodes. Chromatic number `n`.
pub fn complete(n: u32) -> Graph<u32> {
    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            edges.push((a, b));
        }
    }
    build(&edges, n)
}

/// Hub `0` joined to every node of a cycle `1..=rim`.
///
/// Chromatic number 3 for an even rim, 4 for an odd rim.
pub fn wheel(rim: u32) -> Graph<u32> {
    assert!(rim >= 3, "a wheel rim needs at least 3 nodes");
    let mut edges: Vec<_> = (1..=rim).map(|i| (0, i)).collect();
    edges.extend((1..=rim).map(|i| (i, i % rim + 1)));
    build(&edges, rim + 1)
}

/// The Petersen graph: outer 5-cycle `0..5`, inner pentagram `5..10`.
///
/// 3-regular, chromatic number 3.
pub fn petersen() -> Graph<u32> {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((i + 5, (i + 2) % 5 + 5));
    }
    build(&edges, 10)
}

/// Palette `1..=size`.
pub fn palette(size: u32) -> Palette<u32> {
    Palette::new(1..=size).expect("integer palette has no duplicates")
}
