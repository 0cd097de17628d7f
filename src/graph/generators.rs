use crate::graph::{DirectedGraph, MutableGraph};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices and about `edge_factor * n` edges
///
/// Weights are drawn from `1..100`. When `negative` is set, every edge `(u, v, w)` is
/// reweighted to `w + p(u) - p(v)` for a random potential `p`: some weights become
/// negative, but every cycle keeps its original (positive) total, so no negative cycle
/// is ever created.
pub fn generate_random(n: usize, edge_factor: f64, negative: bool, seed: u64) -> Result<DirectedGraph<i64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n == 0 {
        return Ok(graph);
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let potential: Vec<i64> = (0..n)
        .map(|_| if negative { rng.gen_range(0..50) } else { 0 })
        .collect();

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..100) + potential[u] - potential[v];
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a chain `0 -> 1 -> ... -> n-1` where every edge has the given weight
pub fn generate_chain(n: usize, weight: i64) -> Result<DirectedGraph<i64>> {
    DirectedGraph::from_edges(n, (1..n).map(|v| (v - 1, v, weight)))
}

/// Generates a 2D grid graph with dimensions x*y
///
/// Every vertex is connected to its 4 neighbours in both directions; moving right or
/// down costs 1, moving left or up costs 2.
pub fn generate_grid(x: usize, y: usize) -> Result<DirectedGraph<i64>> {
    let mut graph = DirectedGraph::with_capacity(x * y);

    // Helper function to get vertex index from 2D coordinates
    let get_index = |i: usize, j: usize| -> usize { i * y + j };

    for i in 0..x {
        for j in 0..y {
            let current = get_index(i, j);
            if i + 1 < x {
                let neighbor = get_index(i + 1, j);
                graph.add_edge(current, neighbor, 1)?;
                graph.add_edge(neighbor, current, 2)?;
            }
            if j + 1 < y {
                let neighbor = get_index(i, j + 1);
                graph.add_edge(current, neighbor, 1)?;
                graph.add_edge(neighbor, current, 2)?;
            }
        }
    }

    Ok(graph)
}
