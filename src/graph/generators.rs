use rand::prelude::*;

use crate::graph::adjacency_list::AdjacencyList;
use crate::graph::adjacency_matrix::AdjacencyMatrix;
use crate::graph::edge::Edge;
use crate::Result;

/// A vertex list and an edge list, ready to be handed to any builder
#[derive(Debug, Clone)]
pub struct GeneratedGraph {
    pub vertices: Vec<usize>,
    pub edges: Vec<Edge<usize, u64>>,
}

impl GeneratedGraph {
    pub fn to_adjacency_list(&self) -> Result<AdjacencyList<usize, u64>> {
        AdjacencyList::build(self.vertices.iter().copied(), self.edges.iter().copied())
    }

    pub fn to_adjacency_matrix(&self) -> Result<AdjacencyMatrix<usize, u64>> {
        AdjacencyMatrix::build(self.vertices.iter().copied(), self.edges.iter().copied())
    }
}

/// Generates a random undirected graph with roughly `edge_factor * n` edges.
///
/// Weights are drawn from `1..=max_weight`; self-loops are skipped. The same
/// seed always produces the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertices: Vec<usize> = (0..n).collect();
    let num_edges = (edge_factor * n as f64) as usize;
    let mut edges = Vec::with_capacity(num_edges);

    if n > 1 {
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = rng.gen_range(1..=max_weight.max(1));
                edges.push(Edge::new(u, v, weight));
            }
        }
    }

    GeneratedGraph { vertices, edges }
}

/// Generates a `width * height` grid with 4-connectivity.
///
/// Horizontal edges weigh 1 and vertical edges weigh 2, so the distance from
/// the top-left corner to `(x, y)` is `x + 2 * y`.
pub fn generate_grid(width: usize, height: usize) -> GeneratedGraph {
    let vertices: Vec<usize> = (0..width * height).collect();
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                edges.push(Edge::new(vertex, vertex + 1, 1));
            }
            if y + 1 < height {
                edges.push(Edge::new(vertex, vertex + width, 2));
            }
        }
    }

    GeneratedGraph { vertices, edges }
}
