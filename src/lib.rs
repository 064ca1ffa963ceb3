//! Undirected SSSP - Single-Source Shortest Paths over weighted undirected graphs
//!
//! The library builds an adjacency structure from a vertex set and an edge list,
//! then runs a binary-heap Dijkstra search from one source vertex. The result is
//! a [`DistanceMap`] holding exactly the vertices reachable from the source.
//!
//! Edge weights must be non-negative. Distances are accumulated with checked
//! arithmetic, so a path that does not fit the weight type is reported as
//! [`Error::Overflow`] instead of wrapping.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod web;

pub use algorithm::{
    dijkstra::{shortest_paths, Dijkstra},
    DistanceMap, SearchStats, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{
    build, build_graph, AdjacencyList, AdjacencyMatrix, BuildOptions, DuplicateEdgePolicy,
    Edge, Graph, Representation, VertexSet, Weight,
};

/// Error types for the library
///
/// Vertices and weights are rendered with their `Debug` form so the error type
/// stays independent of the vertex and weight types used by a graph.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid edge: {from} - {to} references a vertex outside the graph")]
    InvalidEdge { from: String, to: String },

    #[error("Invalid edge weight {weight} on edge {from} - {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Distance to vertex {0} overflows the weight type")]
    Overflow(String),

    #[error("A dense matrix over {vertices} vertices cannot be allocated")]
    GraphTooLarge { vertices: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
