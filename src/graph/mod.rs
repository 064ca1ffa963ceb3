pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod builder;
pub mod edge;
pub mod generators;
pub mod traits;
pub mod vertex_set;
pub mod weight;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use builder::{
    build, build_graph, BuildOptions, DuplicateEdgePolicy, DynGraph, Representation,
};
pub use edge::Edge;
pub use traits::Graph;
pub use vertex_set::{Vertex, VertexSet};
pub use weight::Weight;
