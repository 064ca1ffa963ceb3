use std::fmt::Debug;

use crate::graph::vertex_set::{Vertex, VertexSet};
use crate::graph::weight::Weight;

/// Trait representing a read-only weighted undirected graph.
///
/// Adjacency is symmetric: whenever `neighbors(u)` yields `(v, w)`,
/// `neighbors(v)` yields `(u, w)`. Implementations are immutable once built,
/// so a single graph can serve any number of concurrent queries.
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the vertex universe the graph was built from
    fn vertices(&self) -> &VertexSet<V>;

    /// Returns the number of distinct unordered vertex pairs joined by an edge
    fn edge_count(&self) -> usize;

    /// Returns an iterator over `(neighbor_index, weight)` pairs of a vertex index.
    ///
    /// Pairs with no direct edge are never yielded.
    fn neighbors(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Gets the weight between two vertex indices, or `None` if there is no edge
    fn weight_between(&self, u: usize, v: usize) -> Option<W>;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices().contains(vertex)
    }

    /// Gets the weight of the edge between two vertices if it exists
    fn edge_weight(&self, u: &V, v: &V) -> Option<W> {
        let set = self.vertices();
        match (set.index_of(u), set.index_of(v)) {
            (Some(u), Some(v)) => self.weight_between(u, v),
            _ => None,
        }
    }
}
