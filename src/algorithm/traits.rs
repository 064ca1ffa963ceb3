use crate::algorithm::distance_map::DistanceMap;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    /// Compute shortest distances from a source vertex to all reachable vertices.
    ///
    /// The graph is only read; no partial result is returned on failure.
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<DistanceMap<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
