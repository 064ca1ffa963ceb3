use crate::graph::builder::{resolve_edges, BuildOptions};
use crate::graph::edge::Edge;
use crate::graph::traits::Graph;
use crate::graph::vertex_set::{Vertex, VertexSet};
use crate::graph::weight::Weight;
use crate::Result;

/// An undirected graph implementation using adjacency lists
///
/// Memory grows with `V + E`, which makes this the representation of choice
/// for large sparse graphs.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Vertex universe
    vertices: VertexSet<V>,

    /// Edges for each vertex index: vertex -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of distinct unordered pairs
    edge_count: usize,
}

impl<V, W> AdjacencyList<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Builds an adjacency list with the default options
    pub fn build<I, E, J>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: Into<Edge<V, W>>,
        J: IntoIterator<Item = E>,
    {
        Self::build_with(vertices, edges, &BuildOptions::default())
    }

    /// Builds an adjacency list with explicit options
    pub fn build_with<I, E, J>(vertices: I, edges: J, options: &BuildOptions) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: Into<Edge<V, W>>,
        J: IntoIterator<Item = E>,
    {
        let vertices: VertexSet<V> = vertices.into_iter().collect();
        let resolved = resolve_edges(&vertices, edges, options)?;

        let mut adjacency = vec![Vec::new(); vertices.len()];
        for (&(u, v), &weight) in &resolved {
            adjacency[u].push((v, weight));
            // A self-loop is listed once
            if u != v {
                adjacency[v].push((u, weight));
            }
        }

        Ok(AdjacencyList {
            vertices,
            adjacency,
            edge_count: resolved.len(),
        })
    }

    /// Returns the degree of a vertex index
    pub fn degree(&self, index: usize) -> usize {
        self.adjacency.get(index).map_or(0, |edges| edges.len())
    }
}

impl<V, W> Graph<V, W> for AdjacencyList<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertices(&self) -> &VertexSet<V> {
        &self.vertices
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(index) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn weight_between(&self, u: usize, v: usize) -> Option<W> {
        self.adjacency
            .get(u)?
            .iter()
            .find(|(target, _)| *target == v)
            .map(|(_, weight)| *weight)
    }
}
