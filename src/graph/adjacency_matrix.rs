use crate::graph::builder::{resolve_edges, BuildOptions};
use crate::graph::edge::Edge;
use crate::graph::traits::Graph;
use crate::graph::vertex_set::{Vertex, VertexSet};
use crate::graph::weight::Weight;
use crate::{Error, Result};

/// A dense undirected graph storing a weight slot for every ordered vertex pair.
///
/// `None` marks "no direct edge". The matrix is symmetric by construction.
/// Memory is `O(V^2)` regardless of edge count, so prefer
/// [`AdjacencyList`](crate::graph::AdjacencyList) for large sparse inputs.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<V, W>
where
    V: Vertex,
    W: Weight,
{
    vertices: VertexSet<V>,

    /// Row-major `n * n` weights
    weights: Vec<Option<W>>,

    edge_count: usize,
}

impl<V, W> AdjacencyMatrix<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Builds an adjacency matrix with the default options
    pub fn build<I, E, J>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: Into<Edge<V, W>>,
        J: IntoIterator<Item = E>,
    {
        Self::build_with(vertices, edges, &BuildOptions::default())
    }

    /// Builds an adjacency matrix with explicit options.
    ///
    /// Fails with [`Error::GraphTooLarge`] when the `n * n` slots cannot be
    /// allocated, instead of aborting on allocation failure.
    pub fn build_with<I, E, J>(vertices: I, edges: J, options: &BuildOptions) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: Into<Edge<V, W>>,
        J: IntoIterator<Item = E>,
    {
        let vertices: VertexSet<V> = vertices.into_iter().collect();
        let resolved = resolve_edges(&vertices, edges, options)?;

        let n = vertices.len();
        let slots = n.checked_mul(n).ok_or(Error::GraphTooLarge { vertices: n })?;
        let mut weights = Vec::new();
        weights
            .try_reserve_exact(slots)
            .map_err(|_| Error::GraphTooLarge { vertices: n })?;
        weights.resize(slots, None);
        for (&(u, v), &weight) in &resolved {
            weights[u * n + v] = Some(weight);
            weights[v * n + u] = Some(weight);
        }

        Ok(AdjacencyMatrix {
            vertices,
            weights,
            edge_count: resolved.len(),
        })
    }

    fn row(&self, index: usize) -> Option<&[Option<W>]> {
        let n = self.vertices.len();
        if index < n {
            Some(&self.weights[index * n..(index + 1) * n])
        } else {
            None
        }
    }
}

impl<V, W> Graph<V, W> for AdjacencyMatrix<V, W>
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
        match self.row(index) {
            Some(row) => Box::new(
                row.iter()
                    .enumerate()
                    .filter_map(|(target, weight)| weight.map(|w| (target, w))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn weight_between(&self, u: usize, v: usize) -> Option<W> {
        self.row(u)?.get(v).copied().flatten()
    }
}
