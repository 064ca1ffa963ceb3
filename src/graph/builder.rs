use std::collections::BTreeMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::graph::adjacency_list::AdjacencyList;
use crate::graph::adjacency_matrix::AdjacencyMatrix;
use crate::graph::edge::Edge;
use crate::graph::traits::Graph;
use crate::graph::vertex_set::{Vertex, VertexSet};
use crate::graph::weight::Weight;
use crate::{Error, Result};

/// How repeated edges between the same pair of vertices are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateEdgePolicy {
    /// The edge supplied last overwrites earlier ones
    #[default]
    LastWins,
    /// The lightest edge is kept
    MinWeight,
}

/// Options shared by every graph representation's builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub duplicate_policy: DuplicateEdgePolicy,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for repeated edges
    pub fn with_duplicate_policy(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// Storage layout for a built graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// `V * V` weight matrix
    Dense,
    /// Per-vertex neighbor lists
    #[default]
    Sparse,
}

/// A built graph behind a trait object, shareable across threads
pub type DynGraph<V, W> = Box<dyn Graph<V, W> + Send + Sync>;

/// Builds a graph in the requested representation
pub fn build_graph<V, W, I, E, J>(
    vertices: I,
    edges: J,
    options: &BuildOptions,
    representation: Representation,
) -> Result<DynGraph<V, W>>
where
    V: Vertex + Send + Sync + 'static,
    W: Weight + Send + Sync + 'static,
    I: IntoIterator<Item = V>,
    E: Into<Edge<V, W>>,
    J: IntoIterator<Item = E>,
{
    let graph: DynGraph<V, W> = match representation {
        Representation::Dense => Box::new(AdjacencyMatrix::build_with(vertices, edges, options)?),
        Representation::Sparse => Box::new(AdjacencyList::build_with(vertices, edges, options)?),
    };
    Ok(graph)
}

/// Builds the default (sparse) adjacency structure from a vertex list and an edge list.
///
/// Fails with [`Error::InvalidEdge`] if an edge names a vertex outside `vertices`,
/// and with [`Error::InvalidWeight`] if a weight is negative. An empty vertex
/// list yields an empty graph.
pub fn build<V, W, I, E, J>(vertices: I, edges: J) -> Result<AdjacencyList<V, W>>
where
    V: Vertex,
    W: Weight,
    I: IntoIterator<Item = V>,
    E: Into<Edge<V, W>>,
    J: IntoIterator<Item = E>,
{
    AdjacencyList::build(vertices, edges)
}

/// Validates edges against the vertex universe and resolves duplicates.
///
/// Keys are normalized unordered index pairs `(min, max)`, so `(u, v)` and
/// `(v, u)` refer to the same edge.
pub(crate) fn resolve_edges<V, W, E, J>(
    vertices: &VertexSet<V>,
    edges: J,
    options: &BuildOptions,
) -> Result<BTreeMap<(usize, usize), W>>
where
    V: Vertex,
    W: Weight,
    E: Into<Edge<V, W>>,
    J: IntoIterator<Item = E>,
{
    let mut resolved = BTreeMap::new();
    let mut supplied = 0usize;

    for edge in edges {
        let Edge { u, v, weight } = edge.into();
        supplied += 1;

        let (ui, vi) = match (vertices.index_of(&u), vertices.index_of(&v)) {
            (Some(ui), Some(vi)) => (ui, vi),
            _ => {
                return Err(Error::InvalidEdge {
                    from: format!("{:?}", u),
                    to: format!("{:?}", v),
                })
            }
        };

        if !weight.is_valid() {
            return Err(Error::InvalidWeight {
                from: format!("{:?}", u),
                to: format!("{:?}", v),
                weight: format!("{:?}", weight),
            });
        }

        let key = (ui.min(vi), ui.max(vi));
        match options.duplicate_policy {
            DuplicateEdgePolicy::LastWins => {
                if let Some(previous) = resolved.insert(key, weight) {
                    trace!("edge {:?} - {:?} overwritten: {:?} -> {:?}", u, v, previous, weight);
                }
            }
            DuplicateEdgePolicy::MinWeight => {
                resolved
                    .entry(key)
                    .and_modify(|current: &mut W| {
                        if weight < *current {
                            *current = weight;
                        }
                    })
                    .or_insert(weight);
            }
        }
    }

    debug!(
        "resolved {} supplied edges into {} distinct pairs over {} vertices",
        supplied,
        resolved.len(),
        vertices.len()
    );

    Ok(resolved)
}
