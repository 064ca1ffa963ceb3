//! Presentation helpers applied at the boundary.
//!
//! The engine never stores a sentinel for unreachable vertices; callers that
//! want one translate here.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::algorithm::DistanceMap;
use crate::graph::{Vertex, VertexSet, Weight};

/// Sentinel used for unreachable vertices in signed integer views
pub const UNREACHABLE: i64 = -1;

/// Pairs every vertex with its distance, substituting `sentinel` when unreachable.
///
/// Output follows the vertex set's index order.
pub fn with_sentinel<V, W>(
    distances: &DistanceMap<V, W>,
    vertices: &VertexSet<V>,
    sentinel: W,
) -> Vec<(V, W)>
where
    V: Vertex,
    W: Weight,
{
    vertices
        .iter()
        .map(|v| (v.clone(), distances.get(v).unwrap_or(sentinel)))
        .collect()
}

/// The "unreachable = -1" view, keyed and sorted by vertex
pub fn signed_distances(
    distances: &DistanceMap<i64, i64>,
    vertices: &VertexSet<i64>,
) -> BTreeMap<i64, i64> {
    with_sentinel(distances, vertices, UNREACHABLE).into_iter().collect()
}

/// Human-readable lines, one per destination, sorted by destination.
///
/// Unreachable vertices are skipped unless `unreachable` supplies the text to print.
pub fn report_lines<V, W>(
    distances: &DistanceMap<V, W>,
    vertices: &VertexSet<V>,
    unreachable: Option<&str>,
) -> Vec<String>
where
    V: Vertex + Ord + Display,
    W: Weight + Display,
{
    let source = distances.source();
    let mut destinations: Vec<&V> = vertices.iter().collect();
    destinations.sort();

    destinations
        .into_iter()
        .filter_map(|dest| match (distances.get(dest), unreachable) {
            (Some(dist), _) => Some(format!("The shortest path from {} to {} is {}", source, dest, dist)),
            (None, Some(text)) => Some(format!("The shortest path from {} to {} is {}", source, dest, text)),
            (None, None) => None,
        })
        .collect()
}
