use std::collections::HashMap;

use serde::Serialize;

use crate::graph::{Vertex, Weight};

/// Counters collected while running one query
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Vertices whose distance was fixed
    pub finalized: usize,
    /// Candidate distances pushed onto the queue (excluding the source seed)
    pub relaxations: usize,
    /// Popped entries discarded because their vertex was already finalized
    pub stale_pops: usize,
    /// Largest number of pending queue entries
    pub max_queue_len: usize,
}

/// Minimum distances from a source to every reachable vertex.
///
/// Unreachable vertices are absent. Entries are kept in the order they were
/// finalized, which is non-decreasing by distance.
#[derive(Debug, Clone)]
pub struct DistanceMap<V, W>
where
    V: Vertex,
    W: Weight,
{
    source: V,
    distances: HashMap<V, W>,
    order: Vec<V>,
    stats: SearchStats,
}

impl<V, W> DistanceMap<V, W>
where
    V: Vertex,
    W: Weight,
{
    pub(crate) fn new(source: V) -> Self {
        DistanceMap {
            source,
            distances: HashMap::new(),
            order: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Records the final distance of a vertex. Each vertex is written once.
    pub(crate) fn finalize(&mut self, vertex: V, distance: W) {
        debug_assert!(!self.distances.contains_key(&vertex));
        self.distances.insert(vertex.clone(), distance);
        self.order.push(vertex);
    }

    pub(crate) fn set_stats(&mut self, stats: SearchStats) {
        self.stats = stats;
    }

    /// The vertex the query started from
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the distance to a vertex, or `None` if it is unreachable
    pub fn get(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Number of reachable vertices, the source included
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(vertex, distance)` in finalization order
    pub fn iter(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.order.iter().map(move |v| (v, self.distances[v]))
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn into_map(self) -> HashMap<V, W> {
        self.distances
    }
}

impl<V, W> PartialEq for DistanceMap<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.distances == other.distances
    }
}

impl<V, W> Eq for DistanceMap<V, W>
where
    V: Vertex,
    W: Weight,
{
}
