use log::{debug, trace};

use crate::algorithm::{DistanceMap, SearchStats, ShortestPathAlgorithm};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a binary heap and lazy deletion
///
/// Every relaxation pushes a fresh candidate; a popped entry whose vertex is
/// already finalized is stale and skipped. Equal distances are popped in
/// ascending vertex-index order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Computes shortest distances from `source` over `graph` with [`Dijkstra`]
pub fn shortest_paths<V, W, G>(source: &V, graph: &G) -> Result<DistanceMap<V, W>>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<DistanceMap<V, W>> {
        let mut result = DistanceMap::new(source.clone());

        // An empty universe has nothing to reach from any source
        if graph.vertex_count() == 0 {
            debug!("empty graph, returning empty distance map");
            return Ok(result);
        }

        let vertices = graph.vertices();
        let source_index = vertices
            .index_of(source)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", source)))?;

        let n = vertices.len();
        let mut finalized: Vec<Option<W>> = vec![None; n];
        // Vertices that were offered a candidate distance too large to represent
        let mut overflowed = vec![false; n];
        let mut stats = SearchStats::default();

        let mut queue = MinPriorityQueue::new();
        queue.push(source_index, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if finalized[u].is_some() {
                stats.stale_pops += 1;
                continue;
            }

            finalized[u] = Some(dist_u);
            stats.finalized += 1;
            // Queue keys are the source index or neighbor indices, all below `n`
            let vertex = &vertices[u];
            trace!("finalized {:?} at {:?}", vertex, dist_u);
            result.finalize(vertex.clone(), dist_u);

            for (v, weight) in graph.neighbors(u) {
                if finalized[v].is_some() {
                    continue;
                }
                match dist_u.checked_sum(weight) {
                    Some(candidate) => {
                        queue.push(v, candidate);
                        stats.relaxations += 1;
                    }
                    None => overflowed[v] = true,
                }
            }
        }

        // A vertex only reachable through unrepresentable sums has no valid distance
        if let Some(v) = (0..n).find(|&v| overflowed[v] && finalized[v].is_none()) {
            return Err(Error::Overflow(format!("{:?}", vertices[v])));
        }

        stats.max_queue_len = queue.high_water();
        debug!(
            "{} from {:?}: {} of {} vertices reached, {} relaxations, {} stale pops",
            <Self as ShortestPathAlgorithm<V, W, G>>::name(self),
            source,
            stats.finalized,
            n,
            stats.relaxations,
            stats.stale_pops
        );
        result.set_stats(stats);

        Ok(result)
    }
}
