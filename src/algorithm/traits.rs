use std::collections::HashMap;

use crate::graph::{infinity, EdgeWeight, Graph, VertexId};
use crate::Result;

/// Result of one single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Source vertex
    pub source: V,

    /// Distance from the source to each vertex; `infinity()` when unreachable
    pub distances: HashMap<V, W>,

    /// Predecessor of each vertex in the shortest path tree; `None` for the source
    /// and for unreachable vertices
    pub predecessors: HashMap<V, Option<V>>,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Distance to `vertex`, or `None` if it is unreachable or unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| *distance != infinity())
    }

    /// Predecessor of `vertex` in the shortest path tree
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(Option::as_ref)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances
            .values()
            .filter(|distance| **distance != infinity())
            .count()
    }
}

/// Shorthand for the result type produced on a graph `G`
pub type GraphResult<G> = ShortestPathResult<<G as Graph>::Vertex, <G as Graph>::Weight>;

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &G::Vertex) -> Result<GraphResult<G>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
