use rayon::prelude::*;
use std::collections::HashMap;

use crate::algorithm::{GraphResult, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::Result;

/// Computes every source's result in memory with rayon's global thread pool.
///
/// This is the simple alternative to [`crate::pipeline::Pipeline`]: no bounded
/// channels and no streaming, so memory grows with V². Useful as a cross-check and
/// for small graphs where all results are wanted at once.
pub fn compute_all_pairs<G, A>(graph: &G, algorithm: &A) -> Result<HashMap<G::Vertex, GraphResult<G>>>
where
    G: Graph + Sync,
    G::Vertex: Send + Sync,
    G::Weight: Send,
    A: ShortestPathAlgorithm<G> + Sync,
{
    graph
        .vertices()
        .par_iter()
        .map(|source| {
            let result = algorithm.compute_shortest_paths(graph, source)?;
            Ok((source.clone(), result))
        })
        .collect()
}
