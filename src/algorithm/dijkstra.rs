use num_traits::{CheckedAdd, Zero};
use std::collections::HashMap;

use crate::algorithm::{GraphResult, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{infinity, Graph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over an indexed decrease-key heap
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &G::Vertex) -> Result<GraphResult<G>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }

        let vertices = graph.vertices();
        let mut distances: HashMap<G::Vertex, G::Weight> = HashMap::with_capacity(vertices.len());
        let mut predecessors: HashMap<G::Vertex, Option<G::Vertex>> = HashMap::with_capacity(vertices.len());
        let mut queue = IndexedPriorityQueue::with_capacity(vertices.len());

        // Every vertex is queued up front; only the source starts finite
        for vertex in vertices {
            let initial = if vertex == source {
                G::Weight::zero()
            } else {
                infinity()
            };
            distances.insert(vertex.clone(), initial);
            predecessors.insert(vertex.clone(), None);
            queue.insert(vertex.clone(), initial)?;
        }

        while let Some((u, dist_u)) = queue.extract_min() {
            // Everything left is unreachable
            if dist_u == infinity() {
                continue;
            }

            for (v, weight) in graph.neighbors(&u) {
                if *v == u || !queue.contains(v) {
                    continue;
                }

                let candidate = match dist_u.checked_add(&weight) {
                    Some(candidate) if candidate != infinity() => candidate,
                    _ => continue,
                };

                let improves = distances
                    .get(v)
                    .map_or(false, |current| candidate < *current);
                if improves {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.decrease_key(v, candidate)?;
                }
            }
        }

        Ok(ShortestPathResult {
            source: source.clone(),
            distances,
            predecessors,
        })
    }
}
