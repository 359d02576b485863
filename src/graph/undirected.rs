use crate::graph::traits::{infinity, EdgeWeight, Graph, VertexId};
use crate::{Error, Result};
use std::collections::HashMap;

/// An undirected graph implementation using adjacency maps
///
/// Every edge is stored in both directions with the same weight. The graph is only
/// mutable while it is being built; the pipeline borrows it immutably.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Vertices in insertion order
    vertices: Vec<V>,

    /// Adjacency: vertex -> {neighbor -> weight}
    adjacency: HashMap<V, HashMap<V, W>>,

    /// Number of distinct undirected edges
    edge_count: usize,

    /// Sum of all edge weights, kept below `infinity()` so that no simple path
    /// can reach the sentinel
    total_weight: W,
}

impl<V, W> UndirectedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
            total_weight: W::zero(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            vertices: Vec::with_capacity(vertices),
            adjacency: HashMap::with_capacity(vertices),
            edge_count: 0,
            total_weight: W::zero(),
        }
    }

    /// Builds a graph from `(u, v, weight)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Adds a vertex if it is not already present. Returns true if it was added.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.vertices.push(vertex.clone());
        self.adjacency.insert(vertex, HashMap::new());
        true
    }

    /// Adds an undirected edge, creating missing endpoints.
    ///
    /// Adding an edge that already exists replaces its weight in both directions.
    /// Fails with [`Error::WeightOverflow`] if the sum of all edge weights would
    /// reach the infinite-distance sentinel; the graph is left unchanged.
    pub fn add_edge(&mut self, u: V, v: V, weight: W) -> Result<()> {
        if weight < W::zero() {
            return Err(Error::NegativeWeight(format!("{:?} - {:?}", u, v)));
        }

        let replaced = self.edge_weight(&u, &v).unwrap_or_else(W::zero);
        let total = self
            .total_weight
            .checked_sub(&replaced)
            .and_then(|total| total.checked_add(&weight))
            .filter(|total| *total < infinity());
        self.total_weight = match total {
            Some(total) => total,
            None => return Err(Error::WeightOverflow(format!("{:?} - {:?}", u, v))),
        };

        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        let previous = self
            .adjacency
            .get_mut(&u)
            .and_then(|edges| edges.insert(v.clone(), weight));
        if let Some(edges) = self.adjacency.get_mut(&v) {
            edges.insert(u, weight);
        }

        if previous.is_none() {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Sum of the weights of all edges
    pub fn total_weight(&self) -> W {
        self.total_weight
    }
}

impl<V, W> Default for UndirectedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph for UndirectedGraph<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    type Vertex = V;
    type Weight = W;

    fn vertices(&self) -> &[V] {
        &self.vertices
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|(neighbor, weight)| (neighbor, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }
}
