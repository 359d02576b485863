use num_traits::PrimInt;
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a graph vertex, e.g. a `String` label or a `usize` index
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Integer edge weight; negative values are rejected when the graph is built
pub trait EdgeWeight: PrimInt + Debug {}

impl<T> EdgeWeight for T where T: PrimInt + Debug {}

/// Sentinel distance for vertices not (yet) reached from the source.
///
/// No valid path sum may reach this value: relaxation uses checked addition, so a
/// sum that would overflow is discarded rather than wrapped.
pub fn infinity<W: EdgeWeight>() -> W {
    W::max_value()
}

/// Trait representing a weighted undirected graph
pub trait Graph: Debug {
    type Vertex: VertexId;
    type Weight: EdgeWeight;

    /// Returns every vertex of the graph, in a stable order
    fn vertices(&self) -> &[Self::Vertex];

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the neighbors of a vertex and the connecting weights.
    ///
    /// A vertex without adjacency entries yields an empty iterator.
    fn neighbors(
        &self,
        vertex: &Self::Vertex,
    ) -> Box<dyn Iterator<Item = (&Self::Vertex, Self::Weight)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Option<Self::Weight>;
}
