pub mod edge_list;
pub mod generators;
pub mod traits;
pub mod undirected;

pub use traits::{infinity, EdgeWeight, Graph, VertexId};
pub use undirected::UndirectedGraph;
