pub mod all_pairs;
pub mod dijkstra;
pub mod traits;

pub use dijkstra::Dijkstra;
pub use traits::{GraphResult, ShortestPathAlgorithm, ShortestPathResult};
