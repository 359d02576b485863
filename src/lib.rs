//! APSP Pool - all-sources shortest paths on a bounded worker pool
//!
//! Runs Dijkstra's algorithm once from every vertex of a weighted undirected graph.
//! A dispatcher feeds source vertices into a bounded work channel, a fixed pool of
//! workers computes one shortest-path tree per source, and a collector hands each
//! result to a sink in arrival order.
//!
//! The graph is borrowed immutably by every worker; each computation owns its own
//! priority queue and maps, so the channels are the only shared mutable state.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod pipeline;
pub mod sink;

pub use algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use pipeline::{CancellationToken, Pipeline, PipelineConfig, PipelineReport, PipelineStatus};
pub use sink::{JsonLinesSink, ResultSink, TextSink};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Negative edge weight on edge {0}")]
    NegativeWeight(String),

    #[error("Total edge weight would reach the infinite distance on edge {0}")]
    WeightOverflow(String),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(String),

    #[error("Priority queue invariant violated: {0}")]
    QueueInvariantViolation(String),

    #[error("Invalid pipeline configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write result: {0}")]
    Sink(#[source] std::io::Error),

    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("A worker thread panicked")]
    WorkerPanicked,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
