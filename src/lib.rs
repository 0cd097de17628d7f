//! MT SSSP - all-sources shortest paths and eccentricities on a worker pool
//!
//! For every node of a weighted directed graph (negative weights allowed) this library
//! computes the single-source shortest distances, the farthest reachable node and the
//! path leading to it. Sources are fed to a fixed pool of workers by a dispatcher and the
//! per-source results are serialized by a single writer, the three stages being coupled
//! by bounded queues.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod output;
pub mod pipeline;

pub use algorithm::{
    bellman_ford::BellmanFord, eccentricity::Eccentricity, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use output::record::ResultRecord;
pub use pipeline::{FailurePolicy, Pipeline, PipelineConfig, RunReport};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot allocate storage for {0} vertices")]
    Allocation(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Negative cycle reachable from source {0}")]
    NegativeCycle(usize),

    #[error("Cost overflow while relaxing edges from source {0}")]
    CostOverflow(usize),

    #[error("Inconsistent shortest path result for source {0}")]
    InconsistentResult(usize),

    #[error("Cannot reconstruct path from {0} to {1}")]
    PathReconstruction(usize, usize),

    #[error("Truncated input: {0}")]
    Truncated(&'static str),

    #[error("{0} does not fit the binary format")]
    Encoding(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Pipeline cancelled")]
    Cancelled,

    #[error("Queue closed: no consumer left")]
    QueueClosed,

    #[error("{0} thread panicked")]
    ThreadPanicked(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
