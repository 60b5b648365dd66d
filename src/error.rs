//! Error types for traversal construction and graph conformance checks.
//!
//! Expected lookups that miss (`find_vertex`, `find_vertex_edge`) are not
//! errors; they return `None`. The variants here cover caller mistakes that
//! the `try_*` constructors surface instead of panicking, and the
//! observable failure modes of the algorithms themselves.

/// Graph traversal error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A seed or lookup id does not name a vertex of the graph.
    #[error("vertex index {index} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange {
        /// Dense index of the offending id.
        index: usize,
        /// Vertex count of the graph at the time of the call.
        num_vertices: usize,
    },

    /// Topological sort could not order every reachable vertex.
    #[error("cycle detected: vertex index {vertex} and {remaining} vertices in total could not be ordered")]
    CycleDetected {
        /// Dense index of a vertex lying on, or downstream of, a cycle.
        vertex: usize,
        /// Number of reachable vertices left with a nonzero in-degree.
        remaining: usize,
    },

    /// The outgoing and incoming edge sets of a bidirectional graph disagree.
    #[error("inconsistent bidirectional graph: {0}")]
    Inconsistent(String),

    /// Compressed sparse row input is malformed.
    #[error("invalid CSR format: {0}")]
    InvalidCsr(String),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
