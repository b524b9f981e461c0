//! Error types for the friend-network library.

use thiserror::Error;

/// All errors that can occur in the friend-network library.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// A vertex identifier was never added to the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// Self-loop edges are not allowed.
    #[error("Invalid edge: {0} cannot be linked to itself")]
    InvalidEdge(String),

    /// Edge weights must be strictly positive.
    #[error("Edge weight must be positive, got {weight}")]
    InvalidWeight { weight: u32 },

    /// The name list contained no usable names.
    #[error("Name list is empty")]
    EmptyNameList,

    /// Malformed line in an input file.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for friend-network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;
