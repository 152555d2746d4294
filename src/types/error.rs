//! Error types for the labeled graph library.

use thiserror::Error;

/// All errors that can occur in the labeled graph library.
///
/// A lookup that finds no vertex is not an error: mutation methods report
/// it as `Ok(false)`.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A root vertex was already assigned to this graph.
    #[error("Root vertex has already been assigned")]
    RootAlreadySet,

    /// A vertex index given from an untrusted source was negative.
    #[error("Index cannot be negative: {0}")]
    NegativeIndex(i64),

    /// `next` was called on a cursor with no remaining vertex.
    #[error("Cursor has no remaining vertex")]
    Exhausted,

    /// A builder link referenced an anchor vertex that does not exist.
    #[error("Anchor vertex not found: {0}")]
    AnchorNotFound(String),

    /// No vertex has the requested index (raised by the CLI only; the graph
    /// API reports misses as `false` / `None`).
    #[error("Vertex {0} not found")]
    VertexNotFound(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON construction script.
    #[error("Malformed graph script: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// True for precondition violations raised at the offending call.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::RootAlreadySet | Self::NegativeIndex(_))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
