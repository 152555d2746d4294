//! All data types for the labeled graph library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::{GraphEdge, GraphVertex};

/// Stable vertex index: assigned once at creation, never reused.
pub type VertexIndex = usize;

/// Convert an untrusted signed index into a [`VertexIndex`].
pub fn checked_index(raw: i64) -> GraphResult<VertexIndex> {
    if raw < 0 {
        return Err(GraphError::NegativeIndex(raw));
    }
    // Indices past usize::MAX cannot name a vertex on this target.
    Ok(usize::try_from(raw).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_index() {
        assert_eq!(checked_index(0).unwrap(), 0);
        assert_eq!(checked_index(42).unwrap(), 42);
        match checked_index(-1) {
            Err(GraphError::NegativeIndex(-1)) => {}
            other => panic!("Expected NegativeIndex, got {:?}", other),
        }
    }
}
