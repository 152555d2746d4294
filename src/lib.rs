//! Labeled graph — a mutable, undirected graph with labeled edges.
//!
//! Vertices hang off a single root and keep the index they were created
//! with. The graph is walked lazily in breadth-first or depth-first order,
//! one vertex snapshot at a time, and any walk can be filtered through
//! composable predicates.

pub mod cli;
pub mod filter;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use filter::{And, FilterCursor, FilterExt, Not, Or, Predicate, PredicateExt};
pub use graph::{Graph, GraphBuilder, Traversal, TraversalOrder, VertexCursor, Walker};
pub use types::{
    checked_index, GraphEdge, GraphError, GraphResult, GraphVertex, VertexIndex,
};
