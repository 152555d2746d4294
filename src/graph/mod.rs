//! In-memory graph operations: the core data structure and its cursors.

pub mod builder;
pub mod labeled_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use labeled_graph::Graph;
pub use traversal::{Traversal, TraversalOrder, VertexCursor, Walker};
