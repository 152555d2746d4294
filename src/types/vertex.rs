//! Immutable snapshots of graph positions handed out by cursors.

use serde::Serialize;

/// One incident edge as seen from a vertex: its label and the value at the
/// other end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge<V> {
    label: Option<String>,
    neighbor_value: V,
}

impl<V> GraphEdge<V> {
    /// Create an edge view.
    pub fn new(label: Option<String>, neighbor_value: V) -> Self {
        Self {
            label,
            neighbor_value,
        }
    }

    /// The edge label. `None` when the edge was added without one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Value of the vertex at the other end of the edge.
    pub fn neighbor_value(&self) -> &V {
        &self.neighbor_value
    }
}

/// A point-in-time copy of a vertex: value, stable index and incident edges.
///
/// Built when a cursor visits the vertex. Later graph mutations never show
/// through an already returned snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphVertex<V> {
    value: V,
    index: usize,
    edges: Vec<GraphEdge<V>>,
}

impl<V> GraphVertex<V> {
    /// Create a vertex snapshot.
    pub fn new(value: V, index: usize, edges: Vec<GraphEdge<V>>) -> Self {
        Self {
            value,
            index,
            edges,
        }
    }

    /// The vertex value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The index assigned when the vertex was created.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Incident edges in adjacency order.
    pub fn edges(&self) -> &[GraphEdge<V>] {
        &self.edges
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Consume the snapshot, keeping only the value.
    pub fn into_value(self) -> V {
        self.value
    }
}
