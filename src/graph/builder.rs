//! Fluent API for building Graph instances.

use std::fmt::Debug;

use crate::types::{GraphError, GraphResult, VertexIndex};

use super::Graph;

/// A queued attachment: anchor value, edge label, new value.
struct Link<V> {
    anchor: V,
    label: Option<String>,
    value: V,
}

/// Fluent builder for constructing a [`Graph`].
///
/// Links are replayed in the order they were given, so a link may anchor on
/// a value introduced by an earlier link.
pub struct GraphBuilder<V> {
    root: Option<V>,
    links: Vec<Link<V>>,
}

impl<V> GraphBuilder<V> {
    /// Create a builder for a graph without a root.
    pub fn new() -> Self {
        Self {
            root: None,
            links: Vec::new(),
        }
    }

    /// Create a builder whose graph starts at `root`.
    pub fn rooted(root: V) -> Self {
        Self {
            root: Some(root),
            links: Vec::new(),
        }
    }

    /// Attach `value` to the first vertex valued `anchor`.
    pub fn link(mut self, anchor: V, label: Option<&str>, value: V) -> Self {
        self.links.push(Link {
            anchor,
            label: label.map(str::to_owned),
            value,
        });
        self
    }

    /// Number of links queued so far.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl<V: PartialEq + Debug> GraphBuilder<V> {
    /// Build the final graph.
    ///
    /// Fails with [`GraphError::AnchorNotFound`] on the first link whose
    /// anchor is not in the graph at that point.
    pub fn build(self) -> GraphResult<Graph<V>> {
        let mut graph = match self.root {
            Some(root) => Graph::with_root(root),
            None => Graph::new(),
        };
        for link in self.links {
            let attached: Option<VertexIndex> =
                graph.add(&link.anchor, link.label.as_deref(), link.value);
            if attached.is_none() {
                return Err(GraphError::AnchorNotFound(format!("{:?}", link.anchor)));
            }
        }
        Ok(graph)
    }
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
