//! Decorator cursor that only yields vertices accepted by a predicate.

use log::trace;

use crate::graph::VertexCursor;
use crate::types::{GraphError, GraphResult, GraphVertex};

use super::Predicate;

/// Wraps an upstream cursor and skips vertices whose value the predicate
/// rejects.
///
/// At most one accepted vertex is buffered. `has_next` pulls from upstream
/// until it finds one, so asking it advances the upstream cursor; asking
/// again without calling `next_vertex` returns the buffered answer.
/// Filtering is read-only: the graph is never touched.
pub struct FilterCursor<V, C, P> {
    upstream: C,
    predicate: P,
    buffered: Option<GraphVertex<V>>,
}

impl<V, C, P> FilterCursor<V, C, P>
where
    C: VertexCursor<V>,
    P: Predicate<V>,
{
    /// Filter `upstream` through `predicate`.
    pub fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            buffered: None,
        }
    }

    /// Give back the upstream cursor, dropping any buffered vertex.
    pub fn into_inner(self) -> C {
        self.upstream
    }
}

impl<V, C, P> VertexCursor<V> for FilterCursor<V, C, P>
where
    C: VertexCursor<V>,
    P: Predicate<V>,
{
    fn has_next(&mut self) -> bool {
        if self.buffered.is_some() {
            return true;
        }
        while self.upstream.has_next() {
            match self.upstream.next_vertex() {
                Ok(vertex) if self.predicate.accept(vertex.value()) => {
                    self.buffered = Some(vertex);
                    return true;
                }
                Ok(vertex) => trace!("Filtered out vertex {}", vertex.index()),
                // Frontier held only visited vertices
                Err(GraphError::Exhausted) => break,
                Err(e) => {
                    trace!("Upstream cursor failed: {}", e);
                    break;
                }
            }
        }
        false
    }

    fn next_vertex(&mut self) -> GraphResult<GraphVertex<V>> {
        if !self.has_next() {
            return Err(GraphError::Exhausted);
        }
        self.buffered.take().ok_or(GraphError::Exhausted)
    }
}

impl<V, C, P> Iterator for FilterCursor<V, C, P>
where
    C: VertexCursor<V>,
    P: Predicate<V>,
{
    type Item = GraphVertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_vertex().ok()
    }
}

/// Adds `.filter_by(predicate)` to every vertex cursor.
pub trait FilterExt<V>: VertexCursor<V> + Sized {
    /// Wrap this cursor in a [`FilterCursor`].
    fn filter_by<P: Predicate<V>>(self, predicate: P) -> FilterCursor<V, Self, P> {
        FilterCursor::new(self, predicate)
    }
}

impl<V, C: VertexCursor<V>> FilterExt<V> for C {}
