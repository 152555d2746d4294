//! Graph traversal cursors (BFS / DFS).
//!
//! Both orders run the same state machine over a double-ended frontier of
//! vertex indices: breadth-first takes from the front, depth-first from the
//! back. Neighbors are discovered when a vertex is visited, not when the
//! cursor is created.

use std::collections::VecDeque;

use log::trace;
use serde::Serialize;

use crate::types::{GraphError, GraphResult, GraphVertex, VertexIndex};

use super::Graph;

/// A source of vertex snapshots driven by `has_next` / `next_vertex`.
pub trait VertexCursor<V> {
    /// True while another vertex may be produced.
    ///
    /// Takes `&mut self` because decorating cursors may advance their
    /// upstream to answer.
    fn has_next(&mut self) -> bool;

    /// The next vertex, or [`GraphError::Exhausted`].
    fn next_vertex(&mut self) -> GraphResult<GraphVertex<V>>;
}

/// Which end of the frontier the next vertex is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// FIFO frontier: level order, adjacency order within a level.
    BreadthFirst,
    /// LIFO frontier: the most recently discovered neighbor is explored
    /// first, so siblings come out in reverse adjacency order.
    DepthFirst,
}

impl TraversalOrder {
    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse an order from its short or long name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Traversal state detached from any graph borrow.
///
/// Step it with [`Walker::next_in`]. Since it holds no reference, the graph
/// may be mutated between steps: vertices and edges added to a vertex that
/// has not been visited yet are picked up when it is visited. Changes to an
/// already visited vertex are not revisited, and removing vertices that are
/// still on the frontier just drops them. For a consistent view, start a new
/// walker after mutating.
#[derive(Debug, Clone)]
pub struct Walker {
    order: TraversalOrder,
    frontier: VecDeque<VertexIndex>,
    /// Grown on demand; indices are never reused so a slot stays valid.
    visited: Vec<bool>,
}

impl Walker {
    /// Start a traversal at the root of `graph`.
    ///
    /// A graph without a root gives a walker that is already exhausted, and
    /// stays so even if a root is added later.
    pub fn new<V>(graph: &Graph<V>, order: TraversalOrder) -> Self {
        let mut frontier = VecDeque::new();
        frontier.extend(graph.root_index());
        Self {
            order,
            frontier,
            visited: Vec::with_capacity(graph.index_bound()),
        }
    }

    /// Breadth-first walker from the root.
    pub fn breadth_first<V>(graph: &Graph<V>) -> Self {
        Self::new(graph, TraversalOrder::BreadthFirst)
    }

    /// Depth-first walker from the root.
    pub fn depth_first<V>(graph: &Graph<V>) -> Self {
        Self::new(graph, TraversalOrder::DepthFirst)
    }

    /// The order this walker visits vertices in.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// True while the frontier is non-empty.
    ///
    /// The frontier may still hold only visited or removed vertices, in
    /// which case the next step fails with [`GraphError::Exhausted`].
    pub fn has_next(&self) -> bool {
        !self.frontier.is_empty()
    }

    /// Visit the next unvisited vertex of `graph`.
    pub fn next_in<V: Clone>(&mut self, graph: &Graph<V>) -> GraphResult<GraphVertex<V>> {
        while let Some(index) = self.pop() {
            if self.is_visited(index) {
                continue;
            }
            let Some(node) = graph.node(index) else {
                continue;
            };
            self.mark_visited(index);
            self.frontier
                .extend(node.adjacent.iter().map(|edge| edge.neighbor));
            trace!(
                "{} visited vertex {} (frontier {})",
                self.order,
                index,
                self.frontier.len()
            );
            return Ok(graph.snapshot(node));
        }
        Err(GraphError::Exhausted)
    }

    fn pop(&mut self) -> Option<VertexIndex> {
        match self.order {
            TraversalOrder::BreadthFirst => self.frontier.pop_front(),
            TraversalOrder::DepthFirst => self.frontier.pop_back(),
        }
    }

    fn is_visited(&self, index: VertexIndex) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }

    fn mark_visited(&mut self, index: VertexIndex) {
        if index >= self.visited.len() {
            self.visited.resize(index + 1, false);
        }
        self.visited[index] = true;
    }
}

/// A lazy cursor over a borrowed graph.
///
/// Holding the borrow keeps the graph unchanged for the cursor's lifetime.
/// Use [`Traversal::detach`] to get a [`Walker`] that allows mutation
/// between steps.
#[derive(Debug, Clone)]
pub struct Traversal<'g, V> {
    graph: &'g Graph<V>,
    walker: Walker,
}

impl<'g, V> Traversal<'g, V> {
    /// Start a traversal at the root of `graph`.
    pub fn new(graph: &'g Graph<V>, order: TraversalOrder) -> Self {
        Self {
            graph,
            walker: Walker::new(graph, order),
        }
    }

    /// The order this cursor visits vertices in.
    pub fn order(&self) -> TraversalOrder {
        self.walker.order()
    }

    /// Release the graph borrow, keeping frontier and visited state.
    pub fn detach(self) -> Walker {
        self.walker
    }
}

impl<V: Clone> VertexCursor<V> for Traversal<'_, V> {
    fn has_next(&mut self) -> bool {
        self.walker.has_next()
    }

    fn next_vertex(&mut self) -> GraphResult<GraphVertex<V>> {
        self.walker.next_in(self.graph)
    }
}

impl<V: Clone> Iterator for Traversal<'_, V> {
    type Item = GraphVertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walker.next_in(self.graph).ok()
    }
}
