//! Core graph structure: vertices in insertion order, each owning its half
//! of every undirected edge.

use std::borrow::Borrow;

use log::debug;

use crate::types::{GraphEdge, GraphError, GraphResult, GraphVertex, VertexIndex};

use super::traversal::{Traversal, TraversalOrder};

/// One half of an undirected edge, stored on the adjacency list of one
/// endpoint and pointing at the other.
#[derive(Debug, Clone)]
pub(crate) struct InternalEdge {
    pub(crate) label: Option<String>,
    pub(crate) neighbor: VertexIndex,
}

/// A vertex as the graph stores it.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    pub(crate) value: V,
    pub(crate) index: VertexIndex,
    pub(crate) adjacent: Vec<InternalEdge>,
}

impl<V> Node<V> {
    fn new(value: V, index: VertexIndex) -> Self {
        Self {
            value,
            index,
            adjacent: Vec::new(),
        }
    }
}

/// A mutable, undirected graph with optionally labeled edges.
///
/// Every vertex gets an index from a per-graph counter when it is created.
/// Indices follow creation order and are never reassigned or reused, even
/// after the vertex is removed.
///
/// Vertices are reached from the root: new vertices are always attached to
/// an existing one, and both traversal orders start at the root.
///
/// The graph does no internal locking. Any number of cursors may read it
/// concurrently (from several threads, too) as long as nobody mutates it.
/// A cursor borrowing the graph statically prevents mutation; a detached
/// [`Walker`](super::Walker) allows it between steps, with the caveats
/// documented there.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Index of the root vertex, once assigned. Never reassigned.
    root: Option<VertexIndex>,
    /// All live vertices, in insertion (and therefore index) order.
    nodes: Vec<Node<V>>,
    /// Next index to hand out.
    next_index: VertexIndex,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> {
    /// Create an empty graph with no root.
    pub fn new() -> Self {
        Self {
            root: None,
            nodes: Vec::new(),
            next_index: 0,
        }
    }

    /// Create a graph whose root vertex (index 0) holds `value`.
    pub fn with_root(value: V) -> Self {
        let mut graph = Self::new();
        let index = graph.allocate_index();
        graph.nodes.push(Node::new(value, index));
        graph.root = Some(index);
        graph
    }

    /// Number of live vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph holds no vertex.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the root vertex, if one was assigned and is still present.
    pub fn root_index(&self) -> Option<VertexIndex> {
        self.root.filter(|&index| self.node(index).is_some())
    }

    /// One past the largest index ever assigned.
    pub fn index_bound(&self) -> VertexIndex {
        self.next_index
    }

    /// Add the root vertex to a graph that has none.
    ///
    /// Fails with [`GraphError::RootAlreadySet`] if a root was ever assigned,
    /// including one that has since been removed.
    pub fn add_root(&mut self, value: V) -> GraphResult<VertexIndex> {
        if self.root.is_some() {
            return Err(GraphError::RootAlreadySet);
        }
        let index = self.allocate_index();
        self.nodes.push(Node::new(value, index));
        self.root = Some(index);
        debug!("Added root vertex {}", index);
        Ok(index)
    }

    /// Attach a new vertex to the existing vertex at `index`.
    ///
    /// Returns the new vertex's index, or `None` when no vertex has `index`.
    pub fn add_to_index(
        &mut self,
        index: VertexIndex,
        label: Option<&str>,
        value: V,
    ) -> Option<VertexIndex> {
        let pos = self.position_of_index(index)?;
        Some(self.attach(pos, label, value))
    }

    /// Remove the vertex at `index` and every edge incident to it.
    ///
    /// Returns false when no vertex has `index`.
    pub fn remove_at_index(&mut self, index: VertexIndex) -> bool {
        match self.position_of_index(index) {
            Some(pos) => {
                self.remove_position(pos);
                true
            }
            None => false,
        }
    }

    /// Replace the value of the vertex at `index`, keeping its index.
    pub fn set_vertex_at_index(&mut self, index: VertexIndex, value: V) -> bool {
        match self.position_of_index(index) {
            Some(pos) => {
                self.nodes[pos].value = value;
                debug!("Replaced value of vertex {}", index);
                true
            }
            None => false,
        }
    }

    /// Relabel the edge between the vertices at `a` and `b`.
    ///
    /// Both halves of the edge are updated. Returns true only if both halves
    /// were found, which requires both vertices to exist and be adjacent.
    pub fn set_edge_at_index(
        &mut self,
        a: VertexIndex,
        b: VertexIndex,
        label: Option<&str>,
    ) -> bool {
        let (Some(pos_a), Some(pos_b)) = (self.position_of_index(a), self.position_of_index(b))
        else {
            return false;
        };
        let label = label.map(str::to_owned);
        let set_a = Self::relabel(&mut self.nodes[pos_a], b, &label);
        let set_b = Self::relabel(&mut self.nodes[pos_b], a, &label);
        if set_a && set_b {
            debug!("Relabeled edge {} <-> {}", a, b);
        }
        set_a && set_b
    }

    /// Breadth-first cursor from the root.
    pub fn bfs_iter(&self) -> Traversal<'_, V> {
        Traversal::new(self, TraversalOrder::BreadthFirst)
    }

    /// Depth-first cursor from the root.
    pub fn dfs_iter(&self) -> Traversal<'_, V> {
        Traversal::new(self, TraversalOrder::DepthFirst)
    }

    /// Cursor from the root in the given order.
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, V> {
        Traversal::new(self, order)
    }

    /// Look up a live vertex by index.
    pub(crate) fn node(&self, index: VertexIndex) -> Option<&Node<V>> {
        self.position_of_index(index).map(|pos| &self.nodes[pos])
    }

    fn allocate_index(&mut self) -> VertexIndex {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    /// Position of the vertex with `index` in `nodes`.
    fn position_of_index(&self, index: VertexIndex) -> Option<usize> {
        // Fast path: nothing removed below `index` yet
        if self.nodes.get(index).is_some_and(|n| n.index == index) {
            return Some(index);
        }
        // Indices are strictly increasing in `nodes`, removals included
        self.nodes.binary_search_by_key(&index, |n| n.index).ok()
    }

    /// Create a vertex and connect it to the vertex at `anchor_pos`.
    fn attach(&mut self, anchor_pos: usize, label: Option<&str>, value: V) -> VertexIndex {
        let anchor = self.nodes[anchor_pos].index;
        let index = self.allocate_index();
        let label = label.map(str::to_owned);

        let mut node = Node::new(value, index);
        node.adjacent.push(InternalEdge {
            label: label.clone(),
            neighbor: anchor,
        });
        self.nodes[anchor_pos].adjacent.push(InternalEdge {
            label,
            neighbor: index,
        });
        self.nodes.push(node);

        debug!("Added vertex {} attached to {}", index, anchor);
        index
    }

    fn remove_position(&mut self, pos: usize) {
        let removed = self.nodes.remove(pos);
        for node in &mut self.nodes {
            node.adjacent.retain(|e| e.neighbor != removed.index);
        }
        debug!(
            "Removed vertex {} ({} incident edges)",
            removed.index,
            removed.adjacent.len()
        );
    }

    fn relabel(node: &mut Node<V>, neighbor: VertexIndex, label: &Option<String>) -> bool {
        let mut found = false;
        for edge in node.adjacent.iter_mut().filter(|e| e.neighbor == neighbor) {
            edge.label.clone_from(label);
            found = true;
        }
        found
    }
}

impl<V: PartialEq> Graph<V> {
    /// Attach a new vertex to the first vertex (in insertion order) whose
    /// value equals `existing`.
    ///
    /// Returns the new vertex's index, or `None` when no vertex matches.
    pub fn add<Q>(&mut self, existing: &Q, label: Option<&str>, value: V) -> Option<VertexIndex>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let pos = self.position_of_value(existing)?;
        Some(self.attach(pos, label, value))
    }

    /// Remove the first vertex whose value equals `value`, and every edge
    /// incident to it.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.position_of_value(value) {
            Some(pos) => {
                self.remove_position(pos);
                true
            }
            None => false,
        }
    }

    /// Replace the value of the first vertex whose value equals `existing`.
    pub fn set_vertex<Q>(&mut self, existing: &Q, value: V) -> bool
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.position_of_value(existing) {
            Some(pos) => {
                self.nodes[pos].value = value;
                debug!("Replaced value of vertex {}", self.nodes[pos].index);
                true
            }
            None => false,
        }
    }

    /// Relabel the edge between a vertex valued `a` and a vertex valued `b`.
    ///
    /// The endpoints are the first vertex valued `a` (insertion order) that
    /// has a neighbor valued `b`, and that vertex's first such neighbor.
    /// Which value is passed as `a` and which as `b` does not matter.
    pub fn set_edge<Q>(&mut self, a: &Q, b: &Q, label: Option<&str>) -> bool
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.find_edge(a, b) {
            Some((ia, ib)) => self.set_edge_at_index(ia, ib, label),
            None => false,
        }
    }

    /// True if some vertex has value `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position_of_value(value).is_some()
    }

    /// Index of the first vertex whose value equals `value`.
    pub fn index_of<Q>(&self, value: &Q) -> Option<VertexIndex>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position_of_value(value).map(|pos| self.nodes[pos].index)
    }

    fn position_of_value<Q>(&self, value: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.nodes.iter().position(|n| n.value.borrow() == value)
    }

    fn find_edge<Q>(&self, a: &Q, b: &Q) -> Option<(VertexIndex, VertexIndex)>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.nodes
            .iter()
            .filter(|n| n.value.borrow() == a)
            .find_map(|n| {
                n.adjacent
                    .iter()
                    .find(|e| self.node(e.neighbor).is_some_and(|m| m.value.borrow() == b))
                    .map(|e| (n.index, e.neighbor))
            })
    }
}

impl<V: Clone> Graph<V> {
    /// Snapshot of the vertex at `index`.
    pub fn vertex_at(&self, index: VertexIndex) -> Option<GraphVertex<V>> {
        self.node(index).map(|node| self.snapshot(node))
    }

    /// Snapshots of every vertex, in insertion order.
    pub fn vertices(&self) -> Vec<GraphVertex<V>> {
        self.nodes.iter().map(|node| self.snapshot(node)).collect()
    }

    /// Copy a vertex and its current adjacency into an external snapshot.
    pub(crate) fn snapshot(&self, node: &Node<V>) -> GraphVertex<V> {
        let edges = node
            .adjacent
            .iter()
            .filter_map(|e| {
                self.node(e.neighbor)
                    .map(|m| GraphEdge::new(e.label.clone(), m.value.clone()))
            })
            .collect();
        GraphVertex::new(node.value.clone(), node.index, edges)
    }
}
