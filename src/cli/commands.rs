//! CLI command implementations.
//!
//! Every command loads a JSON construction script, replays it through
//! [`GraphBuilder`] and reports on the resulting graph. Nothing is written
//! back.

use std::fmt::Write as _;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::filter::{FilterExt, PredicateExt};
use crate::graph::{Graph, GraphBuilder, TraversalOrder, VertexCursor};
use crate::types::{checked_index, GraphError, GraphResult, GraphVertex};

/// A graph as a root plus links replayed in order.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphScript {
    /// Value of the root vertex.
    pub root: String,
    /// Attachments, each anchored on a value already in the graph.
    #[serde(default)]
    pub links: Vec<ScriptLink>,
}

/// One attachment in a [`GraphScript`].
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptLink {
    /// Value of the existing vertex to attach to.
    pub from: String,
    /// Edge label; absent means unlabeled.
    #[serde(default)]
    pub label: Option<String>,
    /// Value of the new vertex.
    pub to: String,
}

impl GraphScript {
    /// Parse a script from JSON text.
    pub fn parse(text: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Replay the script into a graph.
    pub fn build(self) -> GraphResult<Graph<String>> {
        self.links
            .into_iter()
            .fold(GraphBuilder::rooted(self.root), |builder, link| {
                builder.link(link.from, link.label.as_deref(), link.to)
            })
            .build()
    }
}

/// Value filters for `traverse`. All given conditions must hold, unless
/// `negate` flips the result.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Keep values with at least this many characters.
    pub min_len: Option<usize>,
    /// Keep values with at most this many characters.
    pub max_len: Option<usize>,
    /// Keep values containing this substring.
    pub contains: Option<String>,
    /// Keep the values the conditions reject instead.
    pub negate: bool,
}

/// Load and build the graph described by the script at `path`.
pub fn load_graph(path: &Path) -> GraphResult<Graph<String>> {
    let text = std::fs::read_to_string(path)?;
    let graph = GraphScript::parse(&text)?.build()?;
    debug!(
        "Loaded {} vertices from {}",
        graph.node_count(),
        path.display()
    );
    Ok(graph)
}

/// Display vertex count, root and per-vertex degree.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    println!("{}", render_info(&graph, json)?);
    Ok(())
}

/// Print the graph in traversal order, filtered by `filter`.
pub fn cmd_traverse(
    path: &Path,
    order: TraversalOrder,
    filter: &FilterOptions,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let vertices = filtered_traversal(&graph, order, filter);
    println!("{}", render_vertices(order, &vertices, json)?);
    Ok(())
}

/// Print the snapshot of the vertex at `raw_index`.
pub fn cmd_neighbors(path: &Path, raw_index: i64, json: bool) -> GraphResult<()> {
    let index = checked_index(raw_index)?;
    let graph = load_graph(path)?;
    let vertex = graph
        .vertex_at(index)
        .ok_or(GraphError::VertexNotFound(index))?;
    println!("{}", render_vertex(&vertex, json)?);
    Ok(())
}

/// Run a traversal through the predicate described by `filter`.
pub fn filtered_traversal(
    graph: &Graph<String>,
    order: TraversalOrder,
    filter: &FilterOptions,
) -> Vec<GraphVertex<String>> {
    let min_len = filter.min_len;
    let max_len = filter.max_len;
    let needle = filter.contains.clone();

    let long_enough = move |s: &String| min_len.map_or(true, |n| s.chars().count() >= n);
    let short_enough = move |s: &String| max_len.map_or(true, |n| s.chars().count() <= n);
    let has_needle = move |s: &String| needle.as_deref().map_or(true, |n| s.contains(n));
    let all = long_enough.and(short_enough).and(has_needle);

    let cursor = graph.traverse(order);
    if filter.negate {
        drain(cursor.filter_by(all.negate()))
    } else {
        drain(cursor.filter_by(all))
    }
}

/// Pull every remaining vertex through the cursor protocol.
fn drain<V, C: VertexCursor<V>>(mut cursor: C) -> Vec<GraphVertex<V>> {
    let mut out = Vec::new();
    while cursor.has_next() {
        match cursor.next_vertex() {
            Ok(vertex) => out.push(vertex),
            Err(_) => break,
        }
    }
    out
}

fn render_info(graph: &Graph<String>, json: bool) -> GraphResult<String> {
    let vertices = graph.vertices();
    let root = graph.root_index().and_then(|i| graph.vertex_at(i));

    if json {
        let degrees: Vec<serde_json::Value> = vertices
            .iter()
            .map(|v| {
                serde_json::json!({
                    "index": v.index(),
                    "value": v.value(),
                    "degree": v.degree(),
                })
            })
            .collect();
        let info = serde_json::json!({
            "vertices": graph.node_count(),
            "index_bound": graph.index_bound(),
            "root": root.as_ref().map(|r| r.value()),
            "degrees": degrees,
        });
        return Ok(serde_json::to_string_pretty(&info)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Vertices: {}", graph.node_count());
    match &root {
        Some(r) => {
            let _ = writeln!(out, "Root: {} (index {})", r.value(), r.index());
        }
        None => {
            let _ = writeln!(out, "Root: none");
        }
    }
    let _ = write!(out, "Index bound: {}", graph.index_bound());
    for v in &vertices {
        let _ = write!(out, "\n  [{}] {} (degree {})", v.index(), v.value(), v.degree());
    }
    Ok(out)
}

fn render_vertices(
    order: TraversalOrder,
    vertices: &[GraphVertex<String>],
    json: bool,
) -> GraphResult<String> {
    if json {
        let body = serde_json::json!({
            "order": order,
            "count": vertices.len(),
            "vertices": vertices,
        });
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    let mut out = format!("{} traversal, {} vertices", order, vertices.len());
    for v in vertices {
        let _ = write!(out, "\n  [{}] {}", v.index(), v.value());
    }
    Ok(out)
}

fn render_vertex(vertex: &GraphVertex<String>, json: bool) -> GraphResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(vertex)?);
    }

    let mut out = format!("[{}] {}", vertex.index(), vertex.value());
    for edge in vertex.edges() {
        let _ = write!(
            out,
            "\n  -{}- {}",
            edge.label().unwrap_or(""),
            edge.neighbor_value()
        );
    }
    Ok(out)
}
