//! Phase 3 tests: predicates and the filtering cursor.

use labeled_graph::filter::{And, FilterCursor, FilterExt, Not, Or, Predicate, PredicateExt};
use labeled_graph::graph::{Graph, VertexCursor};
use labeled_graph::types::error::GraphError;
use labeled_graph::types::GraphVertex;

// ==================== Helpers ====================

fn cities() -> Graph<String> {
    let mut graph = Graph::new();
    graph.add_root("New York".to_string()).unwrap();
    for (anchor, label, value) in [
        ("New York", "50", "Philadelphia"),
        ("New York", "75", "Boston"),
        ("Philadelphia", "50", "DC"),
        ("Philadelphia", "75", "Miami"),
        ("Boston", "100", "Chicago"),
    ] {
        graph.add(anchor, Some(label), value.to_string()).unwrap();
    }
    graph
}

fn longer_than_six(s: &String) -> bool {
    s.len() > 6
}

fn shorter_than_eight(s: &String) -> bool {
    s.len() < 8
}

fn shorter_than_three(s: &String) -> bool {
    s.len() < 3
}

fn collect<C: VertexCursor<String>>(mut cursor: C) -> Vec<String> {
    let mut out = Vec::new();
    while cursor.has_next() {
        out.push(cursor.next_vertex().unwrap().into_value());
    }
    out
}

// ==================== Filter over BFS ====================

#[test]
fn test_filter_single_vertex_rejected() {
    let graph = Graph::with_root("DC".to_string());
    let mut cursor = FilterCursor::new(graph.bfs_iter(), longer_than_six);
    assert!(!cursor.has_next());
}

#[test]
fn test_filter_next_without_match() {
    let graph = Graph::with_root("DC".to_string());
    let mut cursor = FilterCursor::new(graph.bfs_iter(), longer_than_six);
    assert!(matches!(cursor.next_vertex(), Err(GraphError::Exhausted)));
}

#[test]
fn test_filter_empty_graph() {
    let graph: Graph<String> = Graph::new();
    let mut cursor = graph.dfs_iter().filter_by(|_: &String| true);
    assert!(!cursor.has_next());
    assert!(cursor.next().is_none());
}

#[test]
fn test_filter_long_names() {
    let graph = cities();
    let cursor = FilterCursor::new(graph.bfs_iter(), longer_than_six);
    assert_eq!(collect(cursor), ["New York", "Philadelphia", "Chicago"]);
}

#[test]
fn test_filter_not() {
    let graph = cities();
    let cursor = FilterCursor::new(graph.bfs_iter(), Not::new(longer_than_six));
    assert_eq!(collect(cursor), ["Boston", "DC", "Miami"]);
}

#[test]
fn test_filter_and() {
    let graph = cities();
    let cursor = FilterCursor::new(
        graph.bfs_iter(),
        And::new(longer_than_six, shorter_than_eight),
    );
    assert_eq!(collect(cursor), ["Chicago"]);
}

#[test]
fn test_filter_or() {
    let graph = cities();
    let cursor = FilterCursor::new(
        graph.bfs_iter(),
        Or::new(longer_than_six, shorter_than_three),
    );
    assert_eq!(collect(cursor), ["New York", "Philadelphia", "DC", "Chicago"]);
}

#[test]
fn test_filter_over_dfs() {
    let graph = cities();
    let cursor = graph.dfs_iter().filter_by(longer_than_six);
    assert_eq!(collect(cursor), ["New York", "Chicago", "Philadelphia"]);
}

#[test]
fn test_complement_partitions_traversal() {
    let graph = cities();
    let kept = collect(graph.bfs_iter().filter_by(longer_than_six));
    let dropped = collect(graph.bfs_iter().filter_by(longer_than_six.negate()));
    let everything: Vec<String> = graph.bfs_iter().map(GraphVertex::into_value).collect();

    assert_eq!(kept.len() + dropped.len(), everything.len());
    // Both halves keep traversal order
    let mut k = kept.iter().peekable();
    let mut d = dropped.iter().peekable();
    for name in &everything {
        if k.peek() == Some(&name) {
            k.next();
        } else {
            assert_eq!(d.next(), Some(name));
        }
    }
}

#[test]
fn test_ext_combinators_match_structs() {
    let graph = cities();
    let via_ext = collect(
        graph
            .bfs_iter()
            .filter_by(longer_than_six.and(shorter_than_eight).or(shorter_than_three)),
    );
    let via_structs = collect(graph.bfs_iter().filter_by(Or::new(
        And::new(longer_than_six, shorter_than_eight),
        shorter_than_three,
    )));
    assert_eq!(via_ext, via_structs);
    assert_eq!(via_ext, ["DC", "Chicago"]);
}

#[test]
fn test_nested_filters() {
    let graph = cities();
    let cursor = graph
        .bfs_iter()
        .filter_by(longer_than_six)
        .filter_by(|s: &String| s.contains('i'));
    assert_eq!(collect(cursor), ["Philadelphia", "Chicago"]);
}

#[test]
fn test_has_next_does_not_double_count() {
    let graph = cities();
    let mut cursor = graph.bfs_iter().filter_by(longer_than_six);
    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert_eq!(cursor.next_vertex().unwrap().value(), "New York");
    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert_eq!(cursor.next_vertex().unwrap().value(), "Philadelphia");
    assert_eq!(cursor.next_vertex().unwrap().value(), "Chicago");
    assert!(!cursor.has_next());
    assert!(matches!(cursor.next_vertex(), Err(GraphError::Exhausted)));
}

#[test]
fn test_next_without_has_next() {
    let graph = cities();
    let mut cursor = graph.bfs_iter().filter_by(Not::new(longer_than_six));
    assert_eq!(cursor.next_vertex().unwrap().value(), "Boston");
    assert_eq!(cursor.next_vertex().unwrap().value(), "DC");
    assert_eq!(cursor.next_vertex().unwrap().value(), "Miami");
    assert!(cursor.next_vertex().is_err());
}

#[test]
fn test_predicate_over_integers() {
    let mut graph = Graph::with_root(1u64);
    for i in 2..=10 {
        graph.add(&(i - 1), None, i);
    }
    let even = |n: &u64| n % 2 == 0;
    assert!(even.accept(&4));
    let values: Vec<u64> = graph
        .dfs_iter()
        .filter_by(even.and(|n: &u64| *n > 4))
        .map(GraphVertex::into_value)
        .collect();
    assert_eq!(values, vec![6, 8, 10]);
}
