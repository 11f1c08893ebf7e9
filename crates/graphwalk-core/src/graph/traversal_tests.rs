//! Tests for BFS and DFS graph traversal.

use super::store::GraphStore;
use super::traversal::{bfs, dfs, TraversalStep};
use super::types::{VertexId, VisitState};

use VisitState::{Discovered, Finished, Unvisited};

/// Build the square graph: A-B, A-C, B-D, C-D
fn build_square_graph() -> (GraphStore<char>, VertexId) {
    let mut graph = GraphStore::new();
    for key in ['A', 'B', 'C', 'D'] {
        graph.create_vertex(key).unwrap();
    }
    for (x, y) in [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D')] {
        let x = graph.find_vertex(&x).unwrap();
        let y = graph.find_vertex(&y).unwrap();
        graph.create_edge(x, y).unwrap();
    }
    let a = graph.find_vertex(&'A').unwrap();
    (graph, a)
}

/// Build a fan: A-B, A-C where B and C are leaves.
fn build_fan_graph() -> (GraphStore<char>, VertexId) {
    let mut graph = GraphStore::new();
    let a = graph.create_vertex('A').unwrap();
    let c = graph.create_vertex('C').unwrap();
    let b = graph.create_vertex('B').unwrap();
    graph.create_edge(a, c).unwrap();
    graph.create_edge(a, b).unwrap();
    (graph, a)
}

fn step(vertex: char, from: VisitState, to: VisitState, frontier: &str) -> TraversalStep<char> {
    TraversalStep {
        vertex,
        from,
        to,
        frontier: frontier.chars().collect(),
    }
}

// ── BFS Tests ──────────────────────────────────────────────────────

#[test]
fn test_bfs_square() {
    let (mut graph, a) = build_square_graph();
    let steps = bfs(&mut graph, a);

    assert_eq!(
        steps,
        vec![
            step('A', Unvisited, Discovered, "BC"),
            step('B', Unvisited, Discovered, "CD"),
            step('C', Unvisited, Discovered, "D"),
            step('D', Unvisited, Discovered, ""),
        ]
    );
}

#[test]
fn test_bfs_does_not_enqueue_pending_vertex_twice() {
    let (mut graph, a) = build_square_graph();
    let steps = bfs(&mut graph, a);

    // D is adjacent to both B and C but waits in the queue only once.
    for s in &steps {
        let pending_d = s.frontier.iter().filter(|k| **k == 'D').count();
        assert!(pending_d <= 1, "D queued twice after {}", s.vertex);
    }
}

#[test]
fn test_bfs_isolated_vertex() {
    let mut graph = GraphStore::new();
    let a = graph.create_vertex('A').unwrap();
    graph.create_vertex('B').unwrap();

    let steps = bfs(&mut graph, a);
    assert_eq!(steps, vec![step('A', Unvisited, Discovered, "")]);
}

#[test]
fn test_bfs_self_loop_terminates() {
    let mut graph = GraphStore::new();
    let a = graph.create_vertex('A').unwrap();
    let b = graph.create_vertex('B').unwrap();
    graph.create_edge(a, a).unwrap();
    graph.create_edge(a, b).unwrap();

    let order: Vec<char> = graph.breadth_first(a).map(|s| s.vertex).collect();
    assert_eq!(order, vec!['A', 'B']);
}

#[test]
fn test_bfs_stale_start_is_empty() {
    let (mut graph, a) = build_square_graph();
    graph.delete_vertex(a).unwrap();
    assert!(bfs(&mut graph, a).is_empty());
}

#[test]
fn test_bfs_on_empty_store_is_empty() {
    let mut graph = GraphStore::new();
    let a = graph.create_vertex('A').unwrap();
    graph.clear();
    assert!(graph.breadth_first(a).next().is_none());
}

#[test]
fn test_bfs_leaves_unreachable_unvisited() {
    let (mut graph, a) = build_square_graph();
    let island = graph.create_vertex('Z').unwrap();

    let _ = bfs(&mut graph, a);
    assert_eq!(graph.visit_state(island), Some(Unvisited));
    assert_eq!(graph.visit_state(a), Some(Discovered));
}

// ── DFS Tests ──────────────────────────────────────────────────────

#[test]
fn test_dfs_square() {
    let (mut graph, a) = build_square_graph();
    let steps = dfs(&mut graph, a);

    assert_eq!(
        steps,
        vec![
            step('A', Unvisited, Discovered, "A"),
            step('B', Unvisited, Discovered, "BA"),
            step('D', Unvisited, Discovered, "DBA"),
            step('C', Unvisited, Discovered, "DBA"),
            step('C', Discovered, Finished, "DBA"),
            step('D', Discovered, Finished, "BA"),
            step('B', Discovered, Finished, "A"),
            step('A', Discovered, Finished, ""),
        ]
    );
}

#[test]
fn test_dfs_finishes_in_reverse_discovery_order() {
    let (mut graph, a) = build_square_graph();
    let steps = dfs(&mut graph, a);

    let grayed: Vec<char> = steps
        .iter()
        .filter(|s| s.to == Discovered)
        .map(|s| s.vertex)
        .collect();
    let finished: Vec<char> = steps
        .iter()
        .filter(|s| s.to == Finished)
        .map(|s| s.vertex)
        .collect();

    assert_eq!(grayed, vec!['A', 'B', 'D', 'C']);
    let mut expected = grayed.clone();
    expected.reverse();
    assert_eq!(finished, expected);
}

#[test]
fn test_dfs_resume_gray_vertex_is_silent() {
    let (mut graph, a) = build_fan_graph();
    let steps = dfs(&mut graph, a);

    assert_eq!(
        steps,
        vec![
            step('A', Unvisited, Discovered, "A"),
            step('B', Unvisited, Discovered, "A"),
            step('B', Discovered, Finished, "A"),
            step('C', Unvisited, Discovered, "A"),
            step('C', Discovered, Finished, "A"),
            step('A', Discovered, Finished, ""),
        ]
    );
}

#[test]
fn test_dfs_isolated_vertex() {
    let mut graph = GraphStore::new();
    let a = graph.create_vertex('A').unwrap();

    let steps = dfs(&mut graph, a);
    assert_eq!(
        steps,
        vec![
            step('A', Unvisited, Discovered, ""),
            step('A', Discovered, Finished, ""),
        ]
    );
}

#[test]
fn test_dfs_self_loop_terminates() {
    let mut graph = GraphStore::new();
    let a = graph.create_vertex('A').unwrap();
    graph.create_edge(a, a).unwrap();

    let steps = dfs(&mut graph, a);
    assert_eq!(
        steps,
        vec![
            step('A', Unvisited, Discovered, ""),
            step('A', Discovered, Finished, ""),
        ]
    );
}

#[test]
fn test_dfs_marks_reachable_vertices_finished() {
    let (mut graph, a) = build_square_graph();
    let island = graph.create_vertex('Z').unwrap();

    let _ = dfs(&mut graph, a);
    for (id, vertex) in graph.vertices() {
        let expected = if id == island { Unvisited } else { Finished };
        assert_eq!(vertex.visit_state(), expected, "vertex {}", vertex.key());
    }
}

#[test]
fn test_dfs_stale_start_is_empty() {
    let (mut graph, a) = build_square_graph();
    graph.delete_vertex(a).unwrap();
    assert!(dfs(&mut graph, a).is_empty());
}

// ── Determinism Tests ──────────────────────────────────────────────

#[test]
fn test_retraversal_is_identical() {
    let (mut graph, a) = build_square_graph();

    let first_dfs = dfs(&mut graph, a);
    let first_bfs = bfs(&mut graph, a);
    assert_eq!(dfs(&mut graph, a), first_dfs);
    assert_eq!(bfs(&mut graph, a), first_bfs);
}

#[test]
fn test_abandoned_traversal_does_not_leak_state() {
    let (mut graph, a) = build_square_graph();
    let full = dfs(&mut graph, a);

    let partial: Vec<_> = graph.depth_first(a).take(2).collect();
    assert_eq!(partial.as_slice(), &full[..2]);
    assert_eq!(dfs(&mut graph, a), full);
}

#[test]
fn test_dfs_every_finish_follows_a_discovery() {
    let (mut graph, a) = build_square_graph();
    let e = graph.create_vertex('E').unwrap();
    let d = graph.find_vertex(&'D').unwrap();
    graph.create_edge(d, e).unwrap();

    let steps = dfs(&mut graph, a);
    for s in steps.iter().filter(|s| s.to == Finished) {
        assert_eq!(s.from, Discovered, "{} finished without turning gray", s.vertex);
    }
    assert_eq!(steps.len(), 2 * graph.len());
}

#[test]
fn test_traversal_order_ignores_edge_insertion_order() {
    let (mut square, a) = build_square_graph();

    let mut shuffled = GraphStore::new();
    for key in ['D', 'C', 'B', 'A'] {
        shuffled.create_vertex(key).unwrap();
    }
    for (x, y) in [('D', 'C'), ('D', 'B'), ('C', 'A'), ('B', 'A')] {
        let x = shuffled.find_vertex(&x).unwrap();
        let y = shuffled.find_vertex(&y).unwrap();
        shuffled.create_edge(x, y).unwrap();
    }
    let start = shuffled.find_vertex(&'A').unwrap();

    assert_eq!(bfs(&mut shuffled, start), bfs(&mut square, a));
    assert_eq!(dfs(&mut shuffled, start), dfs(&mut square, a));
}
