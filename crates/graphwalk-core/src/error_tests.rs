//! Tests for the error taxonomy.

use crate::error::Error;
use crate::graph::GraphStore;

#[test]
fn test_error_display_vertex_exists() {
    let err = Error::VertexExists("A".to_string());
    assert_eq!(err.to_string(), "Vertex 'A' already exists");
}

#[test]
fn test_error_display_edge_not_found() {
    let err = Error::EdgeNotFound {
        from: "A".to_string(),
        to: "B".to_string(),
    };
    assert_eq!(err.to_string(), "No edge between 'A' and 'B'");
}

#[test]
fn test_error_display_vertex_not_found_uses_handle() {
    let mut graph = GraphStore::new();
    let id = graph.create_vertex('A').unwrap();
    graph.delete_vertex(id).unwrap();

    let err = graph.delete_vertex(id).unwrap_err();
    assert_eq!(err, Error::VertexNotFound(id));
    assert_eq!(err.to_string(), format!("Vertex {id} not found"));
}

#[test]
fn test_error_from_figment() {
    let figment_err = figment::Error::from("bad value".to_string());
    let err: Error = figment_err.into();
    assert!(matches!(err, Error::Config(msg) if msg.contains("bad value")));
}
