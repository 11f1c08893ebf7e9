//! Canned ten-vertex graph for trying traversals without typing edges.

use graphwalk_core::{GraphStore, Result};

/// Vertices of the default graph, in creation order.
pub const DEFAULT_VERTICES: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Edges of the default graph.
pub const DEFAULT_EDGES: [(char, char); 15] = [
    ('A', 'B'),
    ('A', 'C'),
    ('B', 'C'),
    ('B', 'D'),
    ('C', 'D'),
    ('C', 'E'),
    ('D', 'E'),
    ('D', 'F'),
    ('D', 'G'),
    ('E', 'F'),
    ('E', 'H'),
    ('F', 'I'),
    ('F', 'G'),
    ('H', 'I'),
    ('I', 'J'),
];

/// Replaces the whole graph with the default dataset.
pub fn load_default(graph: &mut GraphStore<char>) -> Result<()> {
    graph.clear();
    for key in DEFAULT_VERTICES {
        graph.create_vertex(key)?;
    }
    for (x, y) in DEFAULT_EDGES {
        if let (Some(x), Some(y)) = (graph.find_vertex(&x), graph.find_vertex(&y)) {
            graph.create_edge(x, y)?;
        }
    }
    tracing::info!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        "default dataset loaded"
    );
    Ok(())
}
