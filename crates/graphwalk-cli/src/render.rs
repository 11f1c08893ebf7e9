//! Text and JSON rendering of graph listings and traversal traces.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use graphwalk_core::{GraphStore, TraversalStep, VisitState};
use serde_json::{json, Value};

/// Which traversal produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Breadth-first, FIFO frontier.
    Breadth,
    /// Depth-first, LIFO frontier.
    Depth,
}

impl Traversal {
    /// Short name used in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Breadth => "bfs",
            Self::Depth => "dfs",
        }
    }

    fn frontier_label(self) -> &'static str {
        match self {
            Self::Breadth => "queue",
            Self::Depth => "stack",
        }
    }
}

/// Joins keys as `A, B, C`, or `(empty)`.
pub fn key_list<'a>(keys: impl IntoIterator<Item = &'a char>) -> String {
    let joined = keys
        .into_iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "(empty)".to_string()
    } else {
        joined
    }
}

/// One trace line, e.g. `B visited (white -> gray)    stack: B, A`.
pub fn step_line(traversal: Traversal, step: &TraversalStep<char>) -> String {
    let head = match traversal {
        Traversal::Breadth => format!("{} visited", step.vertex),
        Traversal::Depth => format!(
            "{} visited ({} -> {})",
            step.vertex,
            step.from.color(),
            step.to.color()
        ),
    };
    format!(
        "{:<28}{}: {}",
        head,
        traversal.frontier_label(),
        key_list(&step.frontier)
    )
}

/// Colours a trace line by the state it ends in.
pub fn paint_step(traversal: Traversal, step: &TraversalStep<char>) -> String {
    let line = step_line(traversal, step);
    match step.to {
        VisitState::Finished => line.red().to_string(),
        VisitState::Discovered if traversal == Traversal::Depth => line.green().to_string(),
        _ => line,
    }
}

/// JSON document for a whole traversal.
pub fn trace_json(traversal: Traversal, start: char, steps: &[TraversalStep<char>]) -> Value {
    json!({
        "traversal": traversal.name(),
        "start": start,
        "steps": steps,
    })
}

/// Adjacency table in insertion order.
pub fn vertex_table(graph: &GraphStore<char>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Vertex", "Adjacent to"]);

    for (id, vertex) in graph.vertices() {
        let adjacency = match graph.neighbor_keys(id) {
            Some(keys) if !keys.is_empty() => key_list(keys),
            _ => "(no edges)".to_string(),
        };
        table.add_row(vec![vertex.key().to_string(), adjacency]);
    }
    table
}

/// Adjacency listing as JSON.
pub fn vertices_json(graph: &GraphStore<char>) -> Value {
    let vertices: Vec<Value> = graph
        .vertices()
        .map(|(id, vertex)| {
            let neighbors = graph.neighbor_keys(id).unwrap_or_default();
            json!({ "vertex": vertex.key(), "neighbors": neighbors })
        })
        .collect();
    json!({ "vertices": vertices, "edges": graph.edge_count() })
}
