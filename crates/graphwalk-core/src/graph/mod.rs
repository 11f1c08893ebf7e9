//! In-memory undirected graph and its traversal engine.
//!
//! Provides the vertex arena ([`GraphStore`]), vertex types, and the
//! breadth-first / depth-first iterators built on top of it.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::GraphStore;
//! use graphwalk_core::graph::traversal::bfs;
//!
//! let mut graph = GraphStore::new();
//! let a = graph.create_vertex('A').unwrap();
//! let b = graph.create_vertex('B').unwrap();
//! let c = graph.create_vertex('C').unwrap();
//! graph.create_edge(a, b).unwrap();
//! graph.create_edge(a, c).unwrap();
//!
//! let steps = bfs(&mut graph, a);
//! assert_eq!(steps[0].vertex, 'A');
//! assert_eq!(steps[0].frontier, vec!['B', 'C']);
//! ```

mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod traversal_tests;

pub use store::GraphStore;
pub use traversal::{BreadthFirst, DepthFirst, TraversalStep};
pub use types::{Vertex, VertexId, VertexKey, VisitState};
