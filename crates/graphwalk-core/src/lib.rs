//! # `graphwalk` Core
//!
//! In-memory undirected graph keyed by a comparable vertex label, with
//! breadth-first and depth-first traversals whose visitation order is fully
//! deterministic.
//!
//! - **Graph store**: arena of vertices addressed by stable [`VertexId`]
//!   handles, symmetric edges, neighbour lists kept in ascending key order.
//! - **Traversal engine**: lazy BFS (FIFO frontier) and DFS (explicit LIFO
//!   stack, white/gray/black colouring) iterators that report every step
//!   together with a snapshot of the frontier.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk_core::graph::GraphStore;
//!
//! fn main() -> graphwalk_core::Result<()> {
//!     let mut graph = GraphStore::new();
//!     let a = graph.create_vertex('A')?;
//!     let b = graph.create_vertex('B')?;
//!     let c = graph.create_vertex('C')?;
//!     graph.create_edge(a, c)?;
//!     graph.create_edge(a, b)?;
//!
//!     let order: Vec<char> = graph.breadth_first(a).map(|step| step.vertex).collect();
//!     assert_eq!(order, vec!['A', 'B', 'C']);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use config::{GraphwalkConfig, LoggingConfig, OutputFormat, ShellConfig};
pub use error::{Error, Result};
pub use graph::{
    BreadthFirst, DepthFirst, GraphStore, TraversalStep, Vertex, VertexId, VertexKey, VisitState,
};
