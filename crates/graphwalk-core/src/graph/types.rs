//! Vertex types for the undirected graph store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requirements on a vertex label.
///
/// Keys identify vertices and order every neighbour list, so they must be
/// totally ordered. `Display` is used when a key ends up in an error message.
pub trait VertexKey: Ord + Clone + fmt::Debug + fmt::Display {}

impl<T> VertexKey for T where T: Ord + Clone + fmt::Debug + fmt::Display {}

/// Stable handle to a vertex owned by a [`GraphStore`](super::GraphStore).
///
/// Handles are never reused: once a vertex is deleted every operation given
/// its old handle fails with `Error::VertexNotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visitation marker written by the traversal engine.
///
/// DFS uses all three states (white, gray, black). BFS only distinguishes
/// `Unvisited` from everything else, see [`VisitState::is_seen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitState {
    /// Not reached yet (white).
    #[default]
    Unvisited,
    /// Reached, neighbours still being explored (gray).
    Discovered,
    /// Fully explored (black).
    Finished,
}

impl VisitState {
    /// Returns the conventional colour name of the state.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Unvisited => "white",
            Self::Discovered => "gray",
            Self::Finished => "black",
        }
    }

    /// Boolean view used by breadth-first traversal.
    #[must_use]
    pub fn is_seen(self) -> bool {
        self != Self::Unvisited
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color())
    }
}

/// A vertex and its adjacency.
///
/// `neighbors` holds non-owning handles into the same store, sorted by the
/// neighbour's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex<K> {
    key: K,
    visit_state: VisitState,
    neighbors: Vec<VertexId>,
}

impl<K> Vertex<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            visit_state: VisitState::Unvisited,
            neighbors: Vec::new(),
        }
    }

    /// Returns the vertex key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the state left by the most recent traversal.
    #[must_use]
    pub fn visit_state(&self) -> VisitState {
        self.visit_state
    }

    /// Returns the neighbour handles in ascending key order.
    #[must_use]
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Returns the number of neighbour entries (a self-loop counts once).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn set_visit_state(&mut self, state: VisitState) {
        self.visit_state = state;
    }

    pub(crate) fn neighbors_mut(&mut self) -> &mut Vec<VertexId> {
        &mut self.neighbors
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }
}
