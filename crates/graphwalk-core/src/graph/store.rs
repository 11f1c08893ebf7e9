//! Vertex arena and symmetric adjacency lists.
//!
//! The store exclusively owns every [`Vertex`]; neighbour lists only hold
//! [`VertexId`] handles. Deleting a vertex strips every handle pointing at it
//! before the slot itself is released, so no list ever refers to a dead vertex.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::{Error, Result};

use super::types::{Vertex, VertexId, VertexKey, VisitState};

/// In-memory undirected graph keyed by `K`.
///
/// Vertices are listed in insertion order. Each neighbour list is kept in
/// ascending key order after every insertion, which is what makes traversal
/// output deterministic.
#[derive(Debug, Clone)]
pub struct GraphStore<K> {
    /// Live vertices, insertion-ordered.
    vertices: IndexMap<VertexId, Vertex<K>>,
    /// Secondary index: key -> handle.
    by_key: BTreeMap<K, VertexId>,
    /// Next handle to issue. Never decremented.
    next_id: u64,
}

impl<K> Default for GraphStore<K> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
            by_key: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<K: VertexKey> GraphStore<K> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with room for `expected_vertices` vertices.
    #[must_use]
    pub fn with_capacity(expected_vertices: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(expected_vertices),
            by_key: BTreeMap::new(),
            next_id: 0,
        }
    }

    // ── Vertex CRUD ────────────────────────────────────────────────────

    /// Appends a new, unconnected vertex.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexExists` if `key` is already present; the store is
    /// left unchanged.
    pub fn create_vertex(&mut self, key: K) -> Result<VertexId> {
        if self.by_key.contains_key(&key) {
            return Err(Error::VertexExists(key.to_string()));
        }
        let id = VertexId::new(self.next_id);
        self.next_id += 1;

        tracing::debug!(vertex = %key, %id, "vertex created");
        self.by_key.insert(key.clone(), id);
        self.vertices.insert(id, Vertex::new(key));
        Ok(id)
    }

    /// Resolves a key to its vertex handle.
    #[must_use]
    pub fn find_vertex(&self, key: &K) -> Option<VertexId> {
        self.by_key.get(key).copied()
    }

    /// Deletes a vertex together with every edge incident to it.
    ///
    /// Handles to other vertices stay valid. Returns the key of the removed
    /// vertex.
    pub fn delete_vertex(&mut self, id: VertexId) -> Result<K> {
        self.require(id)?;

        // Every list is swept, not only those of recorded neighbours, so a
        // one-sided arc cannot leave a dangling handle behind.
        for vertex in self.vertices.values_mut() {
            vertex.neighbors_mut().retain(|n| *n != id);
        }

        let vertex = self
            .vertices
            .shift_remove(&id)
            .ok_or(Error::VertexNotFound(id))?;
        self.by_key.remove(vertex.key());
        tracing::debug!(vertex = %vertex.key(), %id, "vertex deleted");
        Ok(vertex.into_key())
    }

    /// Returns true if `id` refers to a live vertex.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Gets a vertex by handle.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<K>> {
        self.vertices.get(&id)
    }

    /// Gets the key of a vertex.
    #[must_use]
    pub fn key(&self, id: VertexId) -> Option<&K> {
        self.vertices.get(&id).map(Vertex::key)
    }

    /// Gets the neighbour handles of a vertex, ascending by key.
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> Option<&[VertexId]> {
        self.vertices.get(&id).map(Vertex::neighbors)
    }

    /// Gets the neighbour keys of a vertex, ascending.
    #[must_use]
    pub fn neighbor_keys(&self, id: VertexId) -> Option<Vec<&K>> {
        let vertex = self.vertices.get(&id)?;
        Some(
            vertex
                .neighbors()
                .iter()
                .filter_map(|n| self.key(*n))
                .collect(),
        )
    }

    /// Iterates live vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<K>)> + '_ {
        self.vertices.iter().map(|(id, vertex)| (*id, vertex))
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the store holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges, counting a self-loop once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let (loops, arcs) = self
            .vertices
            .iter()
            .flat_map(|(id, v)| v.neighbors().iter().map(move |n| n == id))
            .fold((0_usize, 0_usize), |(loops, arcs), is_loop| {
                if is_loop {
                    (loops + 1, arcs)
                } else {
                    (loops, arcs + 1)
                }
            });
        loops + arcs / 2
    }

    /// Removes every vertex and edge. Handles issued so far stay invalid.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.by_key.clear();
        tracing::debug!("graph cleared");
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Links two vertices.
    ///
    /// Inserts `to` into the neighbour list of `from` and, unless this is a
    /// self-loop, `from` into the list of `to`. Both lists are re-sorted.
    /// Duplicate edges are not rejected here; check [`edge_exists`] first.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is missing; nothing
    /// is inserted in that case.
    ///
    /// [`edge_exists`]: GraphStore::edge_exists
    pub fn create_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.require(from)?;
        self.require(to)?;

        self.insert_neighbor(from, to);
        if from != to {
            self.insert_neighbor(to, from);
        }
        tracing::debug!(from = ?self.key(from), to = ?self.key(to), "edge created");
        Ok(())
    }

    /// Unlinks two vertices.
    ///
    /// Both directions are checked before anything is removed, so a failed
    /// call never leaves the edge half-deleted.
    ///
    /// # Errors
    ///
    /// - `Error::VertexNotFound` if either endpoint is missing.
    /// - `Error::EdgeNotFound` if neither list records the edge.
    /// - `Error::InconsistentEdge` if only one list records it.
    pub fn delete_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let forward = self.require(from)?.neighbors().contains(&to);
        let backward = from == to || self.require(to)?.neighbors().contains(&from);

        match (forward, backward) {
            (true, true) => {
                if let Some(vertex) = self.vertices.get_mut(&from) {
                    remove_first(vertex.neighbors_mut(), to);
                }
                if from != to {
                    if let Some(vertex) = self.vertices.get_mut(&to) {
                        remove_first(vertex.neighbors_mut(), from);
                    }
                }
                tracing::debug!(from = ?self.key(from), to = ?self.key(to), "edge deleted");
                Ok(())
            }
            (false, false) => Err(self.edge_error(from, to, false)),
            _ => {
                tracing::warn!(
                    from = ?self.key(from),
                    to = ?self.key(to),
                    "edge recorded on one side only"
                );
                Err(self.edge_error(from, to, true))
            }
        }
    }

    /// Returns true if `to` is in the neighbour list of `from`.
    ///
    /// A single direction is enough because every edge is stored on both
    /// sides. Missing vertices yield `false`.
    #[must_use]
    pub fn edge_exists(&self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get(&from)
            .is_some_and(|v| v.neighbors().contains(&to))
    }

    // ── Visitation state ───────────────────────────────────────────────

    /// Marks every vertex `Unvisited`. Run before each traversal.
    pub fn reset_visits(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.set_visit_state(VisitState::Unvisited);
        }
    }

    /// Returns the visitation state of a vertex.
    #[must_use]
    pub fn visit_state(&self, id: VertexId) -> Option<VisitState> {
        self.vertices.get(&id).map(Vertex::visit_state)
    }

    pub(crate) fn set_visit_state(&mut self, id: VertexId, state: VisitState) {
        if let Some(vertex) = self.vertices.get_mut(&id) {
            vertex.set_visit_state(state);
        }
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn require(&self, id: VertexId) -> Result<&Vertex<K>> {
        self.vertices.get(&id).ok_or(Error::VertexNotFound(id))
    }

    fn compare_keys(&self, a: VertexId, b: VertexId) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    /// Appends `neighbor` to the list of `at`, then stable-sorts the list.
    fn insert_neighbor(&mut self, at: VertexId, neighbor: VertexId) {
        let Some(vertex) = self.vertices.get_mut(&at) else {
            return;
        };
        let mut list = std::mem::take(vertex.neighbors_mut());
        list.push(neighbor);
        list.sort_by(|a, b| self.compare_keys(*a, *b));

        if let Some(vertex) = self.vertices.get_mut(&at) {
            *vertex.neighbors_mut() = list;
        }
    }

    fn edge_error(&self, from: VertexId, to: VertexId, inconsistent: bool) -> Error {
        let from = self.key(from).map(ToString::to_string).unwrap_or_default();
        let to = self.key(to).map(ToString::to_string).unwrap_or_default();
        if inconsistent {
            Error::InconsistentEdge { from, to }
        } else {
            Error::EdgeNotFound { from, to }
        }
    }

    #[cfg(test)]
    pub(crate) fn push_arc_unchecked(&mut self, at: VertexId, neighbor: VertexId) {
        self.insert_neighbor(at, neighbor);
    }
}

fn remove_first(list: &mut Vec<VertexId>, target: VertexId) {
    if let Some(pos) = list.iter().position(|id| *id == target) {
        list.remove(pos);
    }
}
