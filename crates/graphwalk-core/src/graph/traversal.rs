//! Breadth-first and depth-first traversal over a [`GraphStore`].
//!
//! Both traversals are lazy iterators that borrow the store mutably: they
//! write each vertex's [`VisitState`] as they go and reset all of them when
//! created, so a traversal can never resume a previous one. Neighbours are
//! always scanned in ascending key order, which makes the produced sequence
//! identical for identical graphs.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::{GraphStore, VisitState};
//!
//! let mut graph = GraphStore::new();
//! let a = graph.create_vertex('A').unwrap();
//! let b = graph.create_vertex('B').unwrap();
//! graph.create_edge(a, b).unwrap();
//!
//! let steps: Vec<_> = graph.depth_first(a).collect();
//! assert_eq!(steps[0].vertex, 'A');
//! assert_eq!(steps[0].to, VisitState::Discovered);
//! assert_eq!(steps.last().unwrap().to, VisitState::Finished);
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::store::GraphStore;
use super::types::{VertexId, VertexKey, VisitState};

/// A single step of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStep<K> {
    /// The vertex whose state changed at this step.
    pub vertex: K,
    /// State before the step.
    pub from: VisitState,
    /// State after the step.
    pub to: VisitState,
    /// Frontier snapshot: queue front-first for BFS, stack top-first for DFS.
    pub frontier: Vec<K>,
}

/// Breadth-first traversal driven by a FIFO frontier.
///
/// Yields one step per visited vertex. The frontier reported with a step is
/// the queue after that vertex's neighbours were scanned; a neighbour is
/// enqueued only if it is unvisited and not already waiting in the queue.
#[derive(Debug)]
pub struct BreadthFirst<'g, K> {
    graph: &'g mut GraphStore<K>,
    queue: VecDeque<VertexId>,
    current: Option<VertexId>,
}

impl<'g, K: VertexKey> BreadthFirst<'g, K> {
    pub(crate) fn new(graph: &'g mut GraphStore<K>, start: VertexId) -> Self {
        graph.reset_visits();
        let current = graph.contains(start).then_some(start);
        Self {
            graph,
            queue: VecDeque::new(),
            current,
        }
    }

    fn snapshot(&self) -> Vec<K> {
        self.queue
            .iter()
            .filter_map(|id| self.graph.key(*id).cloned())
            .collect()
    }
}

impl<K: VertexKey> Iterator for BreadthFirst<'_, K> {
    type Item = TraversalStep<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let key = self.graph.key(current)?.clone();
        let from = self.graph.visit_state(current)?;
        self.graph.set_visit_state(current, VisitState::Discovered);

        let neighbors = self.graph.neighbors(current).unwrap_or_default();
        for &neighbor in neighbors {
            let seen = self
                .graph
                .visit_state(neighbor)
                .is_none_or(VisitState::is_seen);
            if seen || self.queue.contains(&neighbor) {
                continue;
            }
            self.queue.push_back(neighbor);
        }

        let frontier = self.snapshot();
        self.current = self.queue.pop_front();
        tracing::trace!(vertex = %key, ?frontier, "bfs step");

        Some(TraversalStep {
            vertex: key,
            from,
            to: VisitState::Discovered,
            frontier,
        })
    }
}

/// Depth-first traversal driven by an explicit stack.
///
/// Every reached vertex is reported twice: once when it turns gray on first
/// arrival and once when it turns black after all its neighbours have been
/// explored. Resuming a gray vertex that still has unvisited neighbours
/// descends without producing a step.
#[derive(Debug)]
pub struct DepthFirst<'g, K> {
    graph: &'g mut GraphStore<K>,
    stack: Vec<VertexId>,
    current: Option<VertexId>,
}

impl<'g, K: VertexKey> DepthFirst<'g, K> {
    pub(crate) fn new(graph: &'g mut GraphStore<K>, start: VertexId) -> Self {
        graph.reset_visits();
        let current = graph.contains(start).then_some(start);
        Self {
            graph,
            stack: Vec::new(),
            current,
        }
    }

    fn snapshot(&self) -> Vec<K> {
        self.stack
            .iter()
            .rev()
            .filter_map(|id| self.graph.key(*id).cloned())
            .collect()
    }

    fn first_unvisited(&self, id: VertexId) -> Option<VertexId> {
        self.graph.neighbors(id)?.iter().copied().find(|n| {
            self.graph.visit_state(*n) == Some(VisitState::Unvisited)
        })
    }
}

impl<K: VertexKey> Iterator for DepthFirst<'_, K> {
    type Item = TraversalStep<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.current?;
            let key = self.graph.key(current)?.clone();
            let state = self.graph.visit_state(current)?;

            if state == VisitState::Unvisited {
                // Marked before the scan so a self-loop never counts as unvisited.
                self.graph.set_visit_state(current, VisitState::Discovered);
                if let Some(next) = self.first_unvisited(current) {
                    self.stack.push(current);
                    self.current = Some(next);
                }
                // A vertex with nothing to descend into stays current and
                // is finished by the following call.
                let frontier = self.snapshot();
                tracing::trace!(vertex = %key, ?frontier, "dfs discover");
                return Some(TraversalStep {
                    vertex: key,
                    from: state,
                    to: VisitState::Discovered,
                    frontier,
                });
            }

            let descend = if state == VisitState::Finished {
                None
            } else {
                self.first_unvisited(current)
            };
            if let Some(next) = descend {
                self.stack.push(current);
                self.current = Some(next);
                continue;
            }

            self.graph.set_visit_state(current, VisitState::Finished);
            let frontier = self.snapshot();
            self.current = self.stack.pop();
            tracing::trace!(vertex = %key, ?frontier, "dfs finish");
            return Some(TraversalStep {
                vertex: key,
                from: state,
                to: VisitState::Finished,
                frontier,
            });
        }
    }
}

impl<K: VertexKey> GraphStore<K> {
    /// Starts a breadth-first traversal from `start`.
    ///
    /// An unknown `start` yields an empty traversal.
    pub fn breadth_first(&mut self, start: VertexId) -> BreadthFirst<'_, K> {
        BreadthFirst::new(self, start)
    }

    /// Starts a depth-first traversal from `start`.
    ///
    /// An unknown `start` yields an empty traversal.
    pub fn depth_first(&mut self, start: VertexId) -> DepthFirst<'_, K> {
        DepthFirst::new(self, start)
    }
}

/// Runs a full breadth-first traversal and collects its steps.
#[must_use]
pub fn bfs<K: VertexKey>(graph: &mut GraphStore<K>, start: VertexId) -> Vec<TraversalStep<K>> {
    graph.breadth_first(start).collect()
}

/// Runs a full depth-first traversal and collects its steps.
#[must_use]
pub fn dfs<K: VertexKey>(graph: &mut GraphStore<K>, start: VertexId) -> Vec<TraversalStep<K>> {
    graph.depth_first(start).collect()
}
