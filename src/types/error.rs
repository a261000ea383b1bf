//! Error type shared by the graph containers and the pipeline stages.

use std::fmt;

/// Precondition violations raised by graph operations.
///
/// None of these are retryable. Every operation validates before it
/// mutates, so a returned error leaves the graph untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An operation referenced a vertex the graph does not contain.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
    /// Clique extraction was requested before triangulation.
    #[error("Graph must be triangulated before clique extraction")]
    NotTriangulated,
    /// Triangulation (or an edge insertion) was requested on a graph that is
    /// already chordal-sealed.
    #[error("Graph is already triangulated")]
    AlreadyTriangulated,
    /// Breadth-first reordering could not reach every vertex.
    #[error("Graph is disconnected: breadth-first search reached {reached} of {total} vertices")]
    Disconnected {
        /// Vertices reached from the first vertex.
        reached: usize,
        /// Vertices in the graph.
        total: usize,
    },
    /// A topological order was requested on a graph with a directed cycle.
    #[error("Directed cycle through vertex {0}")]
    Cyclic(String),
}

impl GraphError {
    /// Unknown-vertex error for any printable key.
    pub fn unknown<V: fmt::Debug>(key: &V) -> Self {
        Self::UnknownVertex(format!("{key:?}"))
    }

    /// Cycle error for any printable key.
    pub fn cyclic<V: fmt::Debug>(key: &V) -> Self {
        Self::Cyclic(format!("{key:?}"))
    }
}
