//! # junction-tree
//!
//! Turns a directed dependency graph over discrete variables into a junction
//! tree for exact inference by message passing.
//!
//! ## Pipeline
//!
//! ```text
//! DirectedGraph → moralize → UndirectedGraph → triangulate → chordal graph
//!                                                                 ↓
//!                 JunctionTree ← kruskal (max overlap) ← clique graph
//! ```
//!
//! Each stage consumes the previous stage's output; no stage re-enters an
//! earlier one. The crate computes structure only; probabilities and
//! message passing belong to the caller.
//!
//! ## Determinism Guarantees
//!
//! - Vertex, edge, parent and neighbour lists keep insertion order
//! - Breadth-first reordering reads neighbours in insertion order
//! - Same graph + same policy → identical cliques, tree and fingerprint

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod policy;
pub mod traversal;
pub mod moralize;
pub mod triangulate;
pub mod cliques;
pub mod kruskal;
pub mod pipeline;
pub mod canonical;

// Re-exports
pub use types::{
    Adjacency, Clique, DirectedGraph, GraphError, GraphExport, JunctionTree, UndirectedGraph,
    Vertex, VertexArena, VertexId,
};
pub use policy::{DisconnectedPolicy, EliminationPolicy};
pub use traversal::{bfs, bfs_cover};
pub use kruskal::{kruskal, DisjointSet};
pub use pipeline::build_junction_tree;
pub use canonical::{canonical_hash, canonical_hash_hex};

/// Default elimination policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "elimination_policy_v1";
