//! Core types: vertex arena, graph containers, cliques and junction trees.

pub mod vertex;
pub mod error;
pub mod directed;
pub mod undirected;
pub mod clique;
pub mod junction;

pub use vertex::{Vertex, VertexId, VertexArena, Adjacency};
pub use error::GraphError;
pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;
pub use clique::Clique;
pub use junction::JunctionTree;

/// Read-only view for exporters and visualizers.
///
/// Only vertices and edges are exposed, both in insertion order. Layout
/// tools need nothing else: keys are stable, hashable and ordered.
pub trait GraphExport {
    /// Vertex key type.
    type Vertex;

    /// Vertex keys in insertion order.
    fn vertices(&self) -> Vec<&Self::Vertex>;

    /// Edge endpoints in insertion order.
    fn edges(&self) -> Vec<(&Self::Vertex, &Self::Vertex)>;
}
