//! Undirected graph and the chordal pipeline stages that run on it.
//!
//! ## Lifecycle
//!
//! ```text
//! Created → (add_edge)* → Triangulated → clique graph → junction tree
//! ```
//!
//! Triangulation is one-shot. Once the graph is triangulated, further edge
//! insertions are refused so the recorded elimination ordering stays perfect.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::clique::Clique;
use super::error::GraphError;
use super::junction::JunctionTree;
use super::vertex::{Adjacency, Vertex, VertexArena, VertexId};
use super::GraphExport;
use crate::cliques::{complete_from_elimination, maximal_cliques};
use crate::kruskal::kruskal;
use crate::policy::EliminationPolicy;
use crate::triangulate::{triangulate, EliminationGraph, ScratchGraph};

/// Undirected graph with symmetric adjacency lists.
///
/// Duplicate edges are kept as given; callers that want simple-graph
/// semantics should not insert them.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    arena: VertexArena<V>,
    edges: Vec<(VertexId, VertexId)>,
    adjacency: Vec<Vec<VertexId>>,
    triangulated: bool,
    /// Perfect elimination ordering, recorded by triangulation.
    elimination: Vec<VertexId>,
}

impl<V: Vertex> UndirectedGraph<V> {
    /// Build a graph from vertices and unordered pairs.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if an edge names a vertex
    /// that is not in `vertices`.
    pub fn new<I, E>(vertices: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let arena = VertexArena::from_keys(vertices);
        let mut ids = Vec::new();
        for (u, v) in edges {
            ids.push((arena.id(&u)?, arena.id(&v)?));
        }
        Ok(Self::from_arena(arena, &ids))
    }

    pub(crate) fn from_arena(arena: VertexArena<V>, edges: &[(VertexId, VertexId)]) -> Self {
        let mut graph = Self {
            adjacency: vec![Vec::new(); arena.len()],
            arena,
            edges: Vec::with_capacity(edges.len()),
            triangulated: false,
            elimination: Vec::new(),
        };
        for &(u, v) in edges {
            graph.link(u, v);
        }
        graph
    }

    /// Append the edge `{u, v}`.
    ///
    /// Refused with [`GraphError::AlreadyTriangulated`] once the graph has
    /// been triangulated.
    pub fn add_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError> {
        let (u, v) = (self.arena.id(u)?, self.arena.id(v)?);
        if self.triangulated {
            return Err(GraphError::AlreadyTriangulated);
        }
        self.link(u, v);
        Ok(())
    }

    /// Whether `u` and `v` share an edge.
    pub fn has_edge(&self, u: &V, v: &V) -> Result<bool, GraphError> {
        let (u, v) = (self.arena.id(u)?, self.arena.id(v)?);
        Ok(self.is_linked(u, v))
    }

    /// Neighbours of `v`, one entry per incident edge, in insertion order.
    pub fn neighbors(&self, v: &V) -> Result<Vec<&V>, GraphError> {
        let v = self.arena.id(v)?;
        Ok(self.keys(&self.adjacency[v.index()]))
    }

    /// Vertex keys in insertion order.
    pub fn vertices(&self) -> Vec<&V> {
        self.arena.keys().iter().collect()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> Vec<(&V, &V)> {
        self.edges
            .iter()
            .map(|&(u, v)| (self.arena.key(u), self.arena.key(v)))
            .collect()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether [`triangulate`](Self::triangulate) has run.
    pub fn is_triangulated(&self) -> bool {
        self.triangulated
    }

    /// Elimination ordering recorded by triangulation; empty before it.
    pub fn elimination_order(&self) -> Vec<&V> {
        self.keys(&self.elimination)
    }

    /// Make the graph chordal with the elimination game.
    ///
    /// The vertex order comes from `policy`. Returns the number of fill
    /// edges added. A second call fails with
    /// [`GraphError::AlreadyTriangulated`]; a disconnected graph under a
    /// rejecting policy fails with [`GraphError::Disconnected`]. Either way
    /// the graph is left as it was.
    pub fn triangulate(&mut self, policy: &EliminationPolicy) -> Result<usize, GraphError> {
        if self.triangulated {
            return Err(GraphError::AlreadyTriangulated);
        }
        let order = self.resolve_order(policy)?;
        let before = self.edge_count();
        let fill = triangulate(self, &order);

        tracing::debug!(
            vertices = self.vertex_count(),
            edges_before = before,
            edges_after = self.edge_count(),
            fill = fill.len(),
            reorder = policy.reorder,
            "triangulated"
        );

        self.elimination = order;
        self.triangulated = true;
        Ok(fill.len())
    }

    /// Fill edges triangulation would add under `policy`, without adding them.
    pub fn fill_in(&self, policy: &EliminationPolicy) -> Result<Vec<(V, V)>, GraphError> {
        let order = self.resolve_order(policy)?;
        let mut scratch = ScratchGraph::new(self.adjacency.clone());
        Ok(triangulate(&mut scratch, &order)
            .into_iter()
            .map(|(u, v)| (self.arena.key(u).clone(), self.arena.key(v).clone()))
            .collect())
    }

    /// Maximal cliques of the triangulated graph.
    ///
    /// Each vertex in `policy` order seeds a greedy clique: starting from
    /// the seed, every neighbour adjacent to all current members joins. Any
    /// maximal clique of the recorded elimination ordering that no seed
    /// produced is appended afterwards. Cliques are deduplicated and listed
    /// in discovery order.
    pub fn maximal_cliques(&self, policy: &EliminationPolicy) -> Result<Vec<Clique<V>>, GraphError> {
        if !self.triangulated {
            return Err(GraphError::NotTriangulated);
        }
        let order = self.resolve_order(policy)?;
        let mut found = maximal_cliques(self, &order);
        let greedy = found.len();
        let completed = complete_from_elimination(self, &self.elimination, &mut found);

        tracing::debug!(greedy, completed, "maximal cliques extracted");

        Ok(found
            .into_iter()
            .map(|ids| Clique::new(ids.into_iter().map(|id| self.arena.key(id).clone())))
            .collect())
    }

    /// Graph over the maximal cliques, joining every pair that shares a
    /// member.
    pub fn clique_graph(&self, policy: &EliminationPolicy) -> Result<UndirectedGraph<Clique<V>>, GraphError> {
        let cliques = self.maximal_cliques(policy)?;
        let mut edges = Vec::new();
        for i in 0..cliques.len() {
            for j in (i + 1)..cliques.len() {
                if cliques[i].overlap(&cliques[j]) > 0 {
                    edges.push((VertexId::new(i), VertexId::new(j)));
                }
            }
        }

        tracing::debug!(cliques = cliques.len(), edges = edges.len(), "clique graph built");
        Ok(UndirectedGraph::from_arena(VertexArena::from_keys(cliques), &edges))
    }

    /// Junction tree: maximum-overlap spanning tree of the clique graph.
    pub fn to_junction_tree(&self, policy: &EliminationPolicy) -> Result<JunctionTree<V>, GraphError> {
        let clique_graph = self.clique_graph(policy)?;
        let overlap = |&(a, b): &(VertexId, VertexId)| {
            let (a, b) = (clique_graph.arena.key(a), clique_graph.arena.key(b));
            -(a.overlap(b) as i64)
        };
        let selected = kruskal(clique_graph.vertex_count(), &clique_graph.edges, overlap)?;

        tracing::debug!(
            cliques = clique_graph.vertex_count(),
            tree_edges = selected.len(),
            "junction tree spanned"
        );
        Ok(JunctionTree::from_spanning_edges(
            clique_graph.arena.keys(),
            &selected,
            policy.params_hash(),
        ))
    }

    fn resolve_order(&self, policy: &EliminationPolicy) -> Result<Vec<VertexId>, GraphError> {
        let caller: Vec<VertexId> = self.arena.ids().collect();
        policy.resolve(&caller, |v| self.adjacency[v.index()].as_slice())
    }

    fn keys(&self, ids: &[VertexId]) -> Vec<&V> {
        ids.iter().map(|&id| self.arena.key(id)).collect()
    }

    pub(crate) fn key(&self, id: VertexId) -> &V {
        self.arena.key(id)
    }

    pub(crate) fn edge_ids(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }
}

impl<V> Adjacency for UndirectedGraph<V> {
    fn neighbors_of(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v.index()]
    }
}

impl<V> EliminationGraph for UndirectedGraph<V> {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn link(&mut self, u: VertexId, v: VertexId) {
        self.adjacency[u.index()].push(v);
        self.adjacency[v.index()].push(u);
        self.edges.push((u, v));
    }
}

impl<V: Vertex> GraphExport for UndirectedGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> Vec<&V> {
        UndirectedGraph::vertices(self)
    }

    fn edges(&self) -> Vec<(&V, &V)> {
        UndirectedGraph::edges(self)
    }
}

impl<V: Vertex + Serialize> Serialize for UndirectedGraph<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("UndirectedGraph", 3)?;
        state.serialize_field("vertices", &self.vertices())?;
        state.serialize_field("edges", &self.edges())?;
        state.serialize_field("triangulated", &self.triangulated)?;
        state.end()
    }
}
