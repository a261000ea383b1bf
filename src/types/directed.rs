//! Directed dependency graph.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::error::GraphError;
use super::undirected::UndirectedGraph;
use super::vertex::{Vertex, VertexArena, VertexId};
use super::GraphExport;
use crate::moralize::{moralize, ParentLinks};

/// Directed graph with parent bookkeeping.
///
/// The edge list keeps insertion order and may hold duplicates. For every
/// edge `(u, v)` added, `u` appears once more in `v`'s parent list; the two
/// are only ever grown together.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    arena: VertexArena<V>,
    edges: Vec<(VertexId, VertexId)>,
    parents: Vec<Vec<VertexId>>,
}

/// DFS colouring for the topological sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    New,
    Open,
    Done,
}

impl<V: Vertex> DirectedGraph<V> {
    /// Build a graph from vertices and ordered `(parent, child)` pairs.
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

        let mut graph = Self {
            parents: vec![Vec::new(); arena.len()],
            arena,
            edges: Vec::with_capacity(ids.len()),
        };
        for (u, v) in ids {
            graph.link(u, v);
        }
        Ok(graph)
    }

    /// Append the edge `(u, v)`.
    pub fn add_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError> {
        let (u, v) = (self.arena.id(u)?, self.arena.id(v)?);
        self.link(u, v);
        Ok(())
    }

    /// Whether an edge joins `u` and `v` in either direction.
    pub fn adjacent(&self, u: &V, v: &V) -> Result<bool, GraphError> {
        let (u, v) = (self.arena.id(u)?, self.arena.id(v)?);
        Ok(self.adjacent_ids(u, v))
    }

    /// Parents of `v`, one entry per incoming edge, in insertion order.
    pub fn parents(&self, v: &V) -> Result<Vec<&V>, GraphError> {
        let v = self.arena.id(v)?;
        Ok(self.keys(&self.parents[v.index()]))
    }

    /// Children of `v`, one entry per outgoing edge, in insertion order.
    pub fn children(&self, v: &V) -> Result<Vec<&V>, GraphError> {
        let v = self.arena.id(v)?;
        Ok(self
            .edges
            .iter()
            .filter(|(from, _)| *from == v)
            .map(|&(_, to)| self.arena.key(to))
            .collect())
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

    /// Connect every pair of co-parents that is not already adjacent.
    ///
    /// The added edges are directed `(earlier parent, later parent)` and go
    /// through the same bookkeeping as [`add_edge`](Self::add_edge). Returns
    /// the number of edges added.
    pub fn moralize(&mut self) -> usize {
        let order: Vec<VertexId> = self.arena.ids().collect();
        let added = moralize(self, &order);
        tracing::debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            married = added.len(),
            "moralized"
        );
        added.len()
    }

    /// The moral graph, leaving `self` unchanged.
    pub fn moral_graph(&self) -> UndirectedGraph<V> {
        let mut copy = self.clone();
        copy.moralize();
        copy.to_undirected()
    }

    /// Undirected copy over the same vertices and edges.
    pub fn to_undirected(&self) -> UndirectedGraph<V> {
        UndirectedGraph::from_arena(self.arena.clone(), &self.edges)
    }

    /// Topological order: every parent precedes all of its children.
    ///
    /// Depth-first from each root in insertion order, children visited in
    /// reverse insertion order; the reversed post-order is returned. Fails
    /// with [`GraphError::Cyclic`] if the graph has a directed cycle.
    pub fn topological_order(&self) -> Result<Vec<&V>, GraphError> {
        let mut children = vec![Vec::new(); self.arena.len()];
        for &(u, v) in &self.edges {
            children[u.index()].push(v);
        }

        let mut marks = vec![Mark::New; self.arena.len()];
        let mut post = Vec::with_capacity(self.arena.len());
        for v in self.arena.ids() {
            if marks[v.index()] == Mark::New {
                self.visit(v, &children, &mut marks, &mut post)?;
            }
        }
        post.reverse();
        Ok(self.keys(&post))
    }

    /// Depth-first walk from `root` on an explicit stack.
    ///
    /// Each frame holds a vertex and how many of its children are still
    /// unvisited; children are taken from the back of the list.
    fn visit(
        &self,
        root: VertexId,
        children: &[Vec<VertexId>],
        marks: &mut [Mark],
        post: &mut Vec<VertexId>,
    ) -> Result<(), GraphError> {
        marks[root.index()] = Mark::Open;
        let mut stack = vec![(root, children[root.index()].len())];

        while let Some(frame) = stack.last_mut() {
            let (v, remaining) = *frame;
            if remaining == 0 {
                marks[v.index()] = Mark::Done;
                post.push(v);
                stack.pop();
                continue;
            }
            frame.1 -= 1;

            let child = children[v.index()][remaining - 1];
            match marks[child.index()] {
                Mark::Open => return Err(GraphError::cyclic(self.arena.key(child))),
                Mark::New => {
                    marks[child.index()] = Mark::Open;
                    stack.push((child, children[child.index()].len()));
                }
                Mark::Done => {}
            }
        }
        Ok(())
    }

    /// Every vertex with a directed path to `v`, `v` included.
    ///
    /// Discovery order of a depth-first walk over parent lists.
    pub fn ancestors(&self, v: &V) -> Result<Vec<&V>, GraphError> {
        let start = self.arena.id(v)?;
        let mut queued = vec![false; self.arena.len()];
        let mut stack = vec![start];
        let mut visited = Vec::new();
        queued[start.index()] = true;

        while let Some(current) = stack.pop() {
            visited.push(current);
            for &p in &self.parents[current.index()] {
                if !queued[p.index()] {
                    queued[p.index()] = true;
                    stack.push(p);
                }
            }
        }
        Ok(self.keys(&visited))
    }

    fn keys(&self, ids: &[VertexId]) -> Vec<&V> {
        ids.iter().map(|&id| self.arena.key(id)).collect()
    }
}

impl<V> ParentLinks for DirectedGraph<V> {
    fn parents_of(&self, v: VertexId) -> &[VertexId] {
        &self.parents[v.index()]
    }

    fn link(&mut self, u: VertexId, v: VertexId) {
        self.edges.push((u, v));
        self.parents[v.index()].push(u);
    }
}

impl<V: Vertex> GraphExport for DirectedGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> Vec<&V> {
        DirectedGraph::vertices(self)
    }

    fn edges(&self) -> Vec<(&V, &V)> {
        DirectedGraph::edges(self)
    }
}

impl<V: Vertex + Serialize> Serialize for DirectedGraph<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DirectedGraph", 2)?;
        state.serialize_field("vertices", &self.vertices())?;
        state.serialize_field("edges", &self.edges())?;
        state.end()
    }
}
