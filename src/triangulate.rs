//! Triangulation by the elimination game.
//!
//! Vertices are eliminated in a fixed order. Eliminating `v` turns its not
//! yet eliminated neighbours into a clique. After the pass the order is a
//! perfect elimination ordering of the grown graph, so every cycle of length
//! four or more has a chord.

use crate::types::{Adjacency, VertexId};

/// An adjacency structure the elimination game can grow.
pub trait EliminationGraph: Adjacency {
    /// Number of vertices; ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Append an undirected edge.
    fn link(&mut self, u: VertexId, v: VertexId);
}

/// Run the elimination game over `order`, adding fill edges in place.
///
/// `v`'s own neighbour list is copied once when `v` is eliminated; the
/// neighbour lists of its neighbours are read live, so a fill edge added
/// earlier in the same step suppresses a duplicate later in it.
///
/// Returns the fill edges in the order they were added.
pub fn triangulate<G: EliminationGraph>(graph: &mut G, order: &[VertexId]) -> Vec<(VertexId, VertexId)> {
    let mut seen = vec![false; graph.vertex_count()];
    let mut fill = Vec::new();

    for &v in order {
        seen[v.index()] = true;
        let neighbors = graph.neighbors_of(v).to_vec();
        for (pos, &i) in neighbors.iter().enumerate() {
            if seen[i.index()] {
                continue;
            }
            for &j in &neighbors[pos + 1..] {
                if j != i && !seen[j.index()] && !graph.is_linked(i, j) {
                    tracing::trace!(eliminated = %v, u = %i, v = %j, "fill edge");
                    graph.link(i, j);
                    fill.push((i, j));
                }
            }
        }
    }

    fill
}

/// Detached copy of an adjacency table, for dry runs of the elimination game.
#[derive(Debug, Clone)]
pub struct ScratchGraph {
    adjacency: Vec<Vec<VertexId>>,
}

impl ScratchGraph {
    /// Wrap an adjacency table indexed by vertex id.
    pub fn new(adjacency: Vec<Vec<VertexId>>) -> Self {
        Self { adjacency }
    }
}

impl Adjacency for ScratchGraph {
    fn neighbors_of(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v.index()]
    }
}

impl EliminationGraph for ScratchGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn link(&mut self, u: VertexId, v: VertexId) {
        self.adjacency[u.index()].push(v);
        self.adjacency[v.index()].push(u);
    }
}
