//! Kruskal's spanning forest over a weighted edge list.

use crate::types::{GraphError, VertexId};

/// Union-find over `0..n` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Every element in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of `x`'s set.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Merge the sets of `a` and `b`. Returns false if they were already one.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] += 1;
        }
        true
    }
}

/// Minimum spanning forest of `edges` over `vertex_count` vertices.
///
/// Edges are taken in ascending `weight` order (ties keep input order) and
/// kept when they join two different components. The result is in that
/// ascending order and has `vertex_count - components` edges.
///
/// Fails with [`GraphError::UnknownVertex`] before any edge is weighed if an
/// endpoint is not below `vertex_count`.
pub fn kruskal<W, F>(
    vertex_count: usize,
    edges: &[(VertexId, VertexId)],
    weight: F,
) -> Result<Vec<(VertexId, VertexId)>, GraphError>
where
    W: Ord,
    F: Fn(&(VertexId, VertexId)) -> W,
{
    if let Some(bad) = edges
        .iter()
        .flat_map(|&(u, v)| [u, v])
        .find(|id| id.index() >= vertex_count)
    {
        return Err(GraphError::unknown(&bad));
    }

    let mut ranked: Vec<(W, &(VertexId, VertexId))> = edges.iter().map(|e| (weight(e), e)).collect();
    ranked.sort_by(|a, b| a.0.cmp(&b.0));

    let mut components = DisjointSet::new(vertex_count);
    let mut selected = Vec::with_capacity(vertex_count.saturating_sub(1));
    for (_, &(u, v)) in ranked {
        if components.union(u.index(), v.index()) {
            tracing::trace!(u = %u, v = %v, "spanning edge selected");
            selected.push((u, v));
        }
    }
    Ok(selected)
}
