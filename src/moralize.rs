//! Moralization: marry the co-parents of every vertex.

use crate::types::VertexId;

/// Mutable access to a directed graph's parent bookkeeping by id.
pub trait ParentLinks {
    /// Parents of `v` in insertion order.
    fn parents_of(&self, v: VertexId) -> &[VertexId];

    /// Whether an edge joins `u` and `v` in either direction.
    fn adjacent_ids(&self, u: VertexId, v: VertexId) -> bool {
        self.parents_of(v).contains(&u) || self.parents_of(u).contains(&v)
    }

    /// Append the edge `(u, v)`.
    fn link(&mut self, u: VertexId, v: VertexId);
}

/// Connect every pair of co-parents that is not already adjacent.
///
/// Each vertex's parent list is copied before its pairs are examined, so an
/// edge added for one pair never changes the pairs considered for that same
/// vertex. Returns the added edges in insertion order.
pub fn moralize<G: ParentLinks>(graph: &mut G, vertices: &[VertexId]) -> Vec<(VertexId, VertexId)> {
    let mut added = Vec::new();
    for &v in vertices {
        let parents = graph.parents_of(v).to_vec();
        for (pos, &a) in parents.iter().enumerate() {
            for &b in &parents[pos + 1..] {
                if a != b && !graph.adjacent_ids(a, b) {
                    graph.link(a, b);
                    added.push((a, b));
                }
            }
        }
    }
    added
}
