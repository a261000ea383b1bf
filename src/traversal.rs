//! Breadth-first ordering.
//!
//! Used to give triangulation and clique extraction a deterministic vertex
//! order when the caller does not want its own. Neighbour lists are read in
//! insertion order, so the same graph always yields the same order.

use std::collections::{HashSet, VecDeque};

use crate::policy::DisconnectedPolicy;
use crate::types::{GraphError, VertexId};

/// Vertices reachable from `source`, each exactly once, in breadth-first
/// order.
///
/// Vertices that cannot be reached from `source` are not in the result.
/// Use [`bfs_cover`] when every vertex must be ordered.
pub fn bfs<'a, F>(source: VertexId, neighbors: F) -> Vec<VertexId>
where
    F: Fn(VertexId) -> &'a [VertexId],
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    bfs_into(source, &neighbors, &mut visited, &mut order);
    order
}

/// Breadth-first order over every vertex in `vertices`.
///
/// The search starts at `vertices[0]`. If it does not reach everything,
/// `policy` decides between failing and restarting from the first unvisited
/// vertex in `vertices`.
pub fn bfs_cover<'a, F>(
    vertices: &[VertexId],
    neighbors: F,
    policy: DisconnectedPolicy,
) -> Result<Vec<VertexId>, GraphError>
where
    F: Fn(VertexId) -> &'a [VertexId],
{
    let mut visited = HashSet::with_capacity(vertices.len());
    let mut order = Vec::with_capacity(vertices.len());

    let Some(&first) = vertices.first() else {
        return Ok(order);
    };
    bfs_into(first, &neighbors, &mut visited, &mut order);

    if order.len() < vertices.len() {
        if policy == DisconnectedPolicy::Reject {
            return Err(GraphError::Disconnected {
                reached: order.len(),
                total: vertices.len(),
            });
        }
        for &v in vertices {
            if !visited.contains(&v) {
                tracing::warn!(
                    restart = %v,
                    reached = order.len(),
                    total = vertices.len(),
                    "breadth-first order restarted on a new component"
                );
                bfs_into(v, &neighbors, &mut visited, &mut order);
            }
        }
    }

    Ok(order)
}

/// Extend `order` with everything reachable from `source` that is not yet in
/// `visited`.
fn bfs_into<'a, F>(
    source: VertexId,
    neighbors: &F,
    visited: &mut HashSet<VertexId>,
    order: &mut Vec<VertexId>,
) where
    F: Fn(VertexId) -> &'a [VertexId],
{
    if !visited.insert(source) {
        return;
    }
    let mut queue = VecDeque::from([source]);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &n in neighbors(v) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    /// Complete binary tree of the given depth, 1-indexed (slot 0 unused).
    fn binary_tree(depth: u32) -> Vec<Vec<VertexId>> {
        let n = 1usize << depth;
        (0..n)
            .map(|i| {
                if i == 0 || i >= n / 2 {
                    vec![]
                } else {
                    ids(&[2 * i, 2 * i + 1])
                }
            })
            .collect()
    }

    #[test]
    fn test_bfs_binary_tree_level_order() {
        let tree = binary_tree(3);
        let order = bfs(VertexId::new(1), |v| tree[v.index()].as_slice());
        assert_eq!(order, ids(&[1, 2, 3, 4, 5, 6, 7]));
    }

    #[test]
    fn test_bfs_visits_once_with_parallel_edges() {
        // 0 - 1 twice, 1 - 0 back, plus a self loop on 0
        let adjacency = vec![ids(&[1, 1, 0]), ids(&[0, 0])];
        let order = bfs(VertexId::new(0), |v| adjacency[v.index()].as_slice());
        assert_eq!(order, ids(&[0, 1]));
    }

    #[test]
    fn test_bfs_omits_unreachable() {
        let adjacency = vec![ids(&[1]), ids(&[0]), ids(&[3]), ids(&[2])];
        let order = bfs(VertexId::new(0), |v| adjacency[v.index()].as_slice());
        assert_eq!(order, ids(&[0, 1]));
    }

    #[test]
    fn test_cover_restarts_per_component() {
        let adjacency = vec![ids(&[1]), ids(&[0]), ids(&[3]), ids(&[2]), vec![]];
        let order = bfs_cover(
            &ids(&[0, 1, 2, 3, 4]),
            |v| adjacency[v.index()].as_slice(),
            DisconnectedPolicy::PerComponent,
        )
        .unwrap();
        assert_eq!(order, ids(&[0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_cover_rejects_disconnected() {
        let adjacency = vec![ids(&[1]), ids(&[0]), vec![]];
        let err = bfs_cover(
            &ids(&[0, 1, 2]),
            |v| adjacency[v.index()].as_slice(),
            DisconnectedPolicy::Reject,
        )
        .unwrap_err();
        assert_eq!(err, GraphError::Disconnected { reached: 2, total: 3 });
    }

    #[test]
    fn test_cover_empty() {
        let order = bfs_cover(
            &[],
            |_: VertexId| -> &'static [VertexId] { &[] },
            DisconnectedPolicy::Reject,
        )
        .unwrap();
        assert!(order.is_empty());
    }
}
