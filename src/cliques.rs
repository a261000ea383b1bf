//! Maximal clique extraction for chordal graphs.

use std::collections::{HashMap, HashSet};

use crate::types::{Adjacency, VertexId};

/// Greedy maximal cliques seeded from every vertex in `order`.
///
/// For each seed the candidate starts as `{seed}` and takes each neighbour,
/// in neighbour-list order, that is adjacent to every current member. The
/// result for any seed is a maximal clique containing it. Candidates are
/// returned sorted by id, deduplicated, in discovery order.
pub fn maximal_cliques<G: Adjacency>(graph: &G, order: &[VertexId]) -> Vec<Vec<VertexId>> {
    let mut seen: HashSet<Vec<VertexId>> = HashSet::new();
    let mut cliques = Vec::new();

    for &seed in order {
        let mut candidate = vec![seed];
        for &n in graph.neighbors_of(seed) {
            if !candidate.contains(&n) && candidate.iter().all(|&c| graph.is_linked(n, c)) {
                candidate.push(n);
            }
        }
        candidate.sort_unstable();
        if seen.insert(candidate.clone()) {
            cliques.push(candidate);
        }
    }

    cliques
}

/// Add the maximal cliques of a perfect elimination ordering that `found`
/// does not already hold.
///
/// In a chordal graph every maximal clique is `{v} ∪ later(v)` for some `v`,
/// where `later(v)` are the neighbours eliminated after `v`. The greedy pass
/// can miss some of them when neighbour lists are ordered unfavourably; this
/// closes the gap. `found` must hold maximal cliques sorted by id.
pub fn complete_from_elimination<G: Adjacency>(
    graph: &G,
    elimination: &[VertexId],
    found: &mut Vec<Vec<VertexId>>,
) -> usize {
    let rank: HashMap<VertexId, usize> = elimination
        .iter()
        .enumerate()
        .map(|(pos, &v)| (v, pos))
        .collect();
    let later = |n: &VertexId, v: VertexId| rank.get(n).is_some_and(|&r| r > rank[&v]);

    let candidates: Vec<Vec<VertexId>> = elimination
        .iter()
        .map(|&v| {
            let mut clique: Vec<VertexId> = graph
                .neighbors_of(v)
                .iter()
                .copied()
                .filter(|n| later(n, v))
                .collect();
            clique.push(v);
            clique.sort_unstable();
            clique.dedup();
            clique
        })
        .collect();

    let before = found.len();
    for (pos, candidate) in candidates.iter().enumerate() {
        let covered = found.iter().any(|f| is_subset(candidate, f));
        let dominated = candidates
            .iter()
            .enumerate()
            .any(|(other, c)| other != pos && c.len() > candidate.len() && is_subset(candidate, c));
        if !covered && !dominated {
            found.push(candidate.clone());
        }
    }
    found.len() - before
}

/// Whether sorted `small` is contained in sorted `large`.
pub fn is_subset<T: Ord>(small: &[T], large: &[T]) -> bool {
    small.len() <= large.len() && small.iter().all(|v| large.binary_search(v).is_ok())
}
