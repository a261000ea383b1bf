//! Property tests for the chordal pipeline invariants.

use junction_tree::{
    kruskal, Clique, DirectedGraph, DisjointSet, EliminationPolicy, UndirectedGraph, VertexId,
};
use proptest::prelude::*;

/// Vertex count plus an edge list over `0..n`, self-loops removed.
fn random_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..30)
            .prop_map(|edges| edges.into_iter().filter(|(u, v)| u != v).collect::<Vec<_>>());
        (Just(n), edges)
    })
}

fn undirected(n: usize, edges: &[(usize, usize)]) -> UndirectedGraph<usize> {
    UndirectedGraph::new(0..n, edges.iter().copied()).unwrap()
}

fn components(n: usize, edges: &[(usize, usize)]) -> usize {
    let mut set = DisjointSet::new(n);
    let merged = edges.iter().filter(|&&(u, v)| set.union(u, v)).count();
    n - merged
}

fn triangulated(n: usize, edges: &[(usize, usize)], policy: &EliminationPolicy) -> UndirectedGraph<usize> {
    let mut g = undirected(n, edges);
    g.triangulate(policy).unwrap();
    g
}

/// Small simple graph with distinct edge weights, as `(n, edges, weights)`.
fn small_weighted_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<u32>)> {
    (1usize..7)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..12)))
        .prop_map(|(n, raw)| {
            let mut edges: Vec<(usize, usize)> = Vec::new();
            for (u, v) in raw {
                let e = (u.min(v), u.max(v));
                if u != v && !edges.contains(&e) {
                    edges.push(e);
                }
            }
            (n, edges)
        })
        .prop_flat_map(|(n, edges)| {
            let weights = Just((0..edges.len() as u32).collect::<Vec<_>>()).prop_shuffle();
            (Just(n), Just(edges), weights)
        })
}

/// Smallest total weight over every spanning forest, by exhaustion.
fn brute_force_min_forest(n: usize, edges: &[(usize, usize)], weights: &[u32]) -> u32 {
    let size = n - components(n, edges);
    let chosen = |mask: u32| (0..edges.len()).filter(move |&i| mask & (1u32 << i) != 0);

    (0..1u32 << edges.len())
        .filter(|&mask| mask.count_ones() as usize == size)
        .filter(|&mask| {
            let mut set = DisjointSet::new(n);
            chosen(mask).all(|i| set.union(edges[i].0, edges[i].1))
        })
        .map(|mask| chosen(mask).map(|i| weights[i]).sum::<u32>())
        .min()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn moral_graph_marries_all_coparents((n, edges) in random_graph()) {
        // Orient every edge low -> high so the graph is acyclic.
        let dag_edges: Vec<(usize, usize)> = edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect();
        let dag = DirectedGraph::new(0..n, dag_edges).unwrap();
        let moral = dag.moral_graph();

        for v in 0..n {
            let parents = dag.parents(&v).unwrap();
            for (i, p1) in parents.iter().enumerate() {
                for p2 in &parents[i + 1..] {
                    if p1 != p2 {
                        prop_assert!(moral.has_edge(p1, p2).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn topological_order_respects_edges((n, edges) in random_graph()) {
        let dag_edges: Vec<(usize, usize)> = edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect();
        let dag = DirectedGraph::new(0..n, dag_edges.clone()).unwrap();
        let order = dag.topological_order().unwrap();
        prop_assert_eq!(order.len(), n);

        let mut position = vec![0; n];
        for (pos, &&v) in order.iter().enumerate() {
            position[v] = pos;
        }
        for (u, v) in dag_edges {
            prop_assert!(position[u] < position[v]);
        }
    }

    #[test]
    fn triangulation_reaches_fixed_point((n, edges) in random_graph()) {
        let policy = EliminationPolicy::in_order();
        let g = triangulated(n, &edges, &policy);
        prop_assert!(g.fill_in(&policy).unwrap().is_empty());
    }

    #[test]
    fn cliques_cover_and_are_complete_and_maximal((n, edges) in random_graph()) {
        let policy = EliminationPolicy::default();
        let g = triangulated(n, &edges, &policy);
        let cliques = g.maximal_cliques(&policy).unwrap();

        let covered = Clique::new(cliques.iter().flat_map(|c| c.members().iter().copied()));
        let all: Vec<usize> = (0..n).collect();
        prop_assert_eq!(covered.members(), all.as_slice());

        for c in &cliques {
            for (i, u) in c.members().iter().enumerate() {
                for v in &c.members()[i + 1..] {
                    prop_assert!(g.has_edge(u, v).unwrap());
                }
            }
            for other in &cliques {
                prop_assert!(c == other || !c.is_subset(other));
            }
        }
    }

    #[test]
    fn junction_tree_spans_and_keeps_running_intersection((n, edges) in random_graph()) {
        let policy = EliminationPolicy::default();
        let g = triangulated(n, &edges, &policy);
        let tree = g.to_junction_tree(&policy).unwrap();

        prop_assert_eq!(tree.edge_count(), tree.len() - components(n, &edges));
        prop_assert!(tree.satisfies_running_intersection());
    }

    #[test]
    fn kruskal_selects_acyclic_spanning_forest(
        (n, edges) in random_graph(),
        seed in any::<u64>()
    ) {
        let ids: Vec<(VertexId, VertexId)> = edges
            .iter()
            .map(|&(u, v)| (VertexId::new(u), VertexId::new(v)))
            .collect();
        let weight = |e: &(VertexId, VertexId)| {
            (e.0.index() as u64 * 31 + e.1.index() as u64).wrapping_mul(seed | 1) % 97
        };
        let selected = kruskal(n, &ids, weight).unwrap();
        prop_assert_eq!(selected.len(), n - components(n, &edges));

        let mut set = DisjointSet::new(n);
        for (u, v) in &selected {
            prop_assert!(set.union(u.index(), v.index()));
        }

        let weights: Vec<u64> = selected.iter().map(weight).collect();
        prop_assert!(weights.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn kruskal_matches_brute_force_minimum((n, edges, weights) in small_weighted_graph()) {
        let ids: Vec<(VertexId, VertexId)> = edges
            .iter()
            .map(|&(u, v)| (VertexId::new(u), VertexId::new(v)))
            .collect();
        let weight_of = |e: &(VertexId, VertexId)| {
            let pos = ids.iter().position(|x| x == e).unwrap();
            weights[pos]
        };
        let selected = kruskal(n, &ids, weight_of).unwrap();

        let total: u32 = selected.iter().map(weight_of).sum();
        prop_assert_eq!(total, brute_force_min_forest(n, &edges, &weights));
    }
}
