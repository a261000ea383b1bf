//! Junction tree: the spanning tree of the clique graph handed to inference.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{BTreeSet, VecDeque};

use super::clique::Clique;
use super::error::GraphError;
use super::undirected::UndirectedGraph;
use super::vertex::{Adjacency, Vertex, VertexArena, VertexId};
use super::GraphExport;
use crate::canonical::canonical_hash_hex;

/// Maximum-overlap spanning tree over the maximal cliques of a chordal graph.
///
/// ## Layout
///
/// Cliques are listed breadth-first over the tree. Each component is rooted
/// at the clique with the largest total separator size, ties going to the
/// earliest extracted clique, and edges are stored as `(parent, child)` in
/// the order the walk discovers them. The same input and policy therefore
/// always produce the same vertex and edge lists.
#[derive(Debug, Clone)]
pub struct JunctionTree<V> {
    tree: UndirectedGraph<Clique<V>>,
    params_hash: String,
}

impl<V: Vertex> JunctionTree<V> {
    /// Lay out the spanning edges selected over `cliques`.
    ///
    /// `selected` indexes into `cliques` and must be a forest.
    pub(crate) fn from_spanning_edges(
        cliques: &[Clique<V>],
        selected: &[(VertexId, VertexId)],
        params_hash: String,
    ) -> Self {
        let n = cliques.len();
        let mut adjacency = vec![Vec::new(); n];
        let mut weight = vec![0usize; n];
        for &(a, b) in selected {
            let shared = cliques[a.index()].overlap(&cliques[b.index()]);
            adjacency[a.index()].push(b.index());
            adjacency[b.index()].push(a.index());
            weight[a.index()] += shared;
            weight[b.index()] += shared;
        }

        let mut roots: Vec<usize> = (0..n).collect();
        roots.sort_by_key(|&i| std::cmp::Reverse(weight[i]));

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut tree_edges = Vec::with_capacity(selected.len());
        for root in roots {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            let mut queue = VecDeque::from([root]);
            while let Some(v) = queue.pop_front() {
                order.push(v);
                for &child in &adjacency[v] {
                    if !visited[child] {
                        visited[child] = true;
                        tree_edges.push((v, child));
                        queue.push_back(child);
                    }
                }
            }
        }

        let mut position = vec![0usize; n];
        for (pos, &old) in order.iter().enumerate() {
            position[old] = pos;
        }
        let arena = VertexArena::from_keys(order.iter().map(|&i| cliques[i].clone()));
        let edges: Vec<(VertexId, VertexId)> = tree_edges
            .into_iter()
            .map(|(p, c)| (VertexId::new(position[p]), VertexId::new(position[c])))
            .collect();

        Self {
            tree: UndirectedGraph::from_arena(arena, &edges),
            params_hash,
        }
    }

    /// Cliques in layout order.
    pub fn cliques(&self) -> Vec<&Clique<V>> {
        self.tree.vertices()
    }

    /// Tree edges as `(parent, child)`.
    pub fn edges(&self) -> Vec<(&Clique<V>, &Clique<V>)> {
        self.tree.edges()
    }

    /// Number of cliques.
    pub fn len(&self) -> usize {
        self.tree.vertex_count()
    }

    /// Whether the tree has no cliques.
    pub fn is_empty(&self) -> bool {
        self.tree.vertex_count() == 0
    }

    /// Number of tree edges.
    pub fn edge_count(&self) -> usize {
        self.tree.edge_count()
    }

    /// Underlying tree as an undirected graph over cliques.
    pub fn graph(&self) -> &UndirectedGraph<Clique<V>> {
        &self.tree
    }

    /// Cliques adjacent to `clique` in the tree.
    pub fn neighbors(&self, clique: &Clique<V>) -> Result<Vec<&Clique<V>>, GraphError> {
        self.tree.neighbors(clique)
    }

    /// Separator of every tree edge, in edge order.
    pub fn separators(&self) -> Vec<Vec<V>> {
        self.tree
            .edge_ids()
            .iter()
            .map(|&(a, b)| self.tree.key(a).intersection(self.tree.key(b)))
            .collect()
    }

    /// Hash of the elimination policy that produced this tree.
    pub fn params_hash(&self) -> &str {
        &self.params_hash
    }

    /// Whether, for every vertex, the cliques containing it form a connected
    /// subtree.
    pub fn satisfies_running_intersection(&self) -> bool {
        let n = self.len();
        let ids: Vec<VertexId> = (0..n).map(VertexId::new).collect();
        let members: BTreeSet<&V> = ids
            .iter()
            .flat_map(|&id| self.tree.key(id).members())
            .collect();

        members.into_iter().all(|x| {
            let holds = |id: VertexId| self.tree.key(id).contains(x);
            let holders = ids.iter().filter(|&&id| holds(id)).count();
            let Some(&start) = ids.iter().find(|&&id| holds(id)) else {
                return true;
            };

            let mut seen = vec![false; n];
            seen[start.index()] = true;
            let mut queue = VecDeque::from([start]);
            let mut reached = 0;
            while let Some(v) = queue.pop_front() {
                reached += 1;
                for &next in self.tree.neighbors_of(v) {
                    if !seen[next.index()] && holds(next) {
                        seen[next.index()] = true;
                        queue.push_back(next);
                    }
                }
            }
            reached == holders
        })
    }
}

impl<V: Vertex + Serialize> JunctionTree<V> {
    /// Content hash over the policy, cliques and edges.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(&(&self.params_hash, self.cliques(), self.edges()))
    }
}

impl<V: Vertex> GraphExport for JunctionTree<V> {
    type Vertex = Clique<V>;

    fn vertices(&self) -> Vec<&Clique<V>> {
        self.cliques()
    }

    fn edges(&self) -> Vec<(&Clique<V>, &Clique<V>)> {
        JunctionTree::edges(self)
    }
}

impl<V: Vertex + Serialize> Serialize for JunctionTree<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("JunctionTree", 4)?;
        state.serialize_field("cliques", &self.cliques())?;
        state.serialize_field("edges", &self.edges())?;
        state.serialize_field("separators", &self.separators())?;
        state.serialize_field("params_hash", &self.params_hash)?;
        state.end()
    }
}
