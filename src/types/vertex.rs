//! Vertex identifiers and the key arena shared by every graph container.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::error::GraphError;

/// Caller-supplied vertex key.
///
/// Anything hashable, totally ordered and printable qualifies; the graphs
/// never look inside a key beyond equality, hashing and ordering.
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Vertex for T {}

/// Dense index of a vertex inside one graph's arena.
///
/// Ids are only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    /// Create an id from a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interned vertex keys in insertion order.
#[derive(Debug, Clone)]
pub struct VertexArena<V> {
    keys: Vec<V>,
    index: HashMap<V, VertexId>,
}

impl<V: Vertex> VertexArena<V> {
    /// Intern keys, keeping the first occurrence of any duplicate.
    pub fn from_keys<I: IntoIterator<Item = V>>(keys: I) -> Self {
        let mut arena = Self {
            keys: Vec::new(),
            index: HashMap::new(),
        };
        for key in keys {
            if !arena.index.contains_key(&key) {
                arena.index.insert(key.clone(), VertexId(arena.keys.len()));
                arena.keys.push(key);
            }
        }
        arena
    }

    /// Resolve a key to its id.
    pub fn id(&self, key: &V) -> Result<VertexId, GraphError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::unknown(key))
    }

    /// Key stored under `id`.
    ///
    /// Panics if `id` was issued by another arena.
    pub fn key(&self, id: VertexId) -> &V {
        &self.keys[id.0]
    }

    /// All keys in insertion order.
    pub fn keys(&self) -> &[V] {
        &self.keys
    }

    /// All ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.keys.len()).map(VertexId)
    }

    /// Number of interned keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the arena holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Read access to an undirected adjacency structure by id.
pub trait Adjacency {
    /// Neighbours of `v` in insertion order.
    fn neighbors_of(&self, v: VertexId) -> &[VertexId];

    /// Whether `u` and `v` share an edge.
    fn is_linked(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors_of(u).contains(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_keys_keep_first_position() {
        let arena = VertexArena::from_keys(vec!["b", "a", "b", "c"]);
        assert_eq!(arena.keys(), &["b", "a", "c"]);
        assert_eq!(arena.id(&"c").unwrap(), VertexId::new(2));
    }

    #[test]
    fn test_unknown_key() {
        let arena = VertexArena::from_keys(vec![1, 2, 3]);
        assert_eq!(arena.id(&7), Err(GraphError::UnknownVertex("7".to_string())));
    }
}
