//! Clique type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::vertex::Vertex;
use crate::cliques::is_subset;

/// Complete subgraph of a chordal graph, as a sorted set of vertex keys.
///
/// Members are sorted and deduplicated on construction, so two cliques are
/// equal exactly when they hold the same members.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clique<V>(Vec<V>);

impl<V: Vertex> Clique<V> {
    /// Create a clique from any collection of members.
    pub fn new<I: IntoIterator<Item = V>>(members: I) -> Self {
        let mut members: Vec<V> = members.into_iter().collect();
        members.sort();
        members.dedup();
        Self(members)
    }

    /// Members in ascending order.
    pub fn members(&self) -> &[V] {
        &self.0
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the clique has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `v` is a member.
    pub fn contains(&self, v: &V) -> bool {
        self.0.binary_search(v).is_ok()
    }

    /// Members shared with `other`, ascending.
    pub fn intersection(&self, other: &Self) -> Vec<V> {
        let (mut i, mut j) = (0, 0);
        let mut shared = Vec::new();
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].cmp(&other.0[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared.push(self.0[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }

    /// Number of members shared with `other`.
    pub fn overlap(&self, other: &Self) -> usize {
        self.0.iter().filter(|v| other.contains(v)).count()
    }

    /// Whether every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        is_subset(&self.0, &other.0)
    }
}

impl<V: fmt::Debug> fmt::Display for Clique<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v:?}")?;
        }
        write!(f, ")")
    }
}
