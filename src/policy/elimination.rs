//! EliminationPolicy: how the vertex order for triangulation and clique
//! extraction is chosen.
//!
//! ## Ordering
//!
//! With `reorder` set, the caller's vertex order is replaced by a
//! breadth-first order rooted at the first vertex. Without it the caller's
//! insertion order is used as-is, which is what the exact-order scenarios
//! rely on.
//!
//! ## Disconnected inputs
//!
//! A single breadth-first search only covers one component.
//! `DisconnectedPolicy` decides whether that is an error or whether the
//! search restarts from the next unvisited vertex.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::traversal::bfs_cover;
use crate::types::{GraphError, VertexId};
use crate::DEFAULT_POLICY_VERSION;

/// What breadth-first reordering does when it cannot reach every vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisconnectedPolicy {
    /// Fail with [`GraphError::Disconnected`].
    Reject,
    /// Restart from the first unvisited vertex in caller order.
    #[default]
    PerComponent,
}

impl std::fmt::Display for DisconnectedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::PerComponent => write!(f, "per_component"),
        }
    }
}

/// Elimination policy version 1.
///
/// ## Parameters
///
/// - `reorder`: replace caller order with breadth-first order
/// - `disconnected`: behaviour when breadth-first order misses vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationPolicy {
    /// Policy version identifier.
    pub version: String,
    /// Whether to reorder vertices breadth-first before eliminating.
    pub reorder: bool,
    /// Handling of vertices unreachable from the first vertex.
    pub disconnected: DisconnectedPolicy,
}

impl EliminationPolicy {
    /// Create a policy with explicit parameters.
    pub fn new(reorder: bool, disconnected: DisconnectedPolicy) -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION.to_string(),
            reorder,
            disconnected,
        }
    }

    /// Keep the caller's vertex order.
    pub fn in_order() -> Self {
        Self::new(false, DisconnectedPolicy::PerComponent)
    }

    /// Breadth-first order that refuses disconnected graphs.
    pub fn strict() -> Self {
        Self::new(true, DisconnectedPolicy::Reject)
    }

    /// Get the policy ID.
    pub fn policy_id(&self) -> &str {
        &self.version
    }

    /// Hash of the policy parameters.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(self)
    }

    /// Resolve the vertex order this policy prescribes.
    ///
    /// `caller` is the graph's insertion order; `neighbors` reads the
    /// current adjacency.
    pub fn resolve<'a, F>(&self, caller: &[VertexId], neighbors: F) -> Result<Vec<VertexId>, GraphError>
    where
        F: Fn(VertexId) -> &'a [VertexId],
    {
        if self.reorder {
            bfs_cover(caller, neighbors, self.disconnected)
        } else {
            Ok(caller.to_vec())
        }
    }
}

impl Default for EliminationPolicy {
    fn default() -> Self {
        Self::new(true, DisconnectedPolicy::default())
    }
}
