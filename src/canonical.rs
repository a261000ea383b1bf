//! Stable hashes for elimination policies and junction trees.
//!
//! [`EliminationPolicy::params_hash`](crate::EliminationPolicy::params_hash)
//! and [`JunctionTree::fingerprint`](crate::JunctionTree::fingerprint) both go
//! through here. The value is serialized to JSON and hashed with xxh64.
//! Struct fields keep declaration order and cliques are already sorted, so
//! equal trees give equal bytes. Nothing hashed here may hold a `HashMap`.

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// xxh64 of the JSON form of `value`.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    let bytes = serde_json::to_vec(value).expect("fingerprinted values serialize to JSON");
    xxh64(&bytes, 0)
}

/// [`canonical_hash`] as 16 lowercase hex digits.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
