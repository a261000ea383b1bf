//! Vertex-ordering policy definitions.

pub mod elimination;

pub use elimination::{DisconnectedPolicy, EliminationPolicy};
