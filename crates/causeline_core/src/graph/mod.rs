//! Causal relationships between timeline events.
//!
//! # Invariants
//! - Each directed edge is stored once; both adjacency directions are derived.

pub mod causality;
