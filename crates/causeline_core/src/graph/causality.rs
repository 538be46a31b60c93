//! Directed cause -> effect edge set.
//!
//! # Responsibility
//! - Be the single source of truth for causal edges.
//! - Derive `causes` and `effects` adjacency on demand.
//!
//! # Invariants
//! - No duplicate edges and no self-loops.
//! - Edge order is insertion order; derived adjacency lists follow it.
//! - Removing an event drops every edge that references it.

use crate::model::event::EventId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One directed causal relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CausalEdge {
    pub cause: EventId,
    pub effect: EventId,
}

impl CausalEdge {
    pub fn new(cause: EventId, effect: EventId) -> Self {
        Self { cause, effect }
    }

    pub fn touches(&self, id: EventId) -> bool {
        self.cause == id || self.effect == id
    }
}

/// Outcome of an edge insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    Added,
    Duplicate,
    SelfLoop,
}

#[derive(Debug, Clone, Default)]
pub struct CausalGraph {
    edges: Vec<CausalEdge>,
    seen: HashSet<CausalEdge>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `cause -> effect` unless it already exists or is a self-loop.
    pub fn add_edge(&mut self, cause: EventId, effect: EventId) -> EdgeInsert {
        if cause == effect {
            return EdgeInsert::SelfLoop;
        }
        let edge = CausalEdge::new(cause, effect);
        if !self.seen.insert(edge) {
            return EdgeInsert::Duplicate;
        }
        self.edges.push(edge);
        EdgeInsert::Added
    }

    /// Drops every edge touching `id`. Returns how many were removed.
    pub fn remove_event(&mut self, id: EventId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        self.seen.retain(|edge| !edge.touches(id));
        before - self.edges.len()
    }

    /// Direct causal predecessors of `id`.
    pub fn causes_of(&self, id: EventId) -> Vec<EventId> {
        self.edges
            .iter()
            .filter(|edge| edge.effect == id)
            .map(|edge| edge.cause)
            .collect()
    }

    /// Direct causal successors of `id`.
    pub fn effects_of(&self, id: EventId) -> Vec<EventId> {
        self.edges
            .iter()
            .filter(|edge| edge.cause == id)
            .map(|edge| edge.effect)
            .collect()
    }

    pub fn contains(&self, cause: EventId, effect: EventId) -> bool {
        self.seen.contains(&CausalEdge::new(cause, effect))
    }

    pub fn edges(&self) -> &[CausalEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
