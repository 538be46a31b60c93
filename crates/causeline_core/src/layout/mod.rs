//! Positional bookkeeping for timeline events.
//!
//! # Responsibility
//! - Map the ordered event sequence onto 2D positions and sizes.
//! - Answer point-in-marker queries against the latest layout.
//!
//! # Invariants
//! - Layout is a pure function of events, canvas, config and text metrics.
//! - Layout performs no causal reasoning.

pub mod engine;
pub mod hit;
