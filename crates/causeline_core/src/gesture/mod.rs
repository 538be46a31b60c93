//! Pointer-drag gestures that author causal edges.
//!
//! # Responsibility
//! - Track one drag session as an explicit state machine.
//! - Turn the ordered set of touched markers into cause -> effect pairs.
//!
//! # Invariants
//! - Session state is fully reset on end, cancel, or a restarted drag.
//! - Touched markers are keyed by layout index; a re-touch is ignored.

pub mod chain;
pub mod session;
