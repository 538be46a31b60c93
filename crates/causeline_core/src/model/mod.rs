//! Timeline domain model.
//!
//! # Responsibility
//! - Define the canonical event record shared by store, layout and gesture code.
//! - Own date parsing and date comparison rules.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - Every stored event carries a valid day-granularity date.

pub mod event;
