//! Event storage layer.
//!
//! # Responsibility
//! - Hold the timeline's events in chronological order.
//! - Report semantic errors (`IndexOutOfRange`, `IncomparableDates`) to callers.
//!
//! # Invariants
//! - Iteration order is ascending by date; equal dates keep insertion order.

pub mod event_store;
