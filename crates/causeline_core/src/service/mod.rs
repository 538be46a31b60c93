//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, graph, layout and gesture calls into view-level APIs.
//! - Keep UI adapters decoupled from internal bookkeeping.

pub mod timeline_service;
