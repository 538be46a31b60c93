//! Drawing-side contract.
//!
//! # Responsibility
//! - Turn events, layout and edges into a backend-agnostic `Frame`.
//! - Define the `Renderer` seam implemented by drawing backends.
//!
//! # Invariants
//! - Renderers only consume frames; nothing flows back into core state.

pub mod plan;
