//! Core domain logic for Causeline timelines.
//! This crate is the single source of truth for ordering, layout and
//! causal-edge invariants; drawing and form wiring live with the host.

pub mod gesture;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod store;

pub use gesture::chain::chain_edges;
pub use gesture::session::{DragSession, GestureInterpreter, GestureState};
pub use graph::causality::{CausalEdge, CausalGraph, EdgeInsert};
pub use layout::engine::{
    compute_layout, validate_canvas, DateRow, Layout, LayoutConfig, LayoutConfigError,
    MonospaceMeasure, Placement, TextMeasure,
};
pub use layout::hit::hit_test;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{
    compare_dates, input_date_string, parse_event_date, timeline_label, DateComparison,
    DateError, Event, EventId,
};
pub use render::plan::{build_frame, Connector, DateLabel, EventBox, Frame, Renderer};
pub use service::timeline_service::{InputOutcome, PointerInput, Timeline, TimelineError};
pub use store::event_store::{EventStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
