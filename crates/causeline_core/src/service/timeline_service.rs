//! Timeline use-case service.
//!
//! # Responsibility
//! - Own all state of one timeline view: events, edges, layout, selection
//!   and the gesture session.
//! - Expose form, selection and pointer entry points for UI adapters.
//! - Recompute layout synchronously after every mutation.
//!
//! # Invariants
//! - Date input is parsed before any state is touched.
//! - Deleting an event removes every edge that references it.
//! - Layout always matches the current event order when a call returns.
//! - Selection is tracked by `EventId`, so it survives re-sorting.
//! - A drag commits edges only between events it actually touched, even when
//!   the store changes before the drag ends.

use crate::gesture::chain::chain_edges;
use crate::gesture::session::GestureInterpreter;
use crate::graph::causality::{CausalEdge, CausalGraph, EdgeInsert};
use crate::layout::engine::{
    compute_layout, validate_canvas, Layout, LayoutConfig, LayoutConfigError, MonospaceMeasure,
    TextMeasure,
};
use crate::layout::hit::hit_test;
use crate::model::event::{parse_event_date, DateError, Event, EventId};
use crate::render::plan::{build_frame, Frame, Renderer};
use crate::store::event_store::{EventStore, StoreError};
use chrono::NaiveDate;
use kurbo::{Line, Point, Size};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEMO_EVENTS: [(&str, &str); 4] = [
    ("test1", "1995-12-17"),
    ("test2", "1996-12-17"),
    ("test3", "1995-12-17"),
    ("test4", "1997-12-17"),
];

/// Errors from timeline service operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// Date input rejected at the boundary.
    InvalidDate(DateError),
    /// Store-level failure (bad index, incomparable dates).
    Store(StoreError),
    /// Layout config or canvas is unusable.
    Config(LayoutConfigError),
}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TimelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<DateError> for TimelineError {
    fn from(value: DateError) -> Self {
        Self::InvalidDate(value)
    }
}

impl From<StoreError> for TimelineError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<LayoutConfigError> for TimelineError {
    fn from(value: LayoutConfigError) -> Self {
        Self::Config(value)
    }
}

/// Raw pointer signal from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Button pressed; begins a drag.
    Down(Point),
    /// Pointer moved.
    Move(Point),
    /// Button released; commits the drag.
    Up,
    /// Pointer capture lost; drops the drag.
    Cancel,
    /// Single click used for selection.
    Click(Point),
}

/// What one dispatched input did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    /// Input had no effect (e.g. move while idle).
    Ignored,
    /// A drag session began.
    Started,
    /// Live feedback segment for the renderer.
    Segment(Line),
    /// A drag ended; `added` new edges were recorded.
    Committed { added: usize },
    /// A drag was dropped without edges.
    Cancelled,
    /// Click selection result.
    Selected(Option<EventId>),
}

/// One timeline view and all of its state.
///
/// Created per view and dropped when the view closes.
pub struct Timeline {
    canvas: Size,
    config: LayoutConfig,
    measure: Box<dyn TextMeasure>,
    store: EventStore,
    graph: CausalGraph,
    layout: Layout,
    gesture: GestureInterpreter,
    /// Events touched by the active drag, resolved at hit time.
    drag_touched: Vec<EventId>,
    selected: Option<EventId>,
}

impl Timeline {
    /// Creates an empty timeline.
    ///
    /// # Errors
    /// - `TimelineError::Config` when `config` or `canvas` fails validation.
    pub fn new(
        canvas: Size,
        config: LayoutConfig,
        measure: Box<dyn TextMeasure>,
    ) -> Result<Self, TimelineError> {
        config.validate()?;
        validate_canvas(canvas)?;

        let mut timeline = Self {
            canvas,
            config,
            measure,
            store: EventStore::new(),
            graph: CausalGraph::new(),
            layout: Layout::default(),
            gesture: GestureInterpreter::new(),
            drag_touched: Vec::new(),
            selected: None,
        };
        timeline.relayout();
        info!(
            "event=timeline_open module=timeline status=ok width={} height={}",
            canvas.width, canvas.height
        );
        Ok(timeline)
    }

    /// Creates a timeline with default config and monospace text metrics.
    pub fn with_defaults(canvas: Size) -> Result<Self, TimelineError> {
        Self::new(
            canvas,
            LayoutConfig::default(),
            Box::new(MonospaceMeasure::default()),
        )
    }

    /// Creates a default timeline seeded with the four sample events.
    pub fn demo(canvas: Size) -> Result<Self, TimelineError> {
        let mut timeline = Self::with_defaults(canvas)?;
        for (description, date) in DEMO_EVENTS {
            timeline.add_event(description, date)?;
        }
        Ok(timeline)
    }

    /// Adds an event from form input.
    ///
    /// # Errors
    /// - `TimelineError::InvalidDate` when `date_input` does not parse; the
    ///   timeline is left unchanged.
    pub fn add_event(
        &mut self,
        description: impl Into<String>,
        date_input: &str,
    ) -> Result<EventId, TimelineError> {
        let date = parse_event_date(date_input).inspect_err(|err| {
            warn!("event=event_add module=timeline status=rejected reason=\"{err}\"");
        })?;
        Ok(self.add_event_on(description, date))
    }

    /// Adds an event with an already-validated date.
    pub fn add_event_on(&mut self, description: impl Into<String>, date: NaiveDate) -> EventId {
        let id = self.store.add(description, date);
        self.relayout();
        info!(
            "event=event_add module=timeline status=ok index={} total={}",
            self.store.index_of(id).unwrap_or_default(),
            self.store.len()
        );
        id
    }

    /// Rewrites the event at `index` and re-sorts. Edges are kept.
    ///
    /// # Errors
    /// - `TimelineError::InvalidDate` for bad date input.
    /// - `TimelineError::Store` when `index` is out of range.
    pub fn update_event(
        &mut self,
        index: usize,
        description: impl Into<String>,
        date_input: &str,
    ) -> Result<EventId, TimelineError> {
        let date = parse_event_date(date_input)?;
        let id = self.store.update(index, description, date)?;
        self.relayout();
        info!(
            "event=event_update module=timeline status=ok from_index={index} to_index={}",
            self.store.index_of(id).unwrap_or_default()
        );
        Ok(id)
    }

    /// Deletes the event at `index` together with its edges.
    ///
    /// # Errors
    /// - `TimelineError::Store` when `index` is out of range.
    pub fn remove_event(&mut self, index: usize) -> Result<Event, TimelineError> {
        let event = self.store.remove(index)?;
        let scrubbed = self.graph.remove_event(event.id);
        if self.selected == Some(event.id) {
            self.selected = None;
        }
        self.relayout();
        info!(
            "event=event_remove module=timeline status=ok index={index} edges_removed={scrubbed} total={}",
            self.store.len()
        );
        Ok(event)
    }

    /// Selects the first marker under `point`; a miss clears the selection.
    pub fn select_at(&mut self, point: Point) -> Option<EventId> {
        self.selected = hit_test(&self.layout.placements, point)
            .and_then(|index| self.store.get(index))
            .map(|event| event.id);
        debug!(
            "event=select module=timeline status={}",
            if self.selected.is_some() { "hit" } else { "miss" }
        );
        self.selected
    }

    pub fn selected(&self) -> Option<&Event> {
        let id = self.selected?;
        self.store.iter().find(|event| event.id == id)
    }

    /// Description and date-input text of the selected event.
    pub fn selected_fields(&self) -> Option<(String, String)> {
        self.selected()
            .map(|event| (event.description.clone(), event.input_date_string()))
    }

    /// Applies edit-form input to the selected event.
    ///
    /// Returns `Ok(false)` when nothing is selected.
    ///
    /// # Errors
    /// - `TimelineError::InvalidDate` for bad date input, checked first.
    pub fn edit_selected(
        &mut self,
        description: impl Into<String>,
        date_input: &str,
    ) -> Result<bool, TimelineError> {
        let date = parse_event_date(date_input)?;
        let Some(index) = self.selected.and_then(|id| self.store.index_of(id)) else {
            return Ok(false);
        };
        let id = self.store.update(index, description, date)?;
        self.relayout();
        info!(
            "event=event_edit module=timeline status=ok from_index={index} to_index={}",
            self.store.index_of(id).unwrap_or_default()
        );
        Ok(true)
    }

    /// Deletes the selected event. Returns `false` when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(index) = self.selected.and_then(|id| self.store.index_of(id)) else {
            return false;
        };
        self.remove_event(index).is_ok()
    }

    pub fn pointer_down(&mut self, point: Point) {
        self.gesture.start(point);
        self.drag_touched.clear();
    }

    /// Feeds a drag sample; returns the feedback segment while dragging.
    ///
    /// Newly touched markers are resolved to their event at hit time.
    pub fn pointer_move(&mut self, point: Point) -> Option<Line> {
        let before = self.gesture.touched().len();
        let segment = self.gesture.move_to(point, &self.layout.placements)?;
        let touched = self.gesture.touched();
        if touched.len() > before {
            let hit = touched[touched.len() - 1];
            if let Some(event) = self.store.get(hit) {
                if !self.drag_touched.contains(&event.id) {
                    self.drag_touched.push(event.id);
                }
            }
        }
        Some(segment)
    }

    /// Ends the drag and records the chained edges. Returns edges added.
    ///
    /// Only edges change; layout is left as is and `frame` reflects the new
    /// connectors.
    pub fn pointer_up(&mut self) -> usize {
        if !self.gesture.is_dragging() {
            return 0;
        }
        self.gesture.end();
        let touched = std::mem::take(&mut self.drag_touched);
        let added = self.commit_chain(&touched);
        info!(
            "event=gesture_commit module=timeline status=ok touched={} edges_added={added}",
            touched.len()
        );
        added
    }

    /// Drops the drag without recording edges.
    pub fn pointer_cancel(&mut self) -> bool {
        let cancelled = self.gesture.cancel();
        self.drag_touched.clear();
        if cancelled {
            debug!("event=gesture_cancel module=timeline status=ok");
        }
        cancelled
    }

    /// Single input dispatch loop entry.
    pub fn dispatch(&mut self, input: PointerInput) -> InputOutcome {
        match input {
            PointerInput::Down(point) => {
                self.pointer_down(point);
                InputOutcome::Started
            }
            PointerInput::Move(point) => self
                .pointer_move(point)
                .map_or(InputOutcome::Ignored, InputOutcome::Segment),
            PointerInput::Up => {
                if !self.gesture.is_dragging() {
                    return InputOutcome::Ignored;
                }
                InputOutcome::Committed {
                    added: self.pointer_up(),
                }
            }
            PointerInput::Cancel => {
                if self.pointer_cancel() {
                    InputOutcome::Cancelled
                } else {
                    InputOutcome::Ignored
                }
            }
            PointerInput::Click(point) => InputOutcome::Selected(self.select_at(point)),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    fn commit_chain(&mut self, touched: &[EventId]) -> usize {
        let mut added = 0;
        for (cause, effect) in chain_edges(touched) {
            if !self.store.contains(cause) || !self.store.contains(effect) {
                debug!("event=gesture_commit module=timeline status=skipped reason=unknown_event");
                continue;
            }
            if self.graph.add_edge(cause, effect) == EdgeInsert::Added {
                added += 1;
            }
        }
        added
    }

    /// Switches to a new canvas size and relays out.
    ///
    /// # Errors
    /// - `TimelineError::Config` for an unusable canvas; the old one is kept.
    pub fn resize(&mut self, canvas: Size) -> Result<(), TimelineError> {
        validate_canvas(canvas)?;
        self.canvas = canvas;
        self.relayout();
        Ok(())
    }

    fn relayout(&mut self) {
        self.layout = compute_layout(
            self.store.as_slice(),
            self.canvas,
            &self.config,
            self.measure.as_ref(),
        );
        for (event, placement) in self.store.iter_mut().zip(&self.layout.placements) {
            event.place(placement.position, placement.size);
        }
    }

    pub fn frame(&self) -> Frame {
        build_frame(self.store.as_slice(), &self.graph, &self.layout, self.canvas)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw(&self.frame());
    }

    pub fn events(&self) -> &[Event] {
        self.store.as_slice()
    }

    pub fn edges(&self) -> &[CausalEdge] {
        self.graph.edges()
    }

    pub fn causes_of(&self, id: EventId) -> Vec<EventId> {
        self.graph.causes_of(id)
    }

    pub fn effects_of(&self, id: EventId) -> Vec<EventId> {
        self.graph.effects_of(id)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}
