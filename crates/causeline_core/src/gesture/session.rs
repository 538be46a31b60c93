//! Drag session state machine.
//!
//! # Responsibility
//! - Move between `Idle` and `Dragging` on start/move/end/cancel signals.
//! - Hit-test every move sample and record newly touched markers.
//! - Produce feedback segments between consecutive raw pointer samples.
//!
//! # Invariants
//! - Moves while `Idle` are ignored.
//! - `end` and `cancel` always return the machine to `Idle`.

use crate::layout::engine::Placement;
use crate::layout::hit::hit_test;
use kurbo::{Line, Point};
use log::debug;
use std::collections::BTreeSet;

/// In-flight drag data.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Where the drag started; need not be on a marker.
    pub anchor: Point,
    /// Last raw pointer sample.
    pub last: Point,
    touched: Vec<usize>,
    touched_keys: BTreeSet<usize>,
}

impl DragSession {
    fn new(anchor: Point) -> Self {
        Self {
            anchor,
            last: anchor,
            touched: Vec::new(),
            touched_keys: BTreeSet::new(),
        }
    }

    /// Records `index` unless it was already touched this session.
    fn touch(&mut self, index: usize) -> bool {
        if !self.touched_keys.insert(index) {
            return false;
        }
        self.touched.push(index);
        true
    }

    /// Touched layout indices in touch order.
    pub fn touched(&self) -> &[usize] {
        &self.touched
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Gesture interpreter for one timeline view.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    state: GestureState,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a drag at `point`.
    ///
    /// Returns `true` when a stale session had to be discarded first.
    pub fn start(&mut self, point: Point) -> bool {
        let stale = self.is_dragging();
        if stale {
            debug!("event=gesture_restart module=gesture status=discarded");
        }
        self.state = GestureState::Dragging(DragSession::new(point));
        stale
    }

    /// Feeds one pointer sample.
    ///
    /// Returns the feedback segment from the previous sample, or `None` when
    /// no drag is active.
    pub fn move_to(&mut self, point: Point, placements: &[Placement]) -> Option<Line> {
        let GestureState::Dragging(session) = &mut self.state else {
            return None;
        };
        if let Some(index) = hit_test(placements, point) {
            if session.touch(index) {
                debug!("event=gesture_touch module=gesture status=ok index={index}");
            }
        }
        let segment = Line::new(session.last, point);
        session.last = point;
        Some(segment)
    }

    /// Finishes the drag and hands back the touched indices.
    ///
    /// Returns an empty list when no drag was active.
    pub fn end(&mut self) -> Vec<usize> {
        match std::mem::take(&mut self.state) {
            GestureState::Dragging(session) => session.touched,
            GestureState::Idle => Vec::new(),
        }
    }

    /// Abandons the drag without committing anything.
    ///
    /// Returns `true` when a drag was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = GestureState::Idle;
        was_dragging
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Touched indices of the active drag; empty when idle.
    pub fn touched(&self) -> &[usize] {
        match &self.state {
            GestureState::Dragging(session) => session.touched(),
            GestureState::Idle => &[],
        }
    }
}
