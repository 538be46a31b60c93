//! Frame construction for drawing backends.

use crate::graph::causality::CausalGraph;
use crate::layout::engine::Layout;
use crate::model::event::{Event, EventId};
use kurbo::{Arc, Line, Point, Rect, Size, Vec2};
use std::f64::consts::PI;

const MARKER_OFFSET_Y: f64 = 10.0;
const TEXT_INSET_X: f64 = 10.0;
const TEXT_INSET_Y: f64 = 30.0;
const LABEL_BASELINE: f64 = 30.0;
const ARC_CENTER_DROP: f64 = 20.0;
const ARROW_OFFSET_Y: f64 = 12.0;
const ARROW_SIZE: f64 = 12.0;

/// Outlined marker with its description.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBox {
    pub id: EventId,
    pub rect: Rect,
    pub text: String,
    pub text_origin: Point,
}

/// Date text drawn beside the axis at the start of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct DateLabel {
    pub text: String,
    pub origin: Point,
}

/// Visual for one causal edge: an arc plus an arrowhead at the effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub cause: EventId,
    pub effect: EventId,
    /// Both events share a date row.
    pub same_row: bool,
    pub arc: Arc,
    pub arrowhead: [Point; 3],
}

impl Connector {
    /// Builds the connector between two placed markers.
    ///
    /// Same-row edges arc between the markers on the half-circle from
    /// angle π to 2π; cross-row edges use the half-circle from π/2 to 3π/2,
    /// toward the axis side.
    pub fn between(cause: &Event, effect: &Event) -> Self {
        let from = cause.position();
        let to = effect.position();
        let same_row = cause.date == effect.date;
        let center = Point::new(
            (to.x + from.x) / 2.0,
            (to.y + ARC_CENTER_DROP + from.y) / 2.0,
        );
        let (radius, start_angle) = if same_row {
            ((to.x - from.x).abs() / 2.0, PI)
        } else {
            ((to.y - from.y).abs() / 2.0, 0.5 * PI)
        };
        let tip = Point::new(to.x, to.y + ARROW_OFFSET_Y);

        Self {
            cause: cause.id,
            effect: effect.id,
            same_row,
            arc: Arc {
                center,
                radii: Vec2::new(radius, radius),
                start_angle,
                sweep_angle: PI,
                x_rotation: 0.0,
            },
            arrowhead: [
                tip,
                Point::new(tip.x - ARROW_SIZE, tip.y),
                Point::new(tip.x, tip.y - ARROW_SIZE),
            ],
        }
    }
}

/// Everything a backend needs to draw one timeline state.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub canvas: Size,
    pub axis: Line,
    pub events: Vec<EventBox>,
    pub date_labels: Vec<DateLabel>,
    pub connectors: Vec<Connector>,
}

/// Backend seam; implementations own pixels and fonts.
pub trait Renderer {
    /// Redraws the full frame.
    fn draw(&mut self, frame: &Frame);

    /// Draws one live gesture feedback segment.
    fn segment(&mut self, line: Line);
}

/// Assembles a frame from placed `events`, their `layout` and `graph`.
pub fn build_frame(events: &[Event], graph: &CausalGraph, layout: &Layout, canvas: Size) -> Frame {
    let boxes = events
        .iter()
        .map(|event| {
            let origin = event.position();
            EventBox {
                id: event.id,
                rect: Rect::from_origin_size(
                    Point::new(origin.x, origin.y + MARKER_OFFSET_Y),
                    event.size(),
                ),
                text: event.description.clone(),
                text_origin: origin + Vec2::new(TEXT_INSET_X, TEXT_INSET_Y),
            }
        })
        .collect();

    let date_labels = layout
        .rows
        .iter()
        .map(|row| DateLabel {
            text: row.label.clone(),
            origin: Point::new(row.label_x, row.y + LABEL_BASELINE),
        })
        .collect();

    let find = |id: EventId| events.iter().find(|event| event.id == id);
    let connectors = graph
        .edges()
        .iter()
        .filter_map(|edge| Some(Connector::between(find(edge.cause)?, find(edge.effect)?)))
        .collect();

    Frame {
        canvas,
        axis: Line::new((layout.axis_x, 0.0), (layout.axis_x, canvas.height)),
        events: boxes,
        date_labels,
        connectors,
    }
}
