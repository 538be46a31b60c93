//! Deterministic timeline layout.
//!
//! # Responsibility
//! - Place each event on a date row to the right of the timeline axis.
//! - Derive marker sizes from measured description text.
//!
//! # Invariants
//! - Same events + canvas + config + measure always yield the same `Layout`.
//! - Events with equal dates share one row, fanned out by `horizontal_step`.
//! - A date change starts a new row `vertical_step` below the previous one.

use crate::model::event::{compare_dates, timeline_label, DateComparison, Event};
use chrono::NaiveDate;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_MONOSPACE_ADVANCE: f64 = 7.0;

/// Tunable layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Timeline axis x as a fraction of canvas width.
    pub axis_fraction: f64,
    /// Row origin x as a fraction of canvas width.
    pub row_origin_fraction: f64,
    pub top_margin: f64,
    pub horizontal_step: f64,
    pub vertical_step: f64,
    /// Date label offset to the right of the axis.
    pub label_offset: f64,
    /// Added to the measured description width.
    pub text_padding: f64,
    pub event_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            axis_fraction: 0.20,
            row_origin_fraction: 0.50,
            top_margin: 30.0,
            horizontal_step: 70.0,
            vertical_step: 70.0,
            label_offset: 10.0,
            text_padding: 20.0,
            event_height: 40.0,
        }
    }
}

/// Layout configuration or canvas rejected before use.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutConfigError {
    /// Fraction field outside `[0, 1]` or not finite.
    InvalidFraction { field: &'static str, value: f64 },
    /// Step/size field that must be strictly positive.
    NonPositive { field: &'static str, value: f64 },
    /// Offset field that must be finite.
    NonFinite { field: &'static str, value: f64 },
    /// Canvas dimensions must be finite and positive.
    InvalidCanvas { width: f64, height: f64 },
}

impl Display for LayoutConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFraction { field, value } => {
                write!(f, "layout `{field}` must be within [0, 1], got {value}")
            }
            Self::NonPositive { field, value } => {
                write!(f, "layout `{field}` must be positive, got {value}")
            }
            Self::NonFinite { field, value } => {
                write!(f, "layout `{field}` must be finite, got {value}")
            }
            Self::InvalidCanvas { width, height } => {
                write!(f, "canvas must be positive and finite, got {width}x{height}")
            }
        }
    }
}

impl Error for LayoutConfigError {}

impl LayoutConfig {
    /// Checks every field for a usable value.
    ///
    /// # Errors
    /// - Returns the first offending field.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        for (field, value) in [
            ("axis_fraction", self.axis_fraction),
            ("row_origin_fraction", self.row_origin_fraction),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LayoutConfigError::InvalidFraction { field, value });
            }
        }
        for (field, value) in [
            ("horizontal_step", self.horizontal_step),
            ("vertical_step", self.vertical_step),
            ("event_height", self.event_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("top_margin", self.top_margin),
            ("label_offset", self.label_offset),
            ("text_padding", self.text_padding),
        ] {
            if !value.is_finite() {
                return Err(LayoutConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }
}

/// Rejects canvases that cannot host a layout.
pub fn validate_canvas(canvas: Size) -> Result<(), LayoutConfigError> {
    let usable = |value: f64| value.is_finite() && value > 0.0;
    if usable(canvas.width) && usable(canvas.height) {
        Ok(())
    } else {
        Err(LayoutConfigError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        })
    }
}

/// Text metrics provider owned by the drawing side.
pub trait TextMeasure {
    /// Rendered width of `text` in canvas units.
    fn text_width(&self, text: &str) -> f64;
}

/// Fixed-advance measure used when no real font metrics are available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: DEFAULT_MONOSPACE_ADVANCE,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance
    }
}

/// Computed marker geometry for one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Point,
    pub size: Size,
}

impl Placement {
    /// Hit box spanning `[x, x + width] x [y, y + height]`.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// One date row and the label drawn beside the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRow {
    pub date: NaiveDate,
    pub y: f64,
    pub label_x: f64,
    pub label: String,
}

/// Full layout result; `placements[i]` belongs to the i-th ordered event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub axis_x: f64,
    pub placements: Vec<Placement>,
    pub rows: Vec<DateRow>,
}

/// Lays out chronologically ordered `events` on `canvas`.
///
/// `events` must already be sorted; the store guarantees this.
pub fn compute_layout(
    events: &[Event],
    canvas: Size,
    config: &LayoutConfig,
    measure: &dyn TextMeasure,
) -> Layout {
    let axis_x = canvas.width * config.axis_fraction;
    let row_origin = canvas.width * config.row_origin_fraction;
    let label_x = axis_x + config.label_offset;

    let mut cursor = Point::new(row_origin, config.top_margin);
    let mut placements = Vec::with_capacity(events.len());
    let mut rows = Vec::new();
    let mut previous: Option<NaiveDate> = None;

    for (index, event) in events.iter().enumerate() {
        let starts_row = match compare_dates(Some(event.date), previous) {
            DateComparison::Equal => {
                cursor.x += config.horizontal_step;
                false
            }
            DateComparison::Less | DateComparison::Greater => {
                cursor.x = row_origin;
                cursor.y += config.vertical_step;
                true
            }
            // Only the first event lacks a predecessor.
            DateComparison::Incomparable => index == 0,
        };

        if starts_row {
            rows.push(DateRow {
                date: event.date,
                y: cursor.y,
                label_x,
                label: timeline_label(event.date),
            });
        }

        let width = measure.text_width(event.description.as_str()) + config.text_padding;
        placements.push(Placement {
            position: cursor,
            size: Size::new(width, config.event_height),
        });
        previous = Some(event.date);
    }

    Layout {
        axis_x,
        placements,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_layout, LayoutConfig, LayoutConfigError, MonospaceMeasure};
    use crate::model::event::Event;
    use chrono::NaiveDate;
    use kurbo::Size;

    fn event(description: &str, date: &str) -> Event {
        Event::new(description, NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap())
    }

    #[test]
    fn first_event_sits_at_row_origin_and_top_margin() {
        let events = vec![event("abc", "2000-01-01")];
        let layout = compute_layout(
            &events,
            Size::new(1000.0, 800.0),
            &LayoutConfig::default(),
            &MonospaceMeasure::default(),
        );

        assert_eq!(layout.axis_x, 200.0);
        assert_eq!(layout.placements[0].position.x, 500.0);
        assert_eq!(layout.placements[0].position.y, 30.0);
        assert_eq!(layout.placements[0].size, Size::new(3.0 * 7.0 + 20.0, 40.0));
        assert_eq!(layout.rows.len(), 1);
        assert_eq!(layout.rows[0].label, "Sat, 01 Jan 2000");
        assert_eq!(layout.rows[0].label_x, 210.0);
    }

    #[test]
    fn empty_sequence_yields_only_axis() {
        let layout = compute_layout(
            &[],
            Size::new(500.0, 500.0),
            &LayoutConfig::default(),
            &MonospaceMeasure::default(),
        );
        assert!(layout.placements.is_empty());
        assert!(layout.rows.is_empty());
        assert_eq!(layout.axis_x, 100.0);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let config = LayoutConfig {
            axis_fraction: 1.5,
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(LayoutConfigError::InvalidFraction {
                field: "axis_fraction",
                value: 1.5
            })
        );

        let config = LayoutConfig {
            vertical_step: 0.0,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutConfigError::NonPositive {
                field: "vertical_step",
                ..
            })
        ));

        assert!(LayoutConfig::default().validate().is_ok());
    }
}
