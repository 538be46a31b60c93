//! Event domain model.
//!
//! # Responsibility
//! - Define the dated, described record placed on the timeline.
//! - Parse user date input at the input boundary.
//! - Provide the three-way date comparison used for ordering and row grouping.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `date` has day granularity; time-of-day is discarded at parse time.
//! - `position` and `size` are written only by the layout pass.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one timeline event.
pub type EventId = Uuid;

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
const LONG_DATE_FORMAT: &str = "%B %d, %Y";
const LABEL_DATE_FORMAT: &str = "%a, %d %b %Y";

/// Date input rejected at the form boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Input was empty or whitespace only.
    Empty,
    /// Input did not match any accepted date format.
    Unparseable(String),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "event date must not be empty"),
            Self::Unparseable(input) => write!(f, "unparseable event date: `{input}`"),
        }
    }
}

impl Error for DateError {}

/// Result of comparing two possibly-missing dates.
///
/// `Incomparable` is returned when either side is missing. Callers must not
/// map it onto one of the ordered variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateComparison {
    Less,
    Equal,
    Greater,
    Incomparable,
}

impl DateComparison {
    /// Converts into a total ordering, or `None` when incomparable.
    pub fn into_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Incomparable => None,
        }
    }
}

/// Compares `left` against `right` by calendar day.
pub fn compare_dates(left: Option<NaiveDate>, right: Option<NaiveDate>) -> DateComparison {
    match (left, right) {
        (Some(left), Some(right)) => match left.cmp(&right) {
            Ordering::Less => DateComparison::Less,
            Ordering::Equal => DateComparison::Equal,
            Ordering::Greater => DateComparison::Greater,
        },
        _ => DateComparison::Incomparable,
    }
}

/// Parses a user-supplied event date.
///
/// Accepted forms:
/// - `1995-12-17` (date input value)
/// - `1995-12-17T08:30:00Z` (RFC 3339; normalized to UTC, time dropped)
/// - `December 17, 1995`
///
/// # Errors
/// - `DateError::Empty` for blank input.
/// - `DateError::Unparseable` when no format matches.
pub fn parse_event_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::Empty);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, INPUT_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, LONG_DATE_FORMAT) {
        return Ok(date);
    }
    Err(DateError::Unparseable(trimmed.to_string()))
}

/// Formats a date the way a date input field expects it (`YYYY-MM-DD`).
///
/// Years are zero-padded to four digits.
pub fn input_date_string(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Formats the row label drawn next to the timeline axis.
pub fn timeline_label(date: NaiveDate) -> String {
    date.format(LABEL_DATE_FORMAT).to_string()
}

/// A dated, described point on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable ID used by causal edges and selection.
    pub id: EventId,
    /// Free-text label rendered inside the marker.
    pub description: String,
    /// Calendar day used for ordering and row grouping.
    pub date: NaiveDate,
    position: Point,
    size: Size,
}

impl Event {
    /// Creates an unplaced event with a generated stable ID.
    pub fn new(description: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), description, date)
    }

    /// Creates an unplaced event with a caller-provided ID.
    pub fn with_id(id: EventId, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            description: description.into(),
            date,
            position: Point::ZERO,
            size: Size::ZERO,
        }
    }

    /// Top-left corner assigned by the last layout pass.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Marker size assigned by the last layout pass.
    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn place(&mut self, position: Point, size: Size) {
        self.position = position;
        self.size = size;
    }

    /// Edit-field value for this event's date.
    pub fn input_date_string(&self) -> String {
        input_date_string(self.date)
    }
}
