//! Ordered in-memory event store.
//!
//! # Responsibility
//! - Insert, mutate and delete events while keeping chronological order.
//! - Expose index-based access matching the current layout order.
//!
//! # Invariants
//! - After every write, events are sorted ascending by `date`.
//! - Sorting is stable: equal dates keep their relative insertion order.
//! - Indices are only meaningful until the next write.

use crate::model::event::{compare_dates, Event, EventId};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by event store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Index does not address a stored event.
    IndexOutOfRange { index: usize, len: usize },
    /// One side of a date comparison had no date.
    IncomparableDates,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "event index {index} out of range for {len} events")
            }
            Self::IncomparableDates => write!(f, "cannot order events without a date"),
        }
    }
}

impl Error for StoreError {}

/// Chronologically ordered event sequence.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new event after every event dated on or before `date`.
    ///
    /// Returns the created event ID.
    pub fn add(&mut self, description: impl Into<String>, date: NaiveDate) -> EventId {
        self.insert(Event::new(description, date))
    }

    /// Inserts a pre-built event at its chronological position.
    pub fn insert(&mut self, event: Event) -> EventId {
        let id = event.id;
        let index = self.events.partition_point(|existing| existing.date <= event.date);
        self.events.insert(index, event);
        id
    }

    /// Rewrites description and date of the event at `index`, then re-sorts.
    ///
    /// Returns the ID of the updated event; its index may have changed.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange` when `index` is not a stored event.
    pub fn update(
        &mut self,
        index: usize,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> StoreResult<EventId> {
        let len = self.events.len();
        let event = self
            .events
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        event.description = description.into();
        event.date = date;
        let id = event.id;

        // `sort_by_key` is stable, so unchanged events keep their tie order.
        self.events.sort_by_key(|event| event.date);
        Ok(id)
    }

    /// Deletes and returns the event at `index`.
    ///
    /// # Errors
    /// - `StoreError::IndexOutOfRange` when `index` is not a stored event.
    pub fn remove(&mut self, index: usize) -> StoreResult<Event> {
        if index >= self.events.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.events.len(),
            });
        }
        Ok(self.events.remove(index))
    }

    /// Three-way date comparison between two stored positions.
    ///
    /// # Errors
    /// - `StoreError::IncomparableDates` when either index has no event.
    pub fn compare(&self, left: usize, right: usize) -> StoreResult<Ordering> {
        let left = self.events.get(left).map(|event| event.date);
        let right = self.events.get(right).map(|event| event.date);
        compare_dates(left, right)
            .into_ordering()
            .ok_or(StoreError::IncomparableDates)
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn index_of(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Event> {
        self.events.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
