use causeline_core::{Event, EventStore, StoreError, Timeline, TimelineError};
use chrono::NaiveDate;
use kurbo::Size;
use uuid::Uuid;

fn day(input: &str) -> NaiveDate {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").unwrap()
}

fn descriptions(events: &[Event]) -> Vec<&str> {
    events.iter().map(|event| event.description.as_str()).collect()
}

#[test]
fn sample_dates_sort_with_stable_ties() {
    let timeline = Timeline::demo(Size::new(800.0, 600.0)).unwrap();

    assert_eq!(
        descriptions(timeline.events()),
        vec!["test1", "test3", "test2", "test4"]
    );
    let dates: Vec<String> = timeline
        .events()
        .iter()
        .map(Event::input_date_string)
        .collect();
    assert_eq!(
        dates,
        vec!["1995-12-17", "1995-12-17", "1996-12-17", "1997-12-17"]
    );
}

#[test]
fn iteration_order_matches_stable_sort_for_many_inserts() {
    let inputs = [
        ("a", "2001-05-01"),
        ("b", "1999-01-01"),
        ("c", "2001-05-01"),
        ("d", "1980-07-04"),
        ("e", "1999-01-01"),
        ("f", "2030-12-31"),
        ("g", "2001-05-01"),
    ];
    let mut store = EventStore::new();
    for (description, date) in inputs {
        store.add(description, day(date));
    }

    let mut expected: Vec<(&str, NaiveDate)> = inputs
        .iter()
        .map(|(description, date)| (*description, day(date)))
        .collect();
    expected.sort_by_key(|(_, date)| *date);

    let actual: Vec<(&str, NaiveDate)> = store
        .iter()
        .map(|event| (event.description.as_str(), event.date))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn insert_keeps_caller_identity() {
    let mut store = EventStore::new();
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let inserted = store.insert(Event::with_id(id, "imported", day("2010-01-01")));

    assert_eq!(inserted, id);
    assert_eq!(store.index_of(id), Some(0));
    assert!(store.contains(id));
}

#[test]
fn update_event_moves_event_to_new_date_slot() {
    let mut timeline = Timeline::demo(Size::new(800.0, 600.0)).unwrap();

    let id = timeline.update_event(0, "moved", "1996-12-17").unwrap();

    assert_eq!(
        descriptions(timeline.events()),
        vec!["test3", "moved", "test2", "test4"]
    );
    assert_eq!(timeline.events()[1].id, id);
}

#[test]
fn update_and_remove_reject_out_of_range_index() {
    let mut timeline = Timeline::demo(Size::new(800.0, 600.0)).unwrap();

    assert_eq!(
        timeline.update_event(9, "x", "2000-01-01").unwrap_err(),
        TimelineError::Store(StoreError::IndexOutOfRange { index: 9, len: 4 })
    );
    assert!(matches!(
        timeline.remove_event(4),
        Err(TimelineError::Store(StoreError::IndexOutOfRange { .. }))
    ));
    assert_eq!(timeline.events().len(), 4);
}

#[test]
fn update_with_bad_date_changes_nothing() {
    let mut timeline = Timeline::demo(Size::new(800.0, 600.0)).unwrap();
    let before = timeline.events().to_vec();

    assert!(matches!(
        timeline.update_event(0, "renamed", "17/12/1995"),
        Err(TimelineError::InvalidDate(_))
    ));
    assert_eq!(timeline.events(), before.as_slice());
}

#[test]
fn edited_event_joining_a_date_keeps_its_current_relative_position() {
    let mut timeline = Timeline::demo(Size::new(800.0, 600.0)).unwrap();

    timeline.update_event(1, "test3", "1996-12-17").unwrap();

    // Ties after an edit follow the pre-edit sequence, not original insertion.
    assert_eq!(
        descriptions(timeline.events()),
        vec!["test1", "test3", "test2", "test4"]
    );
}
