use causeline_core::{EventId, Timeline};
use kurbo::{Point, Size};

// Demo layout on 800x600, sorted order:
//   0: test1 1995-12-17 at (400, 30)
//   1: test3 1995-12-17 at (470, 30)
//   2: test2 1996-12-17 at (400, 100)
//   3: test4 1997-12-17 at (400, 170)
fn demo() -> Timeline {
    Timeline::demo(Size::new(800.0, 600.0)).unwrap()
}

fn center(timeline: &Timeline, index: usize) -> Point {
    timeline.layout().placements[index].bounds().center()
}

fn id(timeline: &Timeline, index: usize) -> EventId {
    timeline.events()[index].id
}

fn drag(timeline: &mut Timeline, path: &[Point]) -> usize {
    timeline.pointer_down(Point::new(5.0, 5.0));
    for point in path {
        timeline.pointer_move(*point);
    }
    timeline.pointer_up()
}

#[test]
fn three_marker_gesture_builds_linear_chain() {
    let mut timeline = demo();
    let path = [center(&timeline, 0), center(&timeline, 1), center(&timeline, 3)];
    let (a, b, c) = (id(&timeline, 0), id(&timeline, 1), id(&timeline, 3));
    let untouched = id(&timeline, 2);

    assert_eq!(drag(&mut timeline, &path), 2);

    assert_eq!(timeline.effects_of(a), vec![b]);
    assert_eq!(timeline.causes_of(b), vec![a]);
    assert_eq!(timeline.effects_of(b), vec![c]);
    assert_eq!(timeline.causes_of(c), vec![b]);
    assert!(timeline.causes_of(a).is_empty());
    assert!(timeline.effects_of(c).is_empty());
    assert!(timeline.causes_of(untouched).is_empty());
    assert!(timeline.effects_of(untouched).is_empty());
    assert!(timeline
        .edges()
        .iter()
        .all(|edge| !edge.touches(untouched)));
}

#[test]
fn zero_or_one_touched_marker_commits_nothing() {
    let mut timeline = demo();

    assert_eq!(drag(&mut timeline, &[Point::new(5.0, 500.0)]), 0);
    let single = center(&timeline, 2);
    assert_eq!(drag(&mut timeline, &[single, Point::new(700.0, 500.0)]), 0);
    assert!(timeline.edges().is_empty());
    assert!(!timeline.is_dragging());
}

#[test]
fn skipping_a_marker_links_only_touched_ones() {
    let mut timeline = demo();
    let path = [
        center(&timeline, 0),
        Point::new(300.0, 85.0),
        center(&timeline, 2),
    ];
    let skipped = id(&timeline, 1);

    drag(&mut timeline, &path);

    assert_eq!(timeline.edges().len(), 1);
    assert_eq!(timeline.effects_of(id(&timeline, 0)), vec![id(&timeline, 2)]);
    assert!(timeline.causes_of(skipped).is_empty());
    assert!(timeline.effects_of(skipped).is_empty());
}

#[test]
fn last_touched_marker_gets_its_cause() {
    // Regression: the final touched marker must not be dropped from the chain.
    let mut timeline = demo();
    let path = [center(&timeline, 2), center(&timeline, 3)];

    drag(&mut timeline, &path);

    assert_eq!(timeline.causes_of(id(&timeline, 3)), vec![id(&timeline, 2)]);
}

#[test]
fn retouching_a_marker_is_ignored_without_self_loop() {
    // Known edge case: re-touch is deduplicated by layout index, so the chain
    // does not return to `a`.
    let mut timeline = demo();
    let (pa, pb) = (center(&timeline, 0), center(&timeline, 2));
    let (a, b) = (id(&timeline, 0), id(&timeline, 2));

    assert_eq!(drag(&mut timeline, &[pa, pb, pa, pa]), 1);

    assert_eq!(timeline.effects_of(a), vec![b]);
    assert!(timeline.effects_of(b).is_empty());
    assert!(timeline.edges().iter().all(|edge| edge.cause != edge.effect));
}

#[test]
fn repeated_gesture_does_not_duplicate_edges() {
    let mut timeline = demo();
    let path = [center(&timeline, 0), center(&timeline, 3)];

    assert_eq!(drag(&mut timeline, &path), 1);
    assert_eq!(drag(&mut timeline, &path), 0);

    assert_eq!(timeline.edges().len(), 1);
    assert_eq!(timeline.causes_of(id(&timeline, 3)).len(), 1);
}

#[test]
fn reverse_gesture_adds_opposite_edge() {
    let mut timeline = demo();
    let (p0, p3) = (center(&timeline, 0), center(&timeline, 3));

    drag(&mut timeline, &[p0, p3]);
    drag(&mut timeline, &[p3, p0]);

    assert_eq!(timeline.edges().len(), 2);
    assert_eq!(timeline.causes_of(id(&timeline, 0)), vec![id(&timeline, 3)]);
}

#[test]
fn cancel_clears_session_without_edges() {
    let mut timeline = demo();
    let (p0, p1) = (center(&timeline, 0), center(&timeline, 1));

    timeline.pointer_down(p0);
    timeline.pointer_move(p0);
    timeline.pointer_move(p1);
    assert!(timeline.pointer_cancel());

    assert!(timeline.pointer_move(p0).is_none());
    assert_eq!(timeline.pointer_up(), 0);
    assert!(timeline.edges().is_empty());
}

#[test]
fn start_point_itself_is_not_a_touch() {
    let mut timeline = demo();
    let (p0, p3) = (center(&timeline, 0), center(&timeline, 3));

    timeline.pointer_down(p0);
    timeline.pointer_move(p3);

    assert_eq!(timeline.pointer_up(), 0);
}

#[test]
fn edges_survive_relayout_after_new_event() {
    let mut timeline = demo();
    let path = [center(&timeline, 0), center(&timeline, 3)];
    let (a, d) = (id(&timeline, 0), id(&timeline, 3));
    drag(&mut timeline, &path);

    timeline.add_event("earlier", "1990-01-01").unwrap();

    assert_eq!(timeline.events()[1].id, a);
    assert_eq!(timeline.effects_of(a), vec![d]);
}

#[test]
fn event_added_mid_drag_does_not_redirect_touches() {
    let mut timeline = demo();
    let (p2, p3) = (center(&timeline, 2), center(&timeline, 3));
    let (test2, test4) = (id(&timeline, 2), id(&timeline, 3));
    let test3 = id(&timeline, 1);

    timeline.pointer_down(Point::new(5.0, 5.0));
    timeline.pointer_move(p2);
    timeline.pointer_move(p3);
    timeline.add_event("early", "1990-01-01").unwrap();
    assert_eq!(timeline.pointer_up(), 1);

    assert_eq!(timeline.effects_of(test2), vec![test4]);
    assert_eq!(timeline.causes_of(test4), vec![test2]);
    assert!(timeline.causes_of(test2).is_empty());
    assert!(timeline.effects_of(test3).is_empty());
}

#[test]
fn edited_event_mid_drag_keeps_its_touch() {
    let mut timeline = demo();
    let (p0, p3) = (center(&timeline, 0), center(&timeline, 3));
    let (test1, test4) = (id(&timeline, 0), id(&timeline, 3));

    timeline.pointer_down(Point::new(5.0, 5.0));
    timeline.pointer_move(p0);
    timeline.pointer_move(p3);
    timeline.update_event(0, "test1", "1999-01-01").unwrap();
    timeline.pointer_up();

    assert_eq!(timeline.edges().len(), 1);
    assert_eq!(timeline.effects_of(test1), vec![test4]);
}

#[test]
fn removed_event_mid_drag_creates_no_edge() {
    let mut timeline = demo();
    let (p2, p3) = (center(&timeline, 2), center(&timeline, 3));
    let test2 = id(&timeline, 2);

    timeline.pointer_down(Point::new(5.0, 5.0));
    timeline.pointer_move(p2);
    timeline.pointer_move(p3);
    timeline.remove_event(3).unwrap();

    assert_eq!(timeline.pointer_up(), 0);
    assert!(timeline.edges().is_empty());
    assert!(timeline.effects_of(test2).is_empty());
    assert!(timeline.causes_of(test2).is_empty());
}

#[test]
fn removed_middle_event_does_not_bridge_its_neighbours() {
    let mut timeline = demo();
    let path = [center(&timeline, 0), center(&timeline, 2), center(&timeline, 3)];
    let (a, c) = (id(&timeline, 0), id(&timeline, 3));

    timeline.pointer_down(Point::new(5.0, 5.0));
    for point in path {
        timeline.pointer_move(point);
    }
    timeline.remove_event(2).unwrap();

    assert_eq!(timeline.pointer_up(), 0);
    assert!(timeline.effects_of(a).is_empty());
    assert!(timeline.causes_of(c).is_empty());
}
