//! Point-in-marker hit testing.

use crate::layout::engine::Placement;
use kurbo::{Point, Rect};

/// Containment test that includes all four edges.
///
/// `kurbo::Rect::contains` excludes the max edges, markers do not.
pub fn contains(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Index of the first placement whose bounds contain `point`.
pub fn hit_test(placements: &[Placement], point: Point) -> Option<usize> {
    placements
        .iter()
        .position(|placement| contains(placement.bounds(), point))
}
