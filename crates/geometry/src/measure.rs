//! Nearest-edge distance between two rectangles.
//!
//! The distance is the shortest straight-line gap between the boxes, not the
//! distance between their centers. Horizontal and vertical separations are
//! computed independently; when both are positive the true gap runs between
//! the two nearest corners, when one is positive it runs between the nearest
//! parallel edges, and overlapping boxes have distance zero.

use serde::{Deserialize, Serialize};

use crate::rect::{Point, Rect};

/// Result of measuring the gap between two rectangles.
///
/// Derived and never mutated; recomputed from scratch for every measurement.
/// `line_start`/`line_end` describe the single shortest-path segment drawn
/// between the boxes (degenerate when they overlap).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    pub horizontal_gap: f64,
    pub vertical_gap: f64,
    pub edge_distance: f64,
    pub line_start: Point,
    pub line_end: Point,
}

/// A per-axis separation with the segment that visualizes it.
struct AxisSegment {
    gap: f64,
    start: Point,
    end: Point,
}

/// Horizontal separation between the nearer pair of vertical edges, zero when
/// the horizontal spans overlap. The anchor height is the midpoint of the
/// vertical span overlap, falling back to the first rect's vertical midpoint
/// when the spans are disjoint.
fn horizontal_segment(first: &Rect, second: &Rect) -> AxisSegment {
    let overlap_top = first.top.max(second.top);
    let overlap_bottom = first.bottom().min(second.bottom());
    let anchor_y = if overlap_top < overlap_bottom {
        (overlap_top + overlap_bottom) / 2.0
    } else {
        first.mid_y()
    };

    if second.left >= first.right() {
        AxisSegment {
            gap: second.left - first.right(),
            start: Point::new(first.right(), anchor_y),
            end: Point::new(second.left, anchor_y),
        }
    } else if first.left >= second.right() {
        AxisSegment {
            gap: first.left - second.right(),
            start: Point::new(second.right(), anchor_y),
            end: Point::new(first.left, anchor_y),
        }
    } else {
        // Spans overlap: zero gap, degenerate segment at the overlap midpoint.
        let mid_x = (first.left.max(second.left) + first.right().min(second.right())) / 2.0;
        let point = Point::new(mid_x, anchor_y);
        AxisSegment {
            gap: 0.0,
            start: point,
            end: point,
        }
    }
}

/// Vertical counterpart of [`horizontal_segment`].
fn vertical_segment(first: &Rect, second: &Rect) -> AxisSegment {
    let overlap_left = first.left.max(second.left);
    let overlap_right = first.right().min(second.right());
    let anchor_x = if overlap_left < overlap_right {
        (overlap_left + overlap_right) / 2.0
    } else {
        first.mid_x()
    };

    if second.top >= first.bottom() {
        AxisSegment {
            gap: second.top - first.bottom(),
            start: Point::new(anchor_x, first.bottom()),
            end: Point::new(anchor_x, second.top),
        }
    } else if first.top >= second.bottom() {
        AxisSegment {
            gap: first.top - second.bottom(),
            start: Point::new(anchor_x, second.bottom()),
            end: Point::new(anchor_x, first.top),
        }
    } else {
        let mid_y = (first.top.max(second.top) + first.bottom().min(second.bottom())) / 2.0;
        let point = Point::new(anchor_x, mid_y);
        AxisSegment {
            gap: 0.0,
            start: point,
            end: point,
        }
    }
}

/// The two nearest corners of rectangles separated on both axes.
fn corner_segment(first: &Rect, second: &Rect) -> (Point, Point) {
    let (start_x, end_x) = if second.left >= first.right() {
        (first.right(), second.left)
    } else {
        (first.left, second.right())
    };
    let (start_y, end_y) = if second.top >= first.bottom() {
        (first.bottom(), second.top)
    } else {
        (first.top, second.bottom())
    };
    (Point::new(start_x, start_y), Point::new(end_x, end_y))
}

/// Measure the nearest-edge gap between two rectangles.
///
/// `edge_distance` is symmetric in the arguments; the line endpoints point
/// from `first` toward `second` and swap with argument order.
pub fn measure(first: &Rect, second: &Rect) -> MeasurementResult {
    let horizontal = horizontal_segment(first, second);
    let vertical = vertical_segment(first, second);

    let (edge_distance, line_start, line_end) = if horizontal.gap > 0.0 && vertical.gap > 0.0 {
        let (start, end) = corner_segment(first, second);
        let distance = horizontal.gap.hypot(vertical.gap);
        (distance, start, end)
    } else if horizontal.gap > 0.0 {
        (horizontal.gap, horizontal.start, horizontal.end)
    } else if vertical.gap > 0.0 {
        (vertical.gap, vertical.start, vertical.end)
    } else {
        // Overlap on both axes: the line degenerates to a point at the
        // shared-region centroid.
        let centroid = Point::new(
            (first.left.max(second.left) + first.right().min(second.right())) / 2.0,
            (first.top.max(second.top) + first.bottom().min(second.bottom())) / 2.0,
        );
        (0.0, centroid, centroid)
    };

    MeasurementResult {
        horizontal_gap: horizontal.gap,
        vertical_gap: vertical.gap,
        edge_distance,
        line_start,
        line_end,
    }
}

/// Euclidean length of the drawn segment.
pub fn line_length(start: &Point, end: &Point) -> f64 {
    (end.x - start.x).hypot(end.y - start.y)
}

/// Rotation of the drawn segment in degrees, measured from the positive
/// x-axis, for renderers that draw the line as a rotated horizontal bar.
pub fn line_angle_degrees(start: &Point, end: &Point) -> f64 {
    (end.y - start.y).atan2(end.x - start.x).to_degrees()
}
