//! Page-coordinate rectangles and points.

use serde::{Deserialize, Serialize};

/// A point in page coordinates (scroll offset already applied).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page coordinates.
///
/// A `Rect` is an immutable snapshot taken at the moment of interaction.
/// Two rects captured across different scroll or resize events must not be
/// compared without re-snapshotting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Midpoint of the horizontal extent.
    pub fn mid_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Midpoint of the vertical extent.
    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Whether the horizontal spans of the two rects overlap.
    pub fn overlaps_horizontally(&self, other: &Self) -> bool {
        self.left < other.right() && other.left < self.right()
    }

    /// Whether the vertical spans of the two rects overlap.
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        self.top < other.bottom() && other.top < self.bottom()
    }

    /// Shrink the rect by per-side insets. Width/height are floored at zero.
    pub fn inset(&self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            left: self.left + left,
            top: self.top + top,
            width: (self.width - left - right).max(0.0),
            height: (self.height - top - bottom).max(0.0),
        }
    }
}
