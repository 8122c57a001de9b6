//! CSS shorthand collapsing for four-sided values.
//!
//! Mirrors standard shorthand rules: values uniform across all four sides
//! collapse to one, values equal pairwise top/bottom and left/right collapse
//! to two, otherwise all four are emitted in top/right/bottom/left order.

use serde::{Deserialize, Serialize};

/// Four side values in CSS order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl Sides {
    pub fn new(top: &str, right: &str, bottom: &str, left: &str) -> Self {
        Self {
            top: top.to_owned(),
            right: right.to_owned(),
            bottom: bottom.to_owned(),
            left: left.to_owned(),
        }
    }
}

/// Four corner radii in border-radius order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corners {
    pub top_left: String,
    pub top_right: String,
    pub bottom_right: String,
    pub bottom_left: String,
}

impl Corners {
    pub fn new(top_left: &str, top_right: &str, bottom_right: &str, bottom_left: &str) -> Self {
        Self {
            top_left: top_left.to_owned(),
            top_right: top_right.to_owned(),
            bottom_right: bottom_right.to_owned(),
            bottom_left: bottom_left.to_owned(),
        }
    }
}

/// Collapse four side values to the shortest equivalent shorthand.
pub fn collapse_sides(sides: &Sides) -> String {
    if sides.top == sides.right && sides.right == sides.bottom && sides.bottom == sides.left {
        return sides.top.clone();
    }
    if sides.top == sides.bottom && sides.left == sides.right {
        return format!("{} {}", sides.top, sides.right);
    }
    format!(
        "{} {} {} {}",
        sides.top, sides.right, sides.bottom, sides.left
    )
}

pub fn is_uniform_corners(corners: &Corners) -> bool {
    corners.top_left == corners.top_right
        && corners.top_right == corners.bottom_right
        && corners.bottom_right == corners.bottom_left
}

/// Collapse border-radius corners: a single value when uniform, otherwise all
/// four in top-left/top-right/bottom-right/bottom-left order.
pub fn collapse_corners(corners: &Corners) -> String {
    if is_uniform_corners(corners) {
        return corners.top_left.clone();
    }
    format!(
        "{} {} {} {}",
        corners.top_left, corners.top_right, corners.bottom_right, corners.bottom_left
    )
}
