//! Rectangle geometry for element inspection: page-coordinate rects and
//! the nearest-edge distance computation between two of them.

#![forbid(unsafe_code)]

pub mod measure;
pub mod rect;

pub use measure::{MeasurementResult, line_angle_degrees, line_length, measure};
pub use rect::{Point, Rect};
