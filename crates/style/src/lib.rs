//! Computed-style extraction and formatting.
//!
//! Reads the resolved visual properties of an element into a structured
//! [`StyleRecord`], classifies the element into a presentation kind, and
//! carries the tolerant value parsers (lengths, colors, shorthand collapsing)
//! the rest of the inspector builds on. Extraction is a pure function of the
//! element's current computed declarations and never mutates the document.

#![forbid(unsafe_code)]

pub mod color;
pub mod extract;
pub mod record;
pub mod shorthand;
pub mod units;

pub use color::normalize_color;
pub use extract::{classify, create_snapshot, extract, presentation};
pub use record::{
    Border, Borders, Dimension, Dimensions, ElementSnapshot, Layout, Presentation, PresentationKind,
    Spacing, StyleRecord, Typography,
};
pub use shorthand::{Corners, Sides, collapse_corners, collapse_sides, is_uniform_corners};
pub use units::{Length, parse_length};
