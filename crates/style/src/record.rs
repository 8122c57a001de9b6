//! The structured style record and element snapshot model.
//!
//! Grouped plain structs rather than a property bag: missing fields are
//! compile-time errors for every consumer, and the exhaustive
//! [`Presentation`] variants force tooltip templates to handle every kind.

use inspect_geometry::Rect;
use serde::{Deserialize, Serialize};

use crate::shorthand::{Corners, Sides};
use crate::units::Length;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: Length,
    pub font_weight: String,
    pub line_height: Length,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub padding: Sides,
    pub margin: Sides,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

/// A sized dimension: the authored value/unit plus the resolved pixel size.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub value: f64,
    pub unit: String,
    pub computed_px: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: Dimension,
    pub height: Dimension,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: String,
    pub style: String,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub radius: Corners,
    pub border: Border,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub display: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
}

/// Grouped bundle of an element's resolved visual properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub typography: Typography,
    pub spacing: Spacing,
    pub dimensions: Dimensions,
    pub borders: Borders,
    pub layout: Layout,
}

/// Full capture of an inspected element, created on demand and only
/// persisted when explicitly saved to history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    pub id: String,
    pub timestamp_ms: u64,
    pub selector: String,
    pub tag: String,
    pub class_names: Vec<String>,
    pub bounding_box: Rect,
    pub computed_style: StyleRecord,
}

/// Presentation-kind classification without the per-kind payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationKind {
    Image,
    Vector,
    TextBearing,
    Generic,
}

/// The property set the tooltip shows, selected by presentation kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Presentation {
    /// Image-like element: natural pixel size, source and fit mode.
    Image {
        natural_size: Option<(f64, f64)>,
        source: Option<String>,
        file_type: String,
        object_fit: String,
        alt: Option<String>,
    },
    /// Vector-graphic element: view box plus fill and stroke.
    Vector {
        view_box: Option<String>,
        fill: String,
        stroke: String,
        aspect_ratio: String,
    },
    /// Element with a direct text child: typography.
    TextBearing {
        font_size: String,
        font_family: String,
        color: String,
        line_height: String,
        font_weight: String,
    },
    /// Everything else: box model.
    Generic {
        padding: String,
        gap: Option<String>,
        border_radius: String,
        border: String,
        box_shadow: Option<String>,
    },
}

impl Presentation {
    pub fn kind(&self) -> PresentationKind {
        match self {
            Self::Image { .. } => PresentationKind::Image,
            Self::Vector { .. } => PresentationKind::Vector,
            Self::TextBearing { .. } => PresentationKind::TextBearing,
            Self::Generic { .. } => PresentationKind::Generic,
        }
    }
}
