//! Element style extraction and presentation-kind classification.

use std::sync::atomic::{AtomicU64, Ordering};

use inspect_dom::{Document, NodeId};

use crate::color::normalize_color;
use crate::record::{
    Border, Borders, Dimension, Dimensions, ElementSnapshot, Layout, Presentation,
    PresentationKind, Spacing, StyleRecord, Typography,
};
use crate::shorthand::{Corners, Sides, collapse_sides};
use crate::units::parse_length;

/// Maximum characters of an image source shown in the tooltip.
const SOURCE_DISPLAY_LIMIT: usize = 40;

static SNAPSHOT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

fn declaration<'doc>(doc: &'doc Document, node: NodeId, name: &str) -> &'doc str {
    doc.declaration(node, name).unwrap_or("")
}

fn declaration_unless<'doc>(
    doc: &'doc Document,
    node: NodeId,
    name: &str,
    sentinel: &str,
) -> Option<String> {
    let value = doc.declaration(node, name)?;
    (value != sentinel && !value.is_empty()).then(|| value.to_owned())
}

/// Classify an element into a presentation kind.
///
/// Images and vector graphics are recognized by tag; text-bearing requires a
/// non-whitespace text node that is a direct child of the element.
pub fn classify(doc: &Document, node: NodeId) -> PresentationKind {
    match doc.tag(node) {
        Some("img") => PresentationKind::Image,
        Some("svg") => PresentationKind::Vector,
        Some(_) if doc.has_direct_text(node) => PresentationKind::TextBearing,
        _ => PresentationKind::Generic,
    }
}

/// Extract the full grouped style record for an element.
///
/// Pure function of the element's computed declarations; never mutates the
/// document and never fails — malformed values degrade per the tolerant
/// parsers.
pub fn extract(doc: &Document, node: NodeId) -> StyleRecord {
    StyleRecord {
        typography: extract_typography(doc, node),
        spacing: extract_spacing(doc, node),
        dimensions: extract_dimensions(doc, node),
        borders: extract_borders(doc, node),
        layout: extract_layout(doc, node),
    }
}

fn extract_typography(doc: &Document, node: NodeId) -> Typography {
    Typography {
        font_family: declaration(doc, node, "font-family").to_owned(),
        font_size: parse_length(declaration(doc, node, "font-size")),
        font_weight: declaration(doc, node, "font-weight").to_owned(),
        line_height: parse_length(declaration(doc, node, "line-height")),
        color: normalize_color(declaration(doc, node, "color")),
        letter_spacing: declaration_unless(doc, node, "letter-spacing", "normal"),
        text_transform: declaration_unless(doc, node, "text-transform", "none"),
    }
}

fn extract_spacing(doc: &Document, node: NodeId) -> Spacing {
    Spacing {
        padding: Sides::new(
            declaration(doc, node, "padding-top"),
            declaration(doc, node, "padding-right"),
            declaration(doc, node, "padding-bottom"),
            declaration(doc, node, "padding-left"),
        ),
        margin: Sides::new(
            declaration(doc, node, "margin-top"),
            declaration(doc, node, "margin-right"),
            declaration(doc, node, "margin-bottom"),
            declaration(doc, node, "margin-left"),
        ),
        gap: declaration_unless(doc, node, "gap", "normal"),
    }
}

fn extract_dimensions(doc: &Document, node: NodeId) -> Dimensions {
    let rect = doc.layout_rect(node).unwrap_or_default();
    let width = parse_length(declaration(doc, node, "width"));
    let height = parse_length(declaration(doc, node, "height"));

    Dimensions {
        width: Dimension {
            value: width.value,
            unit: width.unit,
            computed_px: rect.width,
        },
        height: Dimension {
            value: height.value,
            unit: height.unit,
            computed_px: rect.height,
        },
        min_width: declaration_unless(doc, node, "min-width", "none"),
        max_width: declaration_unless(doc, node, "max-width", "none"),
        min_height: declaration_unless(doc, node, "min-height", "none"),
        max_height: declaration_unless(doc, node, "max-height", "none"),
    }
}

fn extract_borders(doc: &Document, node: NodeId) -> Borders {
    Borders {
        radius: Corners::new(
            declaration(doc, node, "border-top-left-radius"),
            declaration(doc, node, "border-top-right-radius"),
            declaration(doc, node, "border-bottom-right-radius"),
            declaration(doc, node, "border-bottom-left-radius"),
        ),
        border: Border {
            width: declaration(doc, node, "border-width").to_owned(),
            style: declaration(doc, node, "border-style").to_owned(),
            color: normalize_color(declaration(doc, node, "border-color")),
        },
    }
}

fn extract_layout(doc: &Document, node: NodeId) -> Layout {
    let display = declaration(doc, node, "display").to_owned();
    let is_flex = display == "flex" || display == "inline-flex";

    Layout {
        position: declaration(doc, node, "position").to_owned(),
        flex_direction: is_flex
            .then(|| declaration(doc, node, "flex-direction").to_owned()),
        justify_content: is_flex
            .then(|| declaration(doc, node, "justify-content").to_owned()),
        align_items: is_flex.then(|| declaration(doc, node, "align-items").to_owned()),
        display,
    }
}

/// Build the presentation payload shown in the tooltip for an element.
pub fn presentation(doc: &Document, node: NodeId) -> Presentation {
    match classify(doc, node) {
        PresentationKind::Image => image_presentation(doc, node),
        PresentationKind::Vector => vector_presentation(doc, node),
        PresentationKind::TextBearing => text_presentation(doc, node),
        PresentationKind::Generic => generic_presentation(doc, node),
    }
}

fn image_presentation(doc: &Document, node: NodeId) -> Presentation {
    let source = doc
        .attribute(node, "src")
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);
    let file_type = source
        .as_deref()
        .map_or_else(|| "N/A".to_owned(), file_type_from_source);
    let object_fit = doc
        .declaration(node, "object-fit")
        .filter(|value| !value.is_empty())
        .unwrap_or("fill")
        .to_owned();

    Presentation::Image {
        natural_size: doc.natural_size(node),
        source: source.map(|path| truncate_source(&path)),
        file_type,
        object_fit,
        alt: doc
            .attribute(node, "alt")
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned),
    }
}

fn vector_presentation(doc: &Document, node: NodeId) -> Presentation {
    let fill = declaration(doc, node, "fill");
    let fill = if fill == "currentColor" {
        format!("currentColor ({})", declaration(doc, node, "color"))
    } else if fill.is_empty() {
        "none".to_owned()
    } else {
        fill.to_owned()
    };

    let stroke = declaration(doc, node, "stroke");
    let stroke = if stroke.is_empty() || stroke == "none" || stroke == "transparent" {
        "none".to_owned()
    } else {
        let stroke_width = doc
            .declaration(node, "stroke-width")
            .filter(|value| !value.is_empty())
            .unwrap_or("0");
        format!("{stroke} / {stroke_width}")
    };

    Presentation::Vector {
        view_box: doc.attribute(node, "viewBox").map(ToOwned::to_owned),
        fill,
        stroke,
        aspect_ratio: aspect_ratio_mode(
            doc.attribute(node, "preserveAspectRatio")
                .unwrap_or("xMidYMid meet"),
        ),
    }
}

fn text_presentation(doc: &Document, node: NodeId) -> Presentation {
    Presentation::TextBearing {
        font_size: declaration(doc, node, "font-size").to_owned(),
        font_family: first_font_family(declaration(doc, node, "font-family")),
        color: declaration(doc, node, "color").to_owned(),
        line_height: declaration(doc, node, "line-height").to_owned(),
        font_weight: declaration(doc, node, "font-weight").to_owned(),
    }
}

fn generic_presentation(doc: &Document, node: NodeId) -> Presentation {
    let padding = Sides::new(
        declaration(doc, node, "padding-top"),
        declaration(doc, node, "padding-right"),
        declaration(doc, node, "padding-bottom"),
        declaration(doc, node, "padding-left"),
    );
    let gap = declaration_unless(doc, node, "gap", "normal")
        .filter(|value| value != "0px");
    let border = format_border(doc, node);
    let box_shadow = declaration_unless(doc, node, "box-shadow", "none");

    Presentation::Generic {
        padding: collapse_sides(&padding),
        gap,
        border_radius: declaration(doc, node, "border-radius").to_owned(),
        border,
        box_shadow,
    }
}

/// `"<width> <style> <color>"`, or `"none"` for zero-width/styleless borders.
fn format_border(doc: &Document, node: NodeId) -> String {
    let width = declaration(doc, node, "border-width");
    let style = declaration(doc, node, "border-style");
    if width == "0px" || style == "none" || style.is_empty() {
        return "none".to_owned();
    }
    let color = normalize_color(declaration(doc, node, "border-color"));
    format!("{width} {style} {color}")
}

/// Create a full element snapshot. Returns `None` for non-element nodes.
pub fn create_snapshot(
    doc: &Document,
    node: NodeId,
    timestamp_ms: u64,
) -> Option<ElementSnapshot> {
    let tag = doc.tag(node)?.to_owned();
    let sequence = SNAPSHOT_SEQUENCE.fetch_add(1, Ordering::Relaxed);

    Some(ElementSnapshot {
        id: format!("{timestamp_ms}-{sequence}"),
        timestamp_ms,
        selector: doc.derived_selector(node)?,
        tag,
        class_names: doc.class_names(node),
        bounding_box: doc.layout_rect(node).unwrap_or_default(),
        computed_style: extract(doc, node),
    })
}

/// Uppercased file type derived from a source path extension, with the
/// common aliases folded (`jpg` reports as `JPEG`).
fn file_type_from_source(source: &str) -> String {
    let path = source.split(['?', '#']).next().unwrap_or(source);
    let extension = path.rsplit_once('.').map(|(_, ext)| ext);
    match extension {
        Some(ext)
            if !ext.is_empty()
                && ext.chars().all(|character| character.is_ascii_alphanumeric()) =>
        {
            let upper = ext.to_ascii_uppercase();
            if upper == "JPG" {
                "JPEG".to_owned()
            } else {
                upper
            }
        }
        _ => "N/A".to_owned(),
    }
}

/// Truncate a long source path for tooltip display.
fn truncate_source(source: &str) -> String {
    if source.chars().count() > SOURCE_DISPLAY_LIMIT {
        let prefix: String = source.chars().take(SOURCE_DISPLAY_LIMIT - 3).collect();
        format!("{prefix}...")
    } else {
        source.to_owned()
    }
}

/// First font of a font-family list, quotes stripped.
fn first_font_family(family: &str) -> String {
    family
        .split(',')
        .next()
        .unwrap_or(family)
        .trim()
        .replace(['\'', '"'], "")
}

/// `preserveAspectRatio` reduced to its scaling mode.
fn aspect_ratio_mode(preserve: &str) -> String {
    if preserve.contains("meet") {
        "meet".to_owned()
    } else if preserve.contains("slice") {
        "slice".to_owned()
    } else if preserve.contains("none") {
        "none".to_owned()
    } else {
        preserve.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_mapping() {
        assert_eq!(file_type_from_source("/img/photo.jpg"), "JPEG");
        assert_eq!(file_type_from_source("https://a.io/i.webp?w=200"), "WEBP");
        assert_eq!(file_type_from_source("logo.svg"), "SVG");
        assert_eq!(file_type_from_source("no-extension"), "N/A");
    }

    #[test]
    fn source_truncation() {
        let long = "a".repeat(60);
        let shown = truncate_source(&long);
        assert_eq!(shown.chars().count(), SOURCE_DISPLAY_LIMIT);
        assert!(shown.ends_with("..."));
        assert_eq!(truncate_source("short.png"), "short.png");
    }

    #[test]
    fn first_font_strips_quotes() {
        assert_eq!(
            first_font_family("\"Helvetica Neue\", Arial, sans-serif"),
            "Helvetica Neue"
        );
        assert_eq!(first_font_family("monospace"), "monospace");
    }
}
