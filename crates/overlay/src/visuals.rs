//! Measurement highlights, distance line, labels, and the activity badge.

use inspect_dom::{Document, INSPECTOR_ID_PREFIX, NodeId};
use inspect_geometry::{MeasurementResult, Rect, line_angle_degrees, line_length};

use crate::theme::{OVERLAY_Z_INDEX, TERTIARY_COLOR};

const LINE_THICKNESS_PX: f64 = 2.0;

/// Nodes created on demand while measuring and removed on reset.
///
/// Unlike the hover overlay triple these are short-lived; every selection
/// cycle rebuilds them from scratch, so `clear` removes rather than hides.
#[derive(Debug, Default)]
pub struct MeasurementVisuals {
    highlights: Vec<NodeId>,
    line: Option<NodeId>,
    label: Option<NodeId>,
    hint: Option<NodeId>,
    badge: Option<NodeId>,
}

fn overlay_base(doc: &mut Document, id_suffix: &str) -> NodeId {
    let root = doc.root();
    let node = doc.create_element(root, "div");
    doc.set_attribute(node, "id", &format!("{INSPECTOR_ID_PREFIX}{id_suffix}"));
    doc.set_declaration(node, "position", "absolute");
    doc.set_declaration(node, "pointer-events", "none");
    doc.set_declaration(node, "z-index", &OVERLAY_Z_INDEX.to_string());
    node
}

impl MeasurementVisuals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline a selected endpoint of the measurement.
    ///
    /// Endpoints get numbered ids so the two nodes of a completed
    /// measurement never collide.
    pub fn show_highlight(&mut self, doc: &mut Document, rect: &Rect, color: &str) {
        let ordinal = self.highlights.len() + 1;
        let node = overlay_base(doc, &format!("measure-highlight-{ordinal}"));
        doc.set_declaration(node, "left", &format!("{}px", rect.left));
        doc.set_declaration(node, "top", &format!("{}px", rect.top));
        doc.set_declaration(node, "width", &format!("{}px", rect.width));
        doc.set_declaration(node, "height", &format!("{}px", rect.height));
        doc.set_declaration(node, "border", &format!("2px solid {color}"));
        doc.set_declaration(node, "box-sizing", "border-box");
        self.highlights.push(node);
    }

    /// Draw the distance line between the nearest edges and a label with the
    /// horizontal, vertical, and direct gaps.
    ///
    /// A thin horizontal node rotated around its start point stands in for a
    /// true line primitive. When the two anchor points coincide the line is
    /// skipped and only the label is shown.
    pub fn show_result(&mut self, doc: &mut Document, result: &MeasurementResult) {
        let length = line_length(&result.line_start, &result.line_end);

        if length > 0.0 {
            let angle = line_angle_degrees(&result.line_start, &result.line_end);
            let line = overlay_base(doc, "measure-line");
            doc.set_declaration(line, "left", &format!("{}px", result.line_start.x));
            doc.set_declaration(line, "top", &format!("{}px", result.line_start.y));
            doc.set_declaration(line, "width", &format!("{length}px"));
            doc.set_declaration(line, "height", &format!("{LINE_THICKNESS_PX}px"));
            doc.set_declaration(line, "background", TERTIARY_COLOR);
            doc.set_declaration(line, "transform-origin", "0 50%");
            doc.set_declaration(line, "transform", &format!("rotate({angle}deg)"));
            self.line = Some(line);
        }

        let label = overlay_base(doc, "measure-label");
        let mid_x = f64::midpoint(result.line_start.x, result.line_end.x);
        let mid_y = f64::midpoint(result.line_start.y, result.line_end.y);
        doc.set_declaration(label, "left", &format!("{mid_x}px"));
        doc.set_declaration(label, "top", &format!("{mid_y}px"));
        doc.set_declaration(label, "background", TERTIARY_COLOR);
        doc.set_declaration(label, "color", "#FFFFFF");
        doc.set_declaration(label, "padding", "2px 6px");
        doc.set_declaration(label, "border-radius", "4px");
        doc.set_declaration(label, "font-family", "monospace");
        doc.set_declaration(label, "font-size", "11px");
        doc.set_declaration(label, "white-space", "nowrap");
        doc.set_text_content(
            label,
            &format!(
                "H: {}px V: {}px D: {}px",
                result.horizontal_gap.round(),
                result.vertical_gap.round(),
                result.edge_distance.round()
            ),
        );
        self.label = Some(label);
    }

    /// Banner prompting for the second click, or reporting a problem.
    pub fn show_hint(&mut self, doc: &mut Document, text: &str) {
        let hint = match self.hint {
            Some(existing) if doc.contains(existing) => existing,
            _ => {
                let node = overlay_base(doc, "measure-hint");
                doc.set_declaration(node, "position", "fixed");
                doc.set_declaration(node, "top", "12px");
                doc.set_declaration(node, "left", "50%");
                doc.set_declaration(node, "transform", "translateX(-50%)");
                doc.set_declaration(node, "background", "#1F2937");
                doc.set_declaration(node, "color", "#FFFFFF");
                doc.set_declaration(node, "padding", "6px 14px");
                doc.set_declaration(node, "border-radius", "6px");
                doc.set_declaration(node, "font-family", "sans-serif");
                doc.set_declaration(node, "font-size", "13px");
                self.hint = Some(node);
                node
            }
        };
        doc.set_text_content(hint, text);
    }

    pub fn hide_hint(&mut self, doc: &mut Document) {
        if let Some(hint) = self.hint.take() {
            doc.remove(hint);
        }
    }

    /// Persistent corner badge shown while inspection is active.
    pub fn show_badge(&mut self, doc: &mut Document, color: &str, contrast: &str) {
        let badge = match self.badge {
            Some(existing) if doc.contains(existing) => existing,
            _ => {
                let node = overlay_base(doc, "active-badge");
                doc.set_declaration(node, "position", "fixed");
                doc.set_declaration(node, "bottom", "12px");
                doc.set_declaration(node, "right", "12px");
                doc.set_declaration(node, "padding", "4px 10px");
                doc.set_declaration(node, "border-radius", "9999px");
                doc.set_declaration(node, "font-family", "sans-serif");
                doc.set_declaration(node, "font-size", "12px");
                doc.set_text_content(node, "Inspecting");
                self.badge = Some(node);
                node
            }
        };
        doc.set_declaration(badge, "background", color);
        doc.set_declaration(badge, "color", contrast);
    }

    pub fn hide_badge(&mut self, doc: &mut Document) {
        if let Some(badge) = self.badge.take() {
            doc.remove(badge);
        }
    }

    /// Remove the highlights, line, and label of the current measurement.
    /// The hint and badge survive; they follow the session, not the cycle.
    pub fn clear_measurement(&mut self, doc: &mut Document) {
        for node in self.highlights.drain(..) {
            doc.remove(node);
        }
        if let Some(line) = self.line.take() {
            doc.remove(line);
        }
        if let Some(label) = self.label.take() {
            doc.remove(label);
        }
    }

    /// Full teardown when inspection is disabled.
    pub fn clear_all(&mut self, doc: &mut Document) {
        self.clear_measurement(doc);
        self.hide_hint(doc);
        self.hide_badge(doc);
    }
}
