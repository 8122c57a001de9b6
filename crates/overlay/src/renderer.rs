//! The overlay node triple and its application of computed frames.

use inspect_dom::{Document, INSPECTOR_ID_PREFIX, NodeId};
use inspect_geometry::Rect;
use inspect_style::{PresentationKind, parse_length, presentation};

use crate::content::{render_text, tooltip_content};
use crate::frame::{FrameInputs, OverlayFrame, compute_frame};
use crate::theme::{
    OVERLAY_BORDER_WIDTH_PX, OVERLAY_Z_INDEX, SECONDARY_COLOR, TERTIARY_COLOR, shadow_rgba,
};

/// Baseline tooltip font size; all tooltip chrome scales from here.
pub const BASE_FONT_SIZE_PX: u32 = 12;

/// Active theme colors and tooltip sizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayStyle {
    pub primary: String,
    /// Text color that stays readable on top of `primary`.
    pub contrast: String,
    pub secondary: String,
    pub tertiary: String,
    pub font_size_px: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            primary: "#7C3AED".to_owned(),
            contrast: "#FFFFFF".to_owned(),
            secondary: SECONDARY_COLOR.to_owned(),
            tertiary: TERTIARY_COLOR.to_owned(),
            font_size_px: BASE_FONT_SIZE_PX,
        }
    }
}

impl OverlayStyle {
    /// Linear scale factor relative to the 12px baseline.
    pub fn scale(&self) -> f64 {
        f64::from(self.font_size_px) / f64::from(BASE_FONT_SIZE_PX)
    }
}

/// Owns the one outline/padding/tooltip node triple of a session.
///
/// The triple is created once and reused for every pointer move; `hide` only
/// toggles display, `destroy` removes the nodes from the document.
#[derive(Debug)]
pub struct OverlayRenderer {
    outline: NodeId,
    padding: NodeId,
    tooltip: NodeId,
    style: OverlayStyle,
}

fn px(value: f64) -> String {
    format!("{value}px")
}

impl OverlayRenderer {
    /// Inject the overlay node triple into the document, hidden.
    pub fn new(doc: &mut Document) -> Self {
        let root = doc.root();

        let outline = doc.create_element(root, "div");
        doc.set_attribute(outline, "id", &format!("{INSPECTOR_ID_PREFIX}overlay"));
        let padding = doc.create_element(root, "div");
        doc.set_attribute(padding, "id", &format!("{INSPECTOR_ID_PREFIX}padding"));
        let tooltip = doc.create_element(root, "div");
        doc.set_attribute(tooltip, "id", &format!("{INSPECTOR_ID_PREFIX}tooltip"));

        for node in [outline, padding, tooltip] {
            doc.set_declaration(node, "position", "absolute");
            doc.set_declaration(node, "pointer-events", "none");
            doc.set_declaration(node, "display", "none");
            doc.set_declaration(node, "box-sizing", "border-box");
            doc.set_declaration(node, "z-index", &OVERLAY_Z_INDEX.to_string());
        }
        doc.set_declaration(padding, "background", "rgba(16, 185, 129, 0.25)");
        doc.set_declaration(padding, "border", "1px dashed rgba(16, 185, 129, 0.7)");
        doc.set_declaration(tooltip, "background", "rgba(255, 255, 255, 0.98)");
        doc.set_declaration(tooltip, "color", "#1e1b2e");
        doc.set_declaration(tooltip, "font-family", "monospace");

        let renderer = Self {
            outline,
            padding,
            tooltip,
            style: OverlayStyle::default(),
        };
        renderer.apply_chrome(doc);
        renderer
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn outline_node(&self) -> NodeId {
        self.outline
    }

    pub fn tooltip_node(&self) -> NodeId {
        self.tooltip
    }

    pub fn padding_node(&self) -> NodeId {
        self.padding
    }

    /// Swap theme colors and tooltip font size, refreshing node chrome.
    pub fn set_style(&mut self, doc: &mut Document, style: OverlayStyle) {
        self.style = style;
        self.apply_chrome(doc);
    }

    /// Size- and color-dependent declarations on the reusable nodes.
    fn apply_chrome(&self, doc: &mut Document) {
        let scale = self.style.scale();
        doc.set_declaration(
            self.outline,
            "border",
            &format!("{OVERLAY_BORDER_WIDTH_PX}px solid {}", self.style.primary),
        );
        doc.set_declaration(
            self.tooltip,
            "font-size",
            &px(f64::from(self.style.font_size_px)),
        );
        doc.set_declaration(
            self.tooltip,
            "padding",
            &format!("{}px {}px", (8.0 * scale).round(), (12.0 * scale).round()),
        );
        doc.set_declaration(self.tooltip, "border-radius", &px((6.0 * scale).round()));
        doc.set_declaration(
            self.tooltip,
            "border",
            &format!("{}px solid {}", (2.0 * scale).round(), self.style.primary),
        );
        doc.set_declaration(self.tooltip, "max-width", &px((300.0 * scale).round()));
        doc.set_declaration(
            self.tooltip,
            "box-shadow",
            &format!("0 4px 12px {}", shadow_rgba(&self.style.primary)),
        );
    }

    /// Redraw all three layers over the given element. No-op when the
    /// element has no layout rect.
    pub fn show_on_element(&mut self, doc: &mut Document, target: NodeId) {
        let Some(rect) = doc.layout_rect(target) else {
            return;
        };
        let Some(tag) = doc.tag(target).map(ToOwned::to_owned) else {
            return;
        };

        let element_presentation = presentation(doc, target);
        log::trace!("overlay redraw on <{tag}> at {},{}", rect.left, rect.top);
        let frame = self.compute_element_frame(doc, target, rect, element_presentation.kind());

        self.apply_frame(doc, &frame);
        let content = tooltip_content(&tag, &rect, &element_presentation);
        doc.set_text_content(self.tooltip, &render_text(&content));
    }

    fn compute_element_frame(
        &self,
        doc: &Document,
        target: NodeId,
        rect: Rect,
        kind: PresentationKind,
    ) -> OverlayFrame {
        let padding = [
            parse_length(doc.declaration(target, "padding-top").unwrap_or("")).value,
            parse_length(doc.declaration(target, "padding-right").unwrap_or("")).value,
            parse_length(doc.declaration(target, "padding-bottom").unwrap_or("")).value,
            parse_length(doc.declaration(target, "padding-left").unwrap_or("")).value,
        ];
        let border_radius = doc
            .declaration(target, "border-radius")
            .unwrap_or("")
            .to_owned();

        compute_frame(&FrameInputs {
            rect,
            padding,
            border_radius: &border_radius,
            scroll_top: doc.scroll_offset().1,
            tooltip_height: estimated_tooltip_height(kind, self.style.scale()),
        })
    }

    fn apply_frame(&mut self, doc: &mut Document, frame: &OverlayFrame) {
        doc.set_declaration(self.outline, "display", "block");
        doc.set_declaration(self.outline, "left", &px(frame.outline.rect.left));
        doc.set_declaration(self.outline, "top", &px(frame.outline.rect.top));
        doc.set_declaration(self.outline, "width", &px(frame.outline.rect.width));
        doc.set_declaration(self.outline, "height", &px(frame.outline.rect.height));
        doc.set_declaration(self.outline, "border-radius", &frame.outline.border_radius);

        if let Some(padding_layer) = &frame.padding {
            doc.set_declaration(self.padding, "display", "block");
            doc.set_declaration(self.padding, "left", &px(padding_layer.rect.left));
            doc.set_declaration(self.padding, "top", &px(padding_layer.rect.top));
            doc.set_declaration(self.padding, "width", &px(padding_layer.rect.width));
            doc.set_declaration(self.padding, "height", &px(padding_layer.rect.height));
            doc.set_declaration(self.padding, "border-radius", &padding_layer.border_radius);
        } else {
            doc.set_declaration(self.padding, "display", "none");
        }

        doc.set_declaration(self.tooltip, "display", "block");
        doc.set_declaration(self.tooltip, "left", &px(frame.tooltip.left));
        doc.set_declaration(self.tooltip, "top", &px(frame.tooltip.top));
    }

    /// Hide all three layers without destroying the nodes.
    pub fn hide(&mut self, doc: &mut Document) {
        for node in [self.outline, self.padding, self.tooltip] {
            doc.set_declaration(node, "display", "none");
        }
    }

    /// Remove the node triple from the document entirely.
    pub fn destroy(self, doc: &mut Document) {
        for node in [self.outline, self.padding, self.tooltip] {
            doc.remove(node);
        }
    }
}

/// Expected tooltip heights by template, scaled with the font size. Stands in
/// for measuring the rendered node, which this model cannot do.
fn estimated_tooltip_height(kind: PresentationKind, scale: f64) -> f64 {
    let base = match kind {
        PresentationKind::Image => 140.0,
        PresentationKind::Vector => 130.0,
        PresentationKind::TextBearing => 120.0,
        PresentationKind::Generic => 100.0,
    };
    base * scale
}
