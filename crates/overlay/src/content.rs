//! Tooltip content templates, one per presentation kind.

use inspect_geometry::Rect;
use inspect_style::Presentation;

/// One `label: value` row of the tooltip body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipLine {
    pub label: String,
    pub value: String,
}

impl TooltipLine {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// The tooltip model: a header naming the element and its rendered size,
/// followed by kind-specific property rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub header: String,
    pub lines: Vec<TooltipLine>,
}

/// Build the tooltip content for an element. The template is selected by the
/// presentation kind and handled exhaustively so a new kind cannot silently
/// render an empty tooltip.
pub fn tooltip_content(tag: &str, rect: &Rect, presentation: &Presentation) -> TooltipContent {
    let header = format!(
        "<{tag}> {}\u{d7}{}px",
        rect.width.round(),
        rect.height.round()
    );

    let lines = match presentation {
        Presentation::Image {
            natural_size,
            source,
            file_type,
            object_fit,
            alt,
        } => {
            let natural = natural_size.map_or_else(
                || "N/A".to_owned(),
                |(width, height)| format!("{}\u{d7}{}px", width.round(), height.round()),
            );
            let mut rows = vec![
                TooltipLine::new("natural", &natural),
                TooltipLine::new("type", file_type),
                TooltipLine::new("object-fit", object_fit),
                TooltipLine::new("src", source.as_deref().unwrap_or("N/A")),
            ];
            if let Some(alt_text) = alt {
                rows.push(TooltipLine::new("alt", alt_text));
            }
            rows
        }
        Presentation::Vector {
            view_box,
            fill,
            stroke,
            aspect_ratio,
        } => vec![
            TooltipLine::new("viewBox", view_box.as_deref().unwrap_or("N/A")),
            TooltipLine::new("fill", fill),
            TooltipLine::new("stroke", stroke),
            TooltipLine::new("aspect-ratio", aspect_ratio),
        ],
        Presentation::TextBearing {
            font_size,
            font_family,
            color,
            line_height,
            font_weight,
        } => vec![
            TooltipLine::new("font-size", font_size),
            TooltipLine::new("font-family", font_family),
            TooltipLine::new("color", color),
            TooltipLine::new("line-height", line_height),
            TooltipLine::new("font-weight", font_weight),
        ],
        Presentation::Generic {
            padding,
            gap,
            border_radius,
            border,
            box_shadow,
        } => {
            let mut rows = vec![TooltipLine::new("padding", padding)];
            if let Some(gap_value) = gap {
                rows.push(TooltipLine::new("gap", gap_value));
            }
            rows.push(TooltipLine::new("border-radius", border_radius));
            rows.push(TooltipLine::new("border", border));
            if let Some(shadow) = box_shadow {
                rows.push(TooltipLine::new("box-shadow", shadow));
            }
            rows
        }
    };

    TooltipContent { header, lines }
}

/// Flatten the tooltip model to the text stored on the tooltip node.
pub fn render_text(content: &TooltipContent) -> String {
    let mut out = content.header.clone();
    for line in &content.lines {
        out.push('\n');
        out.push_str(&line.label);
        out.push_str(": ");
        out.push_str(&line.value);
    }
    out
}
