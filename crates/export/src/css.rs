//! Render a captured snapshot back into a copy-pastable CSS ruleset.

use inspect_style::{ElementSnapshot, collapse_corners, collapse_sides};

fn push_declaration(out: &mut String, property: &str, value: &str) {
    out.push_str("  ");
    out.push_str(property);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(";\n");
}

/// One ruleset under the snapshot's derived selector. Shorthand-collapsed
/// where CSS allows it; optional properties are emitted only when captured.
pub fn to_css(snapshot: &ElementSnapshot) -> String {
    let style = &snapshot.computed_style;
    let mut out = format!("{} {{\n", snapshot.selector);

    let typography = &style.typography;
    push_declaration(&mut out, "font-family", &typography.font_family);
    push_declaration(
        &mut out,
        "font-size",
        &format!("{}{}", typography.font_size.value, typography.font_size.unit),
    );
    push_declaration(&mut out, "font-weight", &typography.font_weight);
    push_declaration(
        &mut out,
        "line-height",
        &format!(
            "{}{}",
            typography.line_height.value, typography.line_height.unit
        ),
    );
    push_declaration(&mut out, "color", &typography.color);
    if let Some(letter_spacing) = &typography.letter_spacing {
        push_declaration(&mut out, "letter-spacing", letter_spacing);
    }
    if let Some(text_transform) = &typography.text_transform {
        push_declaration(&mut out, "text-transform", text_transform);
    }

    push_declaration(&mut out, "padding", &collapse_sides(&style.spacing.padding));
    push_declaration(&mut out, "margin", &collapse_sides(&style.spacing.margin));
    if let Some(gap) = &style.spacing.gap {
        push_declaration(&mut out, "gap", gap);
    }

    let dimensions = &style.dimensions;
    push_declaration(
        &mut out,
        "width",
        &format!("{}{}", dimensions.width.value, dimensions.width.unit),
    );
    push_declaration(
        &mut out,
        "height",
        &format!("{}{}", dimensions.height.value, dimensions.height.unit),
    );
    if let Some(min_width) = &dimensions.min_width {
        push_declaration(&mut out, "min-width", min_width);
    }
    if let Some(max_width) = &dimensions.max_width {
        push_declaration(&mut out, "max-width", max_width);
    }
    if let Some(min_height) = &dimensions.min_height {
        push_declaration(&mut out, "min-height", min_height);
    }
    if let Some(max_height) = &dimensions.max_height {
        push_declaration(&mut out, "max-height", max_height);
    }

    let borders = &style.borders;
    push_declaration(&mut out, "border-radius", &collapse_corners(&borders.radius));
    push_declaration(
        &mut out,
        "border",
        &format!(
            "{} {} {}",
            borders.border.width, borders.border.style, borders.border.color
        ),
    );

    let layout = &style.layout;
    push_declaration(&mut out, "display", &layout.display);
    push_declaration(&mut out, "position", &layout.position);
    if let Some(flex_direction) = &layout.flex_direction {
        push_declaration(&mut out, "flex-direction", flex_direction);
    }
    if let Some(justify_content) = &layout.justify_content {
        push_declaration(&mut out, "justify-content", justify_content);
    }
    if let Some(align_items) = &layout.align_items {
        push_declaration(&mut out, "align-items", align_items);
    }

    out.push('}');
    out
}
