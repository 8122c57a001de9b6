//! Pure overlay layer geometry.
//!
//! Given the hovered element's box, padding and corner radii, compute where
//! the outline, the inset padding box and the tooltip go. Applying the result
//! to the injected nodes is the renderer's job.

use inspect_geometry::Rect;
use inspect_style::parse_length;

/// Vertical gap between the element box and a tooltip placed above it.
const TOOLTIP_GAP_ABOVE: f64 = 10.0;
/// Vertical gap when the tooltip flips below the element.
const TOOLTIP_GAP_BELOW: f64 = 5.0;

/// Inputs for one overlay frame, all in page coordinates.
#[derive(Clone, Debug)]
pub struct FrameInputs<'decl> {
    pub rect: Rect,
    /// Padding in top/right/bottom/left order, resolved to pixels.
    pub padding: [f64; 4],
    /// The element's computed `border-radius` shorthand, verbatim.
    pub border_radius: &'decl str,
    /// Current vertical scroll offset; the tooltip flips below the element
    /// when there is not enough room above the topmost visible position.
    pub scroll_top: f64,
    /// Expected tooltip height (estimated per presentation kind).
    pub tooltip_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutlineLayer {
    pub rect: Rect,
    pub border_radius: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaddingLayer {
    pub rect: Rect,
    pub border_radius: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
    pub below: bool,
}

/// Computed geometry for the outline/padding/tooltip triple.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    pub outline: OutlineLayer,
    /// Present only when the element has non-zero padding.
    pub padding: Option<PaddingLayer>,
    pub tooltip: TooltipPlacement,
}

fn has_visible_radius(border_radius: &str) -> bool {
    !border_radius.is_empty() && border_radius != "0px" && border_radius != "none"
}

/// Compute the overlay frame for a hovered element.
pub fn compute_frame(inputs: &FrameInputs<'_>) -> OverlayFrame {
    let [padding_top, padding_right, padding_bottom, padding_left] = inputs.padding;
    let rect = inputs.rect;

    let outline = OutlineLayer {
        rect,
        border_radius: if has_visible_radius(inputs.border_radius) {
            inputs.border_radius.to_owned()
        } else {
            "0".to_owned()
        },
    };

    let has_padding =
        padding_top > 0.0 || padding_right > 0.0 || padding_bottom > 0.0 || padding_left > 0.0;
    let padding = has_padding.then(|| PaddingLayer {
        rect: rect.inset(padding_top, padding_right, padding_bottom, padding_left),
        border_radius: if has_visible_radius(inputs.border_radius) {
            inner_border_radius(
                inputs.border_radius,
                padding_top,
                padding_right,
                padding_bottom,
                padding_left,
            )
        } else {
            "0".to_owned()
        },
    });

    let above_top = rect.top - inputs.tooltip_height - TOOLTIP_GAP_ABOVE;
    let tooltip = if above_top < inputs.scroll_top {
        TooltipPlacement {
            left: rect.left,
            top: rect.bottom() + TOOLTIP_GAP_BELOW,
            below: true,
        }
    } else {
        TooltipPlacement {
            left: rect.left,
            top: above_top,
            below: false,
        }
    };

    OverlayFrame {
        outline,
        padding,
        tooltip,
    }
}

/// Border radius of the padding box: each corner radius minus the larger of
/// its two adjacent paddings, floored at zero.
///
/// Accepts the 1-, 2- or 4-value `border-radius` shorthand; other forms pass
/// through unchanged.
pub fn inner_border_radius(
    border_radius: &str,
    padding_top: f64,
    padding_right: f64,
    padding_bottom: f64,
    padding_left: f64,
) -> String {
    let values: Vec<f64> = border_radius
        .split_ascii_whitespace()
        .map(|part| parse_length(part).value)
        .collect();

    let floor = |radius: f64, inset: f64| (radius - inset).max(0.0);

    match *values.as_slice() {
        [all] => {
            let max_padding = padding_top
                .max(padding_right)
                .max(padding_bottom)
                .max(padding_left);
            format!("{}px", floor(all, max_padding))
        }
        [first, second] => {
            let top_left = floor(first, padding_top.max(padding_left));
            let top_right = floor(second, padding_top.max(padding_right));
            format!("{top_left}px {top_right}px")
        }
        [top_left, top_right, bottom_right, bottom_left] => {
            let top_left = floor(top_left, padding_top.max(padding_left));
            let top_right = floor(top_right, padding_top.max(padding_right));
            let bottom_right = floor(bottom_right, padding_bottom.max(padding_right));
            let bottom_left = floor(bottom_left, padding_bottom.max(padding_left));
            format!("{top_left}px {top_right}px {bottom_right}px {bottom_left}px")
        }
        _ => border_radius.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(rect: Rect) -> FrameInputs<'static> {
        FrameInputs {
            rect,
            padding: [0.0; 4],
            border_radius: "",
            scroll_top: 0.0,
            tooltip_height: 100.0,
        }
    }

    #[test]
    fn padding_box_is_inset() {
        let mut frame_inputs = inputs(Rect::new(50.0, 200.0, 200.0, 100.0));
        frame_inputs.padding = [10.0; 4];
        let frame = compute_frame(&frame_inputs);
        assert_eq!(frame.outline.rect, Rect::new(50.0, 200.0, 200.0, 100.0));
        let padding = frame.padding.as_ref().map(|layer| layer.rect);
        assert_eq!(padding, Some(Rect::new(60.0, 210.0, 180.0, 80.0)));
    }

    #[test]
    fn no_padding_layer_without_padding() {
        let frame = compute_frame(&inputs(Rect::new(0.0, 500.0, 50.0, 50.0)));
        assert!(frame.padding.is_none());
    }

    #[test]
    fn tooltip_flips_below_near_scroll_top() {
        // Element too close to the top of the visible area.
        let frame = compute_frame(&inputs(Rect::new(0.0, 40.0, 50.0, 50.0)));
        assert!(frame.tooltip.below);
        assert_eq!(frame.tooltip.top, 95.0);

        // Plenty of room above.
        let frame = compute_frame(&inputs(Rect::new(0.0, 400.0, 50.0, 50.0)));
        assert!(!frame.tooltip.below);
        assert_eq!(frame.tooltip.top, 290.0);
    }

    #[test]
    fn tooltip_flip_respects_scroll_offset() {
        let mut frame_inputs = inputs(Rect::new(0.0, 400.0, 50.0, 50.0));
        frame_inputs.scroll_top = 350.0;
        let frame = compute_frame(&frame_inputs);
        assert!(frame.tooltip.below);
    }

    #[test]
    fn inner_radius_floors_at_zero() {
        assert_eq!(inner_border_radius("12px", 4.0, 4.0, 4.0, 4.0), "8px");
        assert_eq!(inner_border_radius("3px", 10.0, 10.0, 10.0, 10.0), "0px");
        assert_eq!(
            inner_border_radius("10px 4px 10px 4px", 2.0, 6.0, 2.0, 6.0),
            "4px 0px 4px 0px"
        );
        // Unsupported forms pass through.
        assert_eq!(
            inner_border_radius("10px / 5px", 1.0, 1.0, 1.0, 1.0),
            "10px / 5px"
        );
    }
}
