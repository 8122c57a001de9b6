//! Color normalization for computed values.
//!
//! Browsers serialize computed colors as `rgb()`/`rgba()` triplets; the
//! inspector shows them as 6-digit hex when they are expressible as opaque
//! RGB. Anything else (keywords, gradients, color-mix results) passes through
//! unchanged by policy.

/// Convert `rgb(r, g, b)` / `rgba(r, g, b, a)` to `#rrggbb`, dropping alpha.
/// Unrecognized strings are returned as-is.
pub fn normalize_color(raw: &str) -> String {
    parse_rgb_triplet(raw).map_or_else(
        || raw.to_owned(),
        |(red, green, blue)| format!("#{red:02x}{green:02x}{blue:02x}"),
    )
}

fn parse_rgb_triplet(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    let (body, expects_alpha) = if let Some(stripped) = trimmed.strip_prefix("rgba(") {
        (stripped.strip_suffix(')')?, true)
    } else if let Some(stripped) = trimmed.strip_prefix("rgb(") {
        (stripped.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected_len = if expects_alpha { 4 } else { 3 };
    if parts.len() != expected_len {
        return None;
    }
    if expects_alpha && parts[3].parse::<f64>().is_err() {
        return None;
    }

    let red = parts[0].parse::<u8>().ok()?;
    let green = parts[1].parse::<u8>().ok()?;
    let blue = parts[2].parse::<u8>().ok()?;
    Some((red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(normalize_color("rgb(139, 92, 246)"), "#8b5cf6");
        assert_eq!(normalize_color("rgb(0, 0, 0)"), "#000000");
        assert_eq!(normalize_color("rgb(255,255,255)"), "#ffffff");
    }

    #[test]
    fn rgba_drops_alpha() {
        assert_eq!(normalize_color("rgba(16, 185, 129, 0.25)"), "#10b981");
        assert_eq!(normalize_color("rgba(16, 185, 129, 1)"), "#10b981");
    }

    #[test]
    fn unrecognized_passes_through() {
        assert_eq!(normalize_color("#8b5cf6"), "#8b5cf6");
        assert_eq!(normalize_color("currentColor"), "currentColor");
        assert_eq!(normalize_color("rgb(300, 0, 0)"), "rgb(300, 0, 0)");
        assert_eq!(normalize_color("rgb(1, 2)"), "rgb(1, 2)");
        assert_eq!(
            normalize_color("linear-gradient(red, blue)"),
            "linear-gradient(red, blue)"
        );
    }
}
