//! Overlay color themes.
//!
//! A fixed named palette, each name carrying a light-mode and a dark-mode hex
//! value plus a contrast color for text drawn on top of it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Border color of the measurement hint banner and first-click highlight.
pub const SECONDARY_COLOR: &str = "#EC4899";
/// Color of measurement lines and labels.
pub const TERTIARY_COLOR: &str = "#10B981";

pub const OVERLAY_BORDER_WIDTH_PX: f64 = 2.0;
pub const OVERLAY_Z_INDEX: i64 = 2_147_483_647;

/// Named overlay colors the user can pick from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayColorName {
    #[default]
    Purple,
    Blue,
    Cyan,
    Teal,
    Green,
    Orange,
    Red,
    Pink,
    Indigo,
    Amber,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// A resolved palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorOption {
    pub name: OverlayColorName,
    pub value: &'static str,
    pub contrast: &'static str,
}

type PaletteKey = (ThemeMode, OverlayColorName);

static PALETTE: Lazy<HashMap<PaletteKey, ColorOption>> = Lazy::new(|| {
    let light: [(OverlayColorName, &str); 10] = [
        (OverlayColorName::Purple, "#7C3AED"),
        (OverlayColorName::Blue, "#2563EB"),
        (OverlayColorName::Cyan, "#0891B2"),
        (OverlayColorName::Teal, "#0D9488"),
        (OverlayColorName::Green, "#16A34A"),
        (OverlayColorName::Orange, "#EA580C"),
        (OverlayColorName::Red, "#DC2626"),
        (OverlayColorName::Pink, "#DB2777"),
        (OverlayColorName::Indigo, "#4F46E5"),
        (OverlayColorName::Amber, "#D97706"),
    ];
    let dark: [(OverlayColorName, &str); 10] = [
        (OverlayColorName::Purple, "#A78BFA"),
        (OverlayColorName::Blue, "#60A5FA"),
        (OverlayColorName::Cyan, "#22D3EE"),
        (OverlayColorName::Teal, "#2DD4BF"),
        (OverlayColorName::Green, "#4ADE80"),
        (OverlayColorName::Orange, "#FB923C"),
        (OverlayColorName::Red, "#F87171"),
        (OverlayColorName::Pink, "#F472B6"),
        (OverlayColorName::Indigo, "#818CF8"),
        (OverlayColorName::Amber, "#FCD34D"),
    ];

    let mut table = HashMap::new();
    for (name, value) in light {
        let entry = ColorOption {
            name,
            value,
            contrast: "#FFFFFF",
        };
        table.insert((ThemeMode::Light, name), entry);
    }
    for (name, value) in dark {
        let entry = ColorOption {
            name,
            value,
            contrast: "#1F2937",
        };
        table.insert((ThemeMode::Dark, name), entry);
    }
    table
});

/// Resolve a named overlay color for the given theme mode.
pub fn overlay_color(name: OverlayColorName, mode: ThemeMode) -> ColorOption {
    PALETTE.get(&(mode, name)).copied().unwrap_or(ColorOption {
        name: OverlayColorName::Purple,
        value: "#7C3AED",
        contrast: "#FFFFFF",
    })
}

/// Tooltip drop-shadow derived from the primary theme color.
/// Falls back to a neutral shadow when the hex cannot be parsed.
pub fn shadow_rgba(primary_hex: &str) -> String {
    primary_hex.parse::<csscolorparser::Color>().map_or_else(
        |_| "rgba(0, 0, 0, 0.2)".to_owned(),
        |color| {
            let [red, green, blue, _] = color.to_rgba8();
            format!("rgba({red}, {green}, {blue}, 0.2)")
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_resolves_both_modes() {
        let light = overlay_color(OverlayColorName::Teal, ThemeMode::Light);
        let dark = overlay_color(OverlayColorName::Teal, ThemeMode::Dark);
        assert_eq!(light.value, "#0D9488");
        assert_eq!(dark.value, "#2DD4BF");
        assert_ne!(light.contrast, dark.contrast);
    }

    #[test]
    fn shadow_follows_primary() {
        assert_eq!(shadow_rgba("#8B5CF6"), "rgba(139, 92, 246, 0.2)");
        assert_eq!(shadow_rgba("not-a-color"), "rgba(0, 0, 0, 0.2)");
    }
}
