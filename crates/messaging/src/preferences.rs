//! User preferences with tolerant loading.

use inspect_overlay::OverlayColorName;
use serde::{Deserialize, Serialize};

pub const MIN_TOOLTIP_FONT_SIZE_PX: u32 = 10;
pub const MAX_TOOLTIP_FONT_SIZE_PX: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub overlay_color: OverlayColorName,
    pub tooltip_font_size_px: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            overlay_color: OverlayColorName::Purple,
            tooltip_font_size_px: 12,
        }
    }
}

impl Preferences {
    /// Constrain the font size to the supported range. Applied on every
    /// load and update so out-of-range stored values cannot leak through.
    pub fn clamped(mut self) -> Self {
        self.tooltip_font_size_px = self
            .tooltip_font_size_px
            .clamp(MIN_TOOLTIP_FONT_SIZE_PX, MAX_TOOLTIP_FONT_SIZE_PX);
        self
    }
}

/// Process-wide preference state with a load-once lifecycle. Malformed
/// stored JSON falls back to defaults rather than failing activation.
#[derive(Clone, Debug, Default)]
pub struct PreferenceStore {
    current: Preferences,
}

impl PreferenceStore {
    pub fn load(stored_json: Option<&str>) -> Self {
        let current = match stored_json {
            Some(raw) => match serde_json::from_str::<Preferences>(raw) {
                Ok(preferences) => preferences.clamped(),
                Err(error) => {
                    log::warn!("ignoring malformed stored preferences: {error}");
                    Preferences::default()
                }
            },
            None => Preferences::default(),
        };
        Self { current }
    }

    pub fn current(&self) -> Preferences {
        self.current
    }

    pub fn update(&mut self, preferences: Preferences) -> Preferences {
        self.current = preferences.clamped();
        self.current
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.current)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn font_size_is_clamped_on_load() {
        let store =
            PreferenceStore::load(Some(r#"{"overlayColor":"blue","tooltipFontSizePx":64}"#));
        assert_eq!(store.current().tooltip_font_size_px, 20);
        assert_eq!(store.current().overlay_color, OverlayColorName::Blue);

        let store = PreferenceStore::load(Some(r#"{"tooltipFontSizePx":3}"#));
        assert_eq!(store.current().tooltip_font_size_px, 10);
    }

    #[test]
    fn malformed_storage_falls_back_to_defaults() {
        let store = PreferenceStore::load(Some("not json"));
        assert_eq!(store.current(), Preferences::default());
        assert_eq!(PreferenceStore::load(None).current(), Preferences::default());
    }

    #[test]
    fn update_clamps() {
        let mut store = PreferenceStore::default();
        let applied = store.update(Preferences {
            overlay_color: OverlayColorName::Red,
            tooltip_font_size_px: 5,
        });
        assert_eq!(applied.tooltip_font_size_px, 10);
    }
}
