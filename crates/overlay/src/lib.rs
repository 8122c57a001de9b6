//! Overlay rendering: the highlight box, padding box and tooltip drawn over
//! the hovered element, plus the measurement visuals.
//!
//! Layer geometry is computed purely ([`frame`]) and then applied to the
//! injected overlay nodes, so positioning is testable without any display.

#![forbid(unsafe_code)]

pub mod content;
pub mod frame;
pub mod renderer;
pub mod theme;
pub mod visuals;

pub use content::{TooltipContent, TooltipLine, render_text, tooltip_content};
pub use frame::{FrameInputs, OverlayFrame, compute_frame, inner_border_radius};
pub use renderer::{OverlayRenderer, OverlayStyle};
pub use theme::{ColorOption, OverlayColorName, ThemeMode, overlay_color, shadow_rgba};
pub use visuals::MeasurementVisuals;
