//! Pixelscope, an element inspector: hover tooltips of computed CSS,
//! two-click pixel measurement, and snapshot capture with CSS/JSON export.
//!
//! This crate wires the per-concern crates into one [`InspectorEngine`]
//! that owns the document model, the inspection session, preferences, and
//! the capture history, and dispatches the external request protocol.

#![forbid(unsafe_code)]

pub mod engine;

pub use engine::InspectorEngine;
pub use inspect_dom::{Document, NodeId};
pub use inspect_geometry::{MeasurementResult, Point, Rect, measure};
pub use inspect_messaging::{History, PreferenceStore, Preferences, Request, Response};
pub use inspect_overlay::{OverlayColorName, OverlayStyle, ThemeMode, overlay_color};
pub use inspect_session::{ClickOutcome, EventHooks, Mode, NoopHooks};
pub use inspect_style::{ElementSnapshot, StyleRecord, create_snapshot};

/// Logger setup for binaries and tests; repeated calls are harmless.
pub fn init_logging() {
    let _unused = env_logger::builder().try_init();
}
