//! The inspector engine: one document, one session, process-wide
//! preferences, and the capture history, driven by the request protocol.

use std::time::Instant;

use anyhow::Context;
use inspect_dom::{Document, NodeId};
use inspect_messaging::{History, PreferenceStore, Preferences, Request, Response};
use inspect_overlay::{OverlayStyle, ThemeMode, overlay_color};
use inspect_session::{ClickOutcome, EventHooks, InspectionSession, Mode};
use inspect_style::{ElementSnapshot, create_snapshot};

pub struct InspectorEngine<Hooks: EventHooks> {
    doc: Document,
    session: InspectionSession<Hooks>,
    store: PreferenceStore,
    history: History,
    theme_mode: ThemeMode,
}

/// Resolve stored preferences against the page theme into overlay colors.
fn resolve_style(preferences: Preferences, mode: ThemeMode) -> OverlayStyle {
    let color = overlay_color(preferences.overlay_color, mode);
    OverlayStyle {
        primary: color.value.to_owned(),
        contrast: color.contrast.to_owned(),
        font_size_px: preferences.tooltip_font_size_px,
        ..OverlayStyle::default()
    }
}

impl<Hooks: EventHooks> InspectorEngine<Hooks> {
    /// Build an engine over `doc`. `stored_preferences` is the raw persisted
    /// JSON, if any; malformed input falls back to defaults.
    pub fn new(
        mut doc: Document,
        hooks: Hooks,
        stored_preferences: Option<&str>,
        theme_mode: ThemeMode,
    ) -> Self {
        let store = PreferenceStore::load(stored_preferences);
        let mut session = InspectionSession::new(hooks);
        session.apply_style(&mut doc, resolve_style(store.current(), theme_mode));
        Self {
            doc,
            session,
            store,
            history: History::new(),
            theme_mode,
        }
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn preferences(&self) -> Preferences {
        self.store.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handle one protocol request. Always answers; failures surface as
    /// unsuccessful acks rather than errors.
    pub fn dispatch(&mut self, request: Request) -> Response {
        match request {
            Request::GetInspectionState => Response::State {
                enabled: self.session.is_enabled(),
            },
            Request::ToggleInspection { enabled } => {
                self.session.toggle(&mut self.doc, enabled);
                Response::Ack {
                    success: self.session.is_enabled() == enabled,
                }
            }
            Request::UpdatePreferences { preferences } => {
                let applied = self.store.update(preferences);
                self.session
                    .apply_style(&mut self.doc, resolve_style(applied, self.theme_mode));
                Response::Ack { success: true }
            }
            Request::SaveInspectedElement { element } => {
                self.history.push(element);
                Response::Ack { success: true }
            }
        }
    }

    /// Handle a request arriving as JSON and answer in kind.
    pub fn dispatch_json(&mut self, raw: &str) -> anyhow::Result<String> {
        let request: Request = serde_json::from_str(raw).context("decoding request")?;
        let response = self.dispatch(request);
        serde_json::to_string(&response).context("encoding response")
    }

    pub fn pointer_move(&mut self, target: Option<NodeId>) {
        self.session.pointer_move(&mut self.doc, target);
    }

    pub fn click(&mut self, target: NodeId, now: Instant) -> ClickOutcome {
        self.session.click(&mut self.doc, target, now)
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        self.session.poll(&mut self.doc, now)
    }

    pub fn cancel(&mut self) {
        self.session.cancel(&mut self.doc);
    }

    /// Snapshot the hovered element for the detail panel. Opening the panel
    /// ends inspection, so the session is torn down on success.
    pub fn capture_hovered(&mut self, timestamp_ms: u64) -> Option<ElementSnapshot> {
        let hovered = self.session.hovered()?;
        let snapshot = create_snapshot(&self.doc, hovered, timestamp_ms)?;
        self.history.push(snapshot.clone());
        self.session.toggle(&mut self.doc, false);
        Some(snapshot)
    }

    /// Switch light/dark palette resolution and re-theme any live overlay.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        let style = resolve_style(self.store.current(), mode);
        self.session.apply_style(&mut self.doc, style);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use inspect_geometry::Rect;
    use inspect_overlay::OverlayColorName;
    use inspect_session::NoopHooks;

    use super::*;

    fn engine_with_page() -> (InspectorEngine<NoopHooks>, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let element = doc.create_element(root, "button");
        doc.set_layout_rect(element, Rect::new(10.0, 10.0, 80.0, 30.0));
        let engine = InspectorEngine::new(doc, NoopHooks, None, ThemeMode::Light);
        (engine, element)
    }

    #[test]
    fn toggle_round_trip_through_json() {
        let (mut engine, _) = engine_with_page();
        let answer = engine
            .dispatch_json(r#"{"action":"toggleInspection","enabled":true}"#)
            .unwrap();
        assert_eq!(answer, r#"{"success":true}"#);
        let state = engine
            .dispatch_json(r#"{"action":"getInspectionState"}"#)
            .unwrap();
        assert_eq!(state, r#"{"enabled":true}"#);
    }

    #[test]
    fn preference_change_re_themes_live_session() {
        let (mut engine, element) = engine_with_page();
        engine.dispatch(Request::ToggleInspection { enabled: true });
        engine.pointer_move(Some(element));

        engine.dispatch(Request::UpdatePreferences {
            preferences: Preferences {
                overlay_color: OverlayColorName::Blue,
                tooltip_font_size_px: 16,
            },
        });
        assert_eq!(engine.preferences().tooltip_font_size_px, 16);
        assert_eq!(engine.mode(), Mode::Hovering);
    }

    #[test]
    fn capture_saves_to_history_and_ends_inspection() {
        let (mut engine, element) = engine_with_page();
        engine.dispatch(Request::ToggleInspection { enabled: true });
        engine.pointer_move(Some(element));

        let snapshot = engine.capture_hovered(1_000).unwrap();
        assert_eq!(snapshot.tag, "button");
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.mode(), Mode::Idle);
    }
}
