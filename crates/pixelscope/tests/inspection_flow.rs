#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc)]

use std::time::{Duration, Instant};

use inspect_export::{to_css, to_json};
use inspect_geometry::Rect;
use pixelscope::{
    ClickOutcome, Document, InspectorEngine, Mode, NodeId, NoopHooks, Request, Response, ThemeMode,
};

fn sample_page() -> (Document, NodeId, NodeId) {
    let mut doc = Document::new();
    let root = doc.root();

    let header = doc.create_element(root, "header");
    doc.set_attribute(header, "id", "site-header");
    doc.set_layout_rect(header, Rect::new(0.0, 0.0, 800.0, 60.0));
    doc.set_declaration(header, "display", "block");
    doc.set_declaration(header, "position", "static");

    let card = doc.create_element(root, "div");
    doc.set_attribute(card, "class", "card");
    doc.set_layout_rect(card, Rect::new(100.0, 110.0, 300.0, 200.0));
    for (name, value) in [
        ("display", "block"),
        ("position", "static"),
        ("padding-top", "12px"),
        ("padding-right", "12px"),
        ("padding-bottom", "12px"),
        ("padding-left", "12px"),
        ("margin-top", "0px"),
        ("margin-right", "0px"),
        ("margin-bottom", "0px"),
        ("margin-left", "0px"),
        ("font-family", "Georgia, serif"),
        ("font-size", "16px"),
        ("font-weight", "400"),
        ("line-height", "24px"),
        ("color", "rgb(31, 41, 55)"),
        ("width", "300px"),
        ("height", "200px"),
    ] {
        doc.set_declaration(card, name, value);
    }

    (doc, header, card)
}

#[test]
fn hover_measure_capture_export() {
    pixelscope::init_logging();
    let (doc, header, card) = sample_page();
    let mut engine = InspectorEngine::new(doc, NoopHooks, None, ThemeMode::Light);
    let start = Instant::now();

    // Activation through the protocol.
    let answer = engine.dispatch(Request::ToggleInspection { enabled: true });
    assert_eq!(answer, Response::Ack { success: true });
    assert_eq!(engine.doc().cursor(), Some("crosshair"));

    // Hover redraws the overlay over the card.
    engine.pointer_move(Some(card));

    // Two clicks measure header-to-card distance: vertical gap only.
    assert_eq!(engine.click(header, start), ClickOutcome::FirstSelected);
    let ClickOutcome::MeasurementShown(result) = engine.click(card, start) else {
        panic!("expected a measurement");
    };
    assert_eq!(result.horizontal_gap, 0.0);
    assert_eq!(result.vertical_gap, 50.0);
    assert!((result.edge_distance - 50.0).abs() < 1e-9);

    // The display auto-clears after the reset delay.
    assert!(engine.poll(start + Duration::from_millis(3100)));
    assert_eq!(engine.mode(), Mode::Hovering);

    // Capture for the detail panel ends inspection and lands in history.
    engine.pointer_move(Some(card));
    let snapshot = engine.capture_hovered(1_700_000_000_000).unwrap();
    assert_eq!(engine.mode(), Mode::Idle);
    assert_eq!(engine.history().len(), 1);

    let css = to_css(&snapshot);
    assert!(css.starts_with("div.card {\n"));
    assert!(css.contains("  padding: 12px;\n"));
    assert!(css.contains("  font-family: Georgia, serif;\n"));

    let json = to_json(&snapshot).unwrap();
    assert!(json.contains(r#""selector": "div.card""#));
}

#[test]
fn toggling_off_mid_measurement_leaves_no_residue() {
    let (doc, header, card) = sample_page();
    let mut engine = InspectorEngine::new(doc, NoopHooks, None, ThemeMode::Dark);
    let start = Instant::now();

    engine.dispatch(Request::ToggleInspection { enabled: true });
    engine.click(header, start);
    engine.click(card, start);
    engine.dispatch(Request::ToggleInspection { enabled: false });

    assert_eq!(engine.mode(), Mode::Idle);
    assert_eq!(engine.doc().cursor(), None);
    // The auto-reset deadline died with the session.
    assert!(!engine.poll(start + Duration::from_secs(10)));

    // No injected node survives teardown.
    let root = engine.doc().root();
    let leftovers: Vec<NodeId> = engine
        .doc()
        .children(root)
        .filter(|&node| engine.doc().is_inspector_node(node))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn preferences_clamp_and_propagate_without_re_toggle() {
    let (doc, _, card) = sample_page();
    let stored = r#"{"overlayColor":"teal","tooltipFontSizePx":99}"#;
    let mut engine = InspectorEngine::new(doc, NoopHooks, Some(stored), ThemeMode::Light);
    assert_eq!(engine.preferences().tooltip_font_size_px, 20);

    engine.dispatch(Request::ToggleInspection { enabled: true });
    engine.pointer_move(Some(card));

    let raw = r#"{"action":"updatePreferences","preferences":{"overlayColor":"green","tooltipFontSizePx":4}}"#;
    let answer = engine.dispatch_json(raw).unwrap();
    assert_eq!(answer, r#"{"success":true}"#);
    assert_eq!(engine.preferences().tooltip_font_size_px, 10);
    assert_eq!(engine.mode(), Mode::Hovering);
}

#[test]
fn saved_elements_obey_the_history_cap() {
    let (doc, _, card) = sample_page();
    let mut engine = InspectorEngine::new(doc, NoopHooks, None, ThemeMode::Light);

    for index in 0..12_u64 {
        engine.dispatch(Request::ToggleInspection { enabled: true });
        engine.pointer_move(Some(card));
        assert!(engine.capture_hovered(index).is_some());
    }
    assert_eq!(engine.history().len(), 10);
    let newest = engine.history().items().next().unwrap();
    assert_eq!(newest.timestamp_ms, 11);
}
