#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use inspect_dom::Document;
use inspect_geometry::Rect;
use inspect_overlay::{MeasurementVisuals, OverlayRenderer, OverlayStyle};

#[test]
fn renderer_injects_a_hidden_namespaced_triple() {
    let mut doc = Document::new();
    let renderer = OverlayRenderer::new(&mut doc);

    for node in [
        renderer.outline_node(),
        renderer.padding_node(),
        renderer.tooltip_node(),
    ] {
        assert!(doc.is_inspector_node(node));
        assert_eq!(doc.declaration(node, "display"), Some("none"));
        assert_eq!(doc.declaration(node, "pointer-events"), Some("none"));
        assert_eq!(doc.declaration(node, "z-index"), Some("2147483647"));
    }
}

#[test]
fn hover_positions_outline_and_padding_layers() {
    let mut doc = Document::new();
    let root = doc.root();
    let card = doc.create_element(root, "div");
    doc.set_layout_rect(card, Rect::new(50.0, 200.0, 200.0, 100.0));
    for side in ["top", "right", "bottom", "left"] {
        doc.set_declaration(card, &format!("padding-{side}"), "10px");
    }
    doc.set_declaration(card, "border-radius", "12px");
    doc.create_text(card, "content");

    let mut renderer = OverlayRenderer::new(&mut doc);
    renderer.show_on_element(&mut doc, card);

    let outline = renderer.outline_node();
    assert_eq!(doc.declaration(outline, "display"), Some("block"));
    assert_eq!(doc.declaration(outline, "left"), Some("50px"));
    assert_eq!(doc.declaration(outline, "top"), Some("200px"));
    assert_eq!(doc.declaration(outline, "width"), Some("200px"));
    assert_eq!(doc.declaration(outline, "height"), Some("100px"));
    assert_eq!(doc.declaration(outline, "border-radius"), Some("12px"));

    let padding = renderer.padding_node();
    assert_eq!(doc.declaration(padding, "display"), Some("block"));
    assert_eq!(doc.declaration(padding, "left"), Some("60px"));
    assert_eq!(doc.declaration(padding, "top"), Some("210px"));
    assert_eq!(doc.declaration(padding, "width"), Some("180px"));
    assert_eq!(doc.declaration(padding, "height"), Some("80px"));
    // Inner radius shrinks by the adjacent padding.
    assert_eq!(doc.declaration(padding, "border-radius"), Some("2px"));
}

#[test]
fn padding_layer_stays_hidden_without_padding() {
    let mut doc = Document::new();
    let root = doc.root();
    let block = doc.create_element(root, "div");
    doc.set_layout_rect(block, Rect::new(0.0, 500.0, 100.0, 50.0));

    let mut renderer = OverlayRenderer::new(&mut doc);
    renderer.show_on_element(&mut doc, block);

    assert_eq!(
        doc.declaration(renderer.padding_node(), "display"),
        Some("none")
    );
    assert_eq!(
        doc.declaration(renderer.outline_node(), "display"),
        Some("block")
    );
}

#[test]
fn tooltip_flips_below_near_the_scrolled_top() {
    let mut doc = Document::new();
    let root = doc.root();
    let near_top = doc.create_element(root, "div");
    doc.set_layout_rect(near_top, Rect::new(10.0, 20.0, 100.0, 40.0));
    doc.create_text(near_top, "text");

    let mut renderer = OverlayRenderer::new(&mut doc);
    renderer.show_on_element(&mut doc, near_top);

    let top: f64 = doc
        .declaration(renderer.tooltip_node(), "top")
        .unwrap()
        .trim_end_matches("px")
        .parse()
        .unwrap();
    // Not enough room above, so the tooltip sits under the element.
    assert_eq!(top, 65.0);
}

#[test]
fn tooltip_content_follows_the_element_kind() {
    let mut doc = Document::new();
    let root = doc.root();
    let image = doc.create_element(root, "img");
    doc.set_layout_rect(image, Rect::new(0.0, 800.0, 300.0, 150.0));
    doc.set_attribute(image, "src", "photo.png");
    doc.set_natural_size(image, 600.0, 300.0);

    let mut renderer = OverlayRenderer::new(&mut doc);
    renderer.show_on_element(&mut doc, image);

    let text = doc.text_content(renderer.tooltip_node());
    assert!(text.starts_with("<img> 300\u{d7}150px"));
    assert!(text.contains("type: PNG"));
    assert!(text.contains("natural: 600\u{d7}300px"));
}

#[test]
fn style_change_rescales_tooltip_chrome() {
    let mut doc = Document::new();
    let mut renderer = OverlayRenderer::new(&mut doc);

    renderer.set_style(
        &mut doc,
        OverlayStyle {
            primary: "#F59E0B".to_owned(),
            font_size_px: 18,
            ..OverlayStyle::default()
        },
    );

    let tooltip = renderer.tooltip_node();
    assert_eq!(doc.declaration(tooltip, "font-size"), Some("18px"));
    assert_eq!(doc.declaration(tooltip, "padding"), Some("12px 18px"));
    assert_eq!(doc.declaration(tooltip, "max-width"), Some("450px"));
    assert_eq!(
        doc.declaration(tooltip, "border"),
        Some("3px solid #F59E0B")
    );
    assert_eq!(
        doc.declaration(tooltip, "box-shadow"),
        Some("0 4px 12px rgba(245, 158, 11, 0.2)")
    );
}

#[test]
fn highlight_nodes_are_numbered_per_endpoint() {
    let mut doc = Document::new();
    let mut visuals = MeasurementVisuals::new();

    visuals.show_highlight(&mut doc, &Rect::new(0.0, 0.0, 40.0, 40.0), "#EC4899");
    visuals.show_highlight(&mut doc, &Rect::new(100.0, 0.0, 40.0, 40.0), "#EC4899");

    let root = doc.root();
    let ids: Vec<&str> = doc
        .children(root)
        .filter_map(|node| doc.attribute(node, "id"))
        .collect();
    assert!(ids.contains(&"pixelscope-measure-highlight-1"));
    assert!(ids.contains(&"pixelscope-measure-highlight-2"));

    visuals.clear_measurement(&mut doc);
    assert_eq!(doc.children(root).count(), 0);
}

#[test]
fn destroy_removes_every_injected_node() {
    let mut doc = Document::new();
    let renderer = OverlayRenderer::new(&mut doc);
    let nodes = [
        renderer.outline_node(),
        renderer.padding_node(),
        renderer.tooltip_node(),
    ];
    renderer.destroy(&mut doc);
    for node in nodes {
        assert!(!doc.contains(node));
    }
}
