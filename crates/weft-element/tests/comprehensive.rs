//! Comprehensive tests for weft-element
//!
//! End-to-end scenarios: building small layouts through the public
//! constructors, asserting the rendered HTML, and checking the stylesheet
//! the registry flushes for them.

use weft_element::{
    Element, StyleRegistry, above, align_bottom, align_right, background_color, behind_content,
    center_x, classify_device, column, el, fill, font_color, grid, grid_cell, grid_template,
    height, hovered, padding, pointer, px, rgb255, row, spacing, text, width, DeviceClass,
    WindowSize,
};
use weft_style::registry::{RegistryOptions, SheetMode};

fn dynamic_css(registry: &StyleRegistry) -> String {
    registry.to_css(&RegistryOptions {
        mode: SheetMode::DynamicOnly,
        ..Default::default()
    })
}

#[test]
fn test_el_renders_with_defaults_and_content() {
    let mut registry = StyleRegistry::new();
    let element = el(&mut registry, vec![], text("hello"));
    let html = element.to_html();
    assert!(html.starts_with("<div class=\"s e"));
    assert!(html.contains("wc"));
    assert!(html.contains("hc"));
    assert!(html.contains(">hello<"));
}

#[test]
fn test_shared_styles_flush_once() {
    let mut registry = StyleRegistry::new();
    let a = el(&mut registry, vec![padding(8.0)], text("a"));
    let b = el(&mut registry, vec![padding(8.0)], text("b"));
    let c = el(&mut registry, vec![padding(12.0)], text("c"));
    for element in [&a, &b, &c] {
        assert!(matches!(element, Element::Node(_)));
    }

    let css = dynamic_css(&registry);
    assert_eq!(css.matches(".pad-800-800-800-800{").count(), 1);
    assert_eq!(css.matches(".pad-1200-1200-1200-1200{").count(), 1);
}

#[test]
fn test_caller_attributes_override_component_defaults() {
    // A component wrapping `el` with its own padding default still lets the
    // caller's padding through.
    fn card(registry: &mut StyleRegistry, attrs: Vec<weft_element::Attribute>) -> Element {
        let mut all = vec![padding(16.0)];
        all.extend(attrs);
        el(registry, all, text("card"))
    }

    let mut registry = StyleRegistry::new();
    let element = card(&mut registry, vec![padding(4.0)]);
    match element {
        Element::Node(node) => {
            assert!(node.classes.contains(&"pad-400-400-400-400".to_string()));
            assert!(!node.classes.contains(&"pad-1600-1600-1600-1600".to_string()));
        }
        other => panic!("expected node, got {other:?}"),
    }
}

#[test]
fn test_row_layout_scenario() {
    let mut registry = StyleRegistry::new();
    let left = el(&mut registry, vec![width(px(100.0))], text("left"));
    let right = el(&mut registry, vec![width(fill()), align_right()], text("right"));
    let element = row(
        &mut registry,
        vec![width(fill()), spacing(10.0), padding(8.0)],
        vec![left, right],
    );

    let html = element.to_html();
    assert!(html.contains("class=\"s r cl ccy"));
    assert!(html.contains("wf"));
    assert!(html.contains("spc-1000-1000"));
    assert!(html.contains("width-px-10000"));
    assert!(html.contains(" ar\""));

    let css = dynamic_css(&registry);
    assert!(css.contains(".width-px-10000{width:100px;}"));
    assert!(css.contains("padding:8px 8px 8px 8px;"));
    // Spacing expands to sibling margins under the row class.
    assert!(css.contains(".spc-1000-1000.r > .s + .s{margin-left:10px;}"));
}

#[test]
fn test_column_with_alignment_and_color() {
    let mut registry = StyleRegistry::new();
    let red = rgb255(255.0, 0.0, 0.0).unwrap();
    let element = column(
        &mut registry,
        vec![center_x(), align_bottom(), background_color(red)],
        vec![text("body")],
    );

    match &element {
        Element::Node(node) => {
            assert!(node.classes.contains(&"cx".to_string()));
            assert!(node.classes.contains(&"ab".to_string()));
            assert!(node.classes.contains(&"bg-255-0-0-100".to_string()));
        }
        other => panic!("expected node, got {other:?}"),
    }
    let css = dynamic_css(&registry);
    assert!(css.contains(".bg-255-0-0-100{background-color:rgb(255, 0, 0);}"));
}

#[test]
fn test_hover_decoration_emits_pseudo_rule() {
    let mut registry = StyleRegistry::new();
    let red = rgb255(255.0, 0.0, 0.0).unwrap();
    let element = el(
        &mut registry,
        vec![pointer(), hovered(vec![font_color(red)])],
        text("link"),
    );
    assert!(matches!(element, Element::Node(_)));

    let css = dynamic_css(&registry);
    assert!(css.contains(".fc-255-0-0-100-hv:hover{color:rgb(255, 0, 0);}"));
}

#[test]
fn test_nearby_layers_render_in_stacking_order() {
    let mut registry = StyleRegistry::new();
    let element = el(
        &mut registry,
        vec![
            behind_content(text("backdrop")),
            above(text("tooltip")),
        ],
        text("content"),
    );

    let html = element.to_html();
    let backdrop = html.find("backdrop").unwrap();
    let content = html.find("content").unwrap();
    let tooltip = html.find("tooltip").unwrap();
    assert!(backdrop < content && content < tooltip);
    assert!(html.contains("class=\"s e bh\""));
    assert!(html.contains("class=\"s e a\""));
}

#[test]
fn test_grid_scenario() {
    let mut registry = StyleRegistry::new();
    let cell = el(&mut registry, vec![grid_cell(1, 2, 1, 1)], text("cell"));
    let element = grid(
        &mut registry,
        vec![grid_template((px(10.0), px(10.0)), vec![px(100.0), fill()], vec![fill()])],
        vec![cell],
    );

    match &element {
        Element::Node(node) => {
            assert!(node.classes.contains(&"g".to_string()));
        }
        other => panic!("expected node, got {other:?}"),
    }
    let css = dynamic_css(&registry);
    assert!(css.contains("@supports (display:grid)"));
    assert!(css.contains("grid-template-columns:100px 1fr;"));
    assert!(css.contains("grid-template-rows:1fr;"));
    assert!(css.contains("grid-row:1 / 2;"));
    assert!(css.contains("grid-column:2 / 3;"));
}

#[test]
fn test_full_sheet_serves_one_style_element() {
    let mut registry = StyleRegistry::new();
    let _page = column(
        &mut registry,
        vec![width(fill()), height(fill()), spacing(24.0)],
        vec![text("only")],
    );

    let css = registry.to_css(&RegistryOptions::default());
    let base = css.find("html,body{").unwrap();
    let dynamic = css.find("spc-2400-2400").unwrap();
    assert!(base < dynamic);
}

#[test]
fn test_registry_reset_between_render_passes() {
    let mut registry = StyleRegistry::new();
    el(&mut registry, vec![padding(8.0)], text("first pass"));
    assert!(!registry.is_empty());

    registry.reset();
    assert!(registry.is_empty());
    el(&mut registry, vec![padding(8.0)], text("second pass"));
    assert!(dynamic_css(&registry).contains("pad-800-800-800-800"));
}

#[test]
fn test_device_classification_table() {
    let phone = classify_device(WindowSize { width: 390, height: 844 });
    assert_eq!(phone.class, DeviceClass::Phone);

    let desktop = classify_device(WindowSize { width: 1680, height: 1050 });
    assert_eq!(desktop.class, DeviceClass::Desktop);
}
