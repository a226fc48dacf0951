//! Renders a small static page to stdout: the stylesheet in a `<style>`
//! element followed by the document body.
//!
//! Run with `cargo run --example gallery > gallery.html`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use weft_element::{
    Element, StyleRegistry, background_color, center_x, column, el, fill, font_color, font_size,
    height, hovered, padding, pointer, rgb255, rounded, row, spacing, text, width,
};
use weft_style::registry::RegistryOptions;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = StyleRegistry::new();
    let page = page(&mut registry)?;
    let css = registry.to_css(&RegistryOptions::default());

    println!("<!DOCTYPE html>");
    println!("<html><head><style>{css}</style></head><body>");
    println!("{}", page.to_html());
    println!("</body></html>");
    Ok(())
}

fn page(registry: &mut StyleRegistry) -> Result<Element> {
    let ink = rgb255(40.0, 40.0, 48.0)?;
    let paper = rgb255(250.0, 250.0, 252.0)?;
    let accent = rgb255(0.0, 120.0, 215.0)?;

    let heading = el(
        registry,
        vec![center_x(), font_size(32), font_color(ink)],
        text("weft gallery"),
    );

    let card = |registry: &mut StyleRegistry, label: &str| {
        el(
            registry,
            vec![
                padding(16.0),
                rounded(6.0),
                background_color(paper),
                pointer(),
                hovered(vec![background_color(accent)]),
            ],
            text(label),
        )
    };

    let card_one = card(registry, "one");
    let card_two = card(registry, "two");
    let card_three = card(registry, "three");
    let cards = row(
        registry,
        vec![width(fill()), spacing(12.0)],
        vec![card_one, card_two, card_three],
    );

    Ok(column(
        registry,
        vec![width(fill()), height(fill()), padding(24.0), spacing(20.0)],
        vec![heading, cards],
    ))
}
