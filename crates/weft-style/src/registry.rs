//! Stylesheet registry
//!
//! One registry lives for one render pass. Nodes register the dynamic
//! [`Style`] values they use; the registry keeps the first occurrence of
//! each generated class name and flushes everything to a single compact
//! stylesheet at the end of the pass. Two nodes with the same style value
//! share one rule; the class name is the dedup key.

use std::collections::HashSet;

use crate::color::{Color, Notation};
use crate::rules::{self, Class, prop};
use crate::sheet::{self, classes};
use crate::style::{Shadow, Style};

/// Whether the flush includes the static base sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetMode {
    /// Base sheet + dynamic rules; the usual single-`<style>` output.
    #[default]
    Full,
    /// Dynamic rules only, for documents that serve the base sheet
    /// separately.
    DynamicOnly,
}

/// The focus ring applied to focusable elements.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusStyle {
    pub border_color: Option<Color>,
    pub background_color: Option<Color>,
    pub shadow: Option<Shadow>,
}

impl Default for FocusStyle {
    fn default() -> Self {
        FocusStyle {
            border_color: None,
            background_color: None,
            shadow: Some(Shadow {
                color: Color::Rgba {
                    red: 155.0 / 255.0,
                    green: 203.0 / 255.0,
                    blue: 1.0,
                    alpha: 1.0,
                    notation: Notation::Rgb255,
                },
                offset: (0.0, 0.0),
                blur: 0.0,
                size: 3.0,
                inset: false,
            }),
        }
    }
}

/// Options for one stylesheet flush.
#[derive(Debug, Clone, Default)]
pub struct RegistryOptions {
    pub mode: SheetMode,
    pub focus: FocusStyle,
}

/// Per-render-pass collection of distinct dynamic styles.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    seen: HashSet<String>,
    styles: Vec<Style>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style; returns false when its class is already present.
    pub fn register(&mut self, style: Style) -> bool {
        let name = style.class_name();
        if name.is_empty() || !self.seen.insert(name) {
            return false;
        }
        self.styles.push(style);
        true
    }

    /// Has a class name already been registered?
    pub fn is_registered(&self, class_name: &str) -> bool {
        self.seen.contains(class_name)
    }

    /// Number of distinct registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Drop all registered styles for a fresh render pass.
    pub fn reset(&mut self) {
        self.seen.clear();
        self.styles.clear();
    }

    /// Flush to one compact stylesheet string.
    pub fn to_css(&self, options: &RegistryOptions) -> String {
        tracing::debug!(
            styles = self.styles.len(),
            mode = ?options.mode,
            "rendering stylesheet"
        );
        let mut out = String::new();
        if options.mode == SheetMode::Full {
            out.push_str(sheet::base_rules());
            out.push_str(&focus_rules(&options.focus));
        }
        for style in &self.styles {
            out.push_str(&style.render_css());
        }
        out
    }
}

/// Render the focus ring rules for focusable elements.
fn focus_rules(focus: &FocusStyle) -> String {
    let mut props = Vec::new();
    if let Some(color) = &focus.border_color {
        props.push(prop("border-color", &color.format_css()));
    }
    if let Some(color) = &focus.background_color {
        props.push(prop("background-color", &color.format_css()));
    }
    if let Some(shadow) = &focus.shadow {
        props.push(prop("box-shadow", &shadow.format_box_shadow()));
    }
    props.push(prop("outline", "none"));

    rules::render(&[
        Class::new(
            format!(".{}.{}:focus", classes::ANY, classes::FOCUSABLE),
            props.clone(),
        ),
        Class::new(
            format!(".{}:focus-within", classes::ANY),
            props,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb255;

    #[test]
    fn test_register_dedups_by_class_name() {
        let mut registry = StyleRegistry::new();
        assert!(registry.register(Style::padding(8.0, 8.0, 8.0, 8.0)));
        assert!(!registry.register(Style::padding(8.0, 8.0, 8.0, 8.0)));
        assert!(registry.register(Style::padding(8.0, 8.0, 8.0, 9.0)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_shared_value_emits_one_rule() {
        let mut registry = StyleRegistry::new();
        registry.register(Style::padding(8.0, 8.0, 8.0, 8.0));
        registry.register(Style::padding(8.0, 8.0, 8.0, 8.0));

        let css = registry.to_css(&RegistryOptions {
            mode: SheetMode::DynamicOnly,
            ..Default::default()
        });
        assert_eq!(css.matches("pad-800-800-800-800{").count(), 1);
    }

    #[test]
    fn test_full_mode_includes_base_sheet() {
        let registry = StyleRegistry::new();
        let css = registry.to_css(&RegistryOptions::default());
        assert!(css.contains("html,body{"));
        assert!(css.contains(":focus"));
    }

    #[test]
    fn test_dynamic_only_omits_base_sheet() {
        let mut registry = StyleRegistry::new();
        registry.register(Style::spacing(4.0, 4.0));
        let css = registry.to_css(&RegistryOptions {
            mode: SheetMode::DynamicOnly,
            ..Default::default()
        });
        assert!(!css.contains("html,body{"));
        assert!(css.contains("spc-400-400"));
    }

    #[test]
    fn test_default_focus_ring() {
        let css = focus_rules(&FocusStyle::default());
        assert!(css.contains(".s.fcb:focus{box-shadow:0px 0px 0px 3px rgb(155, 203, 255);outline:none;}"));
    }

    #[test]
    fn test_focus_override() {
        let custom = FocusStyle {
            border_color: Some(rgb255(255.0, 0.0, 0.0).unwrap()),
            background_color: None,
            shadow: None,
        };
        let css = focus_rules(&custom);
        assert!(css.contains("border-color:rgb(255, 0, 0);"));
        assert!(!css.contains("box-shadow"));
    }

    #[test]
    fn test_distinct_colors_keep_distinct_rules() {
        // hsl(120, 0%, 50%) and rgb(120, 0, 50) share the same scaled
        // digits; both rules must survive the name-keyed dedup.
        use crate::color::hsl;

        let gray = hsl(120.0, 0.0, 0.5).unwrap();
        let red = rgb255(120.0, 0.0, 50.0).unwrap();

        let mut registry = StyleRegistry::new();
        for color in [gray, red] {
            registry.register(Style::Colored {
                class: format!("bg-{}", color.format_class()),
                prop: "background-color".to_string(),
                color,
            });
        }
        assert_eq!(registry.len(), 2);

        let css = registry.to_css(&RegistryOptions {
            mode: SheetMode::DynamicOnly,
            ..Default::default()
        });
        assert!(css.contains(".bg-hsl-120-0-50-100{background-color:hsl(120, 0%, 50%);}"));
        assert!(css.contains(".bg-120-0-50-100{background-color:rgb(120, 0, 50);}"));
    }

    #[test]
    fn test_reset_clears_registry() {
        let mut registry = StyleRegistry::new();
        registry.register(Style::padding(1.0, 1.0, 1.0, 1.0));
        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.register(Style::padding(1.0, 1.0, 1.0, 1.0)));
    }
}
