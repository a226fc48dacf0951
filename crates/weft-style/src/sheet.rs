//! Static base stylesheet
//!
//! The fixed rule set every document gets before any dynamic styles: flex
//! resets, the layout-context classes (row/column/single/page/paragraph/
//! grid), nearby-element positioning, width/height behavior, and input
//! resets. Alignment rules are generated parametrically over the six
//! alignments crossed with each container context rather than written out
//! by hand.

use std::sync::OnceLock;

use crate::rules::{Class, Rule, prop, render};

/// Generated class-name constants.
///
/// Short names keep the class attribute compact; they are part of the
/// published surface and never renamed.
pub mod classes {
    pub const ROOT: &str = "ui";
    pub const ANY: &str = "s";
    pub const SINGLE: &str = "e";
    pub const ROW: &str = "r";
    pub const COLUMN: &str = "c";
    pub const PAGE: &str = "pg";
    pub const PARAGRAPH: &str = "p";
    pub const TEXT: &str = "t";
    pub const GRID: &str = "g";
    pub const IMAGE_CONTAINER: &str = "ic";
    pub const WRAPPED: &str = "wrp";

    pub const WIDTH_CONTENT: &str = "wc";
    pub const WIDTH_FILL: &str = "wf";
    pub const WIDTH_EXACT: &str = "we";
    pub const WIDTH_FILL_PORTION: &str = "wfp";
    pub const HEIGHT_CONTENT: &str = "hc";
    pub const HEIGHT_FILL: &str = "hf";
    pub const HEIGHT_EXACT: &str = "he";
    pub const HEIGHT_FILL_PORTION: &str = "hfp";

    pub const ALIGN_TOP: &str = "at";
    pub const ALIGN_BOTTOM: &str = "ab";
    pub const ALIGN_RIGHT: &str = "ar";
    pub const ALIGN_LEFT: &str = "al";
    pub const CENTER_X: &str = "cx";
    pub const CENTER_Y: &str = "cy";

    pub const CONTENT_TOP: &str = "ct";
    pub const CONTENT_BOTTOM: &str = "cb";
    pub const CONTENT_RIGHT: &str = "cr";
    pub const CONTENT_LEFT: &str = "cl";
    pub const CONTENT_CENTER_X: &str = "ccx";
    pub const CONTENT_CENTER_Y: &str = "ccy";
    pub const SPACE_EVENLY: &str = "sev";

    pub const ABOVE: &str = "a";
    pub const BELOW: &str = "b";
    pub const ON_RIGHT: &str = "or";
    pub const ON_LEFT: &str = "ol";
    pub const IN_FRONT: &str = "fr";
    pub const BEHIND: &str = "bh";

    pub const TRANSPARENT: &str = "clr";
    pub const OPAQUE: &str = "oq";
    pub const HOVER: &str = "hv";
    pub const FOCUS: &str = "fcs";
    pub const ACTIVE: &str = "atv";
    pub const FOCUSABLE: &str = "fcb";

    pub const CURSOR_POINTER: &str = "cptr";
    pub const CURSOR_TEXT: &str = "ctxt";
    pub const NO_TEXT_SELECTION: &str = "notxt";
    pub const PASS_POINTER_EVENTS: &str = "ppe";
    pub const CAPTURE_POINTER_EVENTS: &str = "cpe";

    pub const OVERFLOW_HIDDEN: &str = "oh";
    pub const SCROLLBARS: &str = "sb";
    pub const SCROLLBARS_X: &str = "sbx";
    pub const SCROLLBARS_Y: &str = "sby";

    pub const BORDER_NONE: &str = "bn";
    pub const BORDER_DASHED: &str = "bd";
    pub const BORDER_DOTTED: &str = "bdt";
    pub const BORDER_SOLID: &str = "bs";

    pub const TEXT_LEFT: &str = "tl";
    pub const TEXT_RIGHT: &str = "tr";
    pub const TEXT_CENTER: &str = "tc";
    pub const TEXT_JUSTIFY: &str = "tj";
    pub const TEXT_UNDERLINE: &str = "tu";
    pub const TEXT_STRIKE: &str = "ts";
    pub const ITALIC: &str = "i";

    pub const INPUT_TEXT: &str = "it";
    pub const INPUT_MULTILINE: &str = "iml";
}

use classes as c;

/// The six alignment axes used by the parametric alignment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Top,
    Bottom,
    Right,
    Left,
    CenterX,
    CenterY,
}

pub const ALIGNMENTS: [Alignment; 6] = [
    Alignment::Top,
    Alignment::Bottom,
    Alignment::Right,
    Alignment::Left,
    Alignment::CenterX,
    Alignment::CenterY,
];

impl Alignment {
    /// Class placed on a child that aligns itself.
    pub fn self_class(self) -> &'static str {
        match self {
            Alignment::Top => c::ALIGN_TOP,
            Alignment::Bottom => c::ALIGN_BOTTOM,
            Alignment::Right => c::ALIGN_RIGHT,
            Alignment::Left => c::ALIGN_LEFT,
            Alignment::CenterX => c::CENTER_X,
            Alignment::CenterY => c::CENTER_Y,
        }
    }

    /// Class placed on a container that aligns its content.
    pub fn content_class(self) -> &'static str {
        match self {
            Alignment::Top => c::CONTENT_TOP,
            Alignment::Bottom => c::CONTENT_BOTTOM,
            Alignment::Right => c::CONTENT_RIGHT,
            Alignment::Left => c::CONTENT_LEFT,
            Alignment::CenterX => c::CONTENT_CENTER_X,
            Alignment::CenterY => c::CONTENT_CENTER_Y,
        }
    }
}

/// Generate the alignment rules for one container context.
///
/// For each alignment, `describe` returns the rules for the container's
/// content-alignment class and the rules for a child's self-alignment class.
fn describe_alignment(
    describe: impl Fn(Alignment) -> (Vec<Rule>, Vec<Rule>),
) -> Rule {
    let mut out = Vec::new();
    for alignment in ALIGNMENTS {
        let (content, indiv) = describe(alignment);
        if !content.is_empty() {
            out.push(Rule::Descriptor(
                format!(".{}", alignment.content_class()),
                content,
            ));
        }
        if !indiv.is_empty() {
            out.push(Rule::Child(
                format!(".{}", c::ANY),
                vec![Rule::Descriptor(
                    format!(".{}", alignment.self_class()),
                    indiv,
                )],
            ));
        }
    }
    Rule::Batch(out)
}

fn el_description(alignment: Alignment) -> (Vec<Rule>, Vec<Rule>) {
    // Single elements are columns of one: vertical is justify, horizontal
    // is align-items.
    match alignment {
        Alignment::Top => (
            vec![prop("justify-content", "flex-start")],
            vec![prop("margin-bottom", "auto")],
        ),
        Alignment::Bottom => (
            vec![prop("justify-content", "flex-end")],
            vec![prop("margin-top", "auto")],
        ),
        Alignment::Right => (
            vec![prop("align-items", "flex-end")],
            vec![prop("align-self", "flex-end")],
        ),
        Alignment::Left => (
            vec![prop("align-items", "flex-start")],
            vec![prop("align-self", "flex-start")],
        ),
        Alignment::CenterX => (
            vec![prop("align-items", "center")],
            vec![prop("align-self", "center")],
        ),
        Alignment::CenterY => (
            vec![prop("justify-content", "center")],
            vec![prop("margin-top", "auto"), prop("margin-bottom", "auto")],
        ),
    }
}

fn row_description(alignment: Alignment) -> (Vec<Rule>, Vec<Rule>) {
    match alignment {
        Alignment::Top => (
            vec![prop("align-items", "flex-start")],
            vec![prop("align-self", "flex-start")],
        ),
        Alignment::Bottom => (
            vec![prop("align-items", "flex-end")],
            vec![prop("align-self", "flex-end")],
        ),
        Alignment::Right => (
            vec![prop("justify-content", "flex-end")],
            vec![prop("margin-left", "auto")],
        ),
        Alignment::Left => (
            vec![prop("justify-content", "flex-start")],
            vec![prop("margin-right", "auto")],
        ),
        Alignment::CenterX => (
            vec![prop("justify-content", "center")],
            vec![prop("margin-left", "auto"), prop("margin-right", "auto")],
        ),
        Alignment::CenterY => (
            vec![prop("align-items", "center")],
            vec![prop("align-self", "center")],
        ),
    }
}

fn column_description(alignment: Alignment) -> (Vec<Rule>, Vec<Rule>) {
    match alignment {
        Alignment::Top => (
            vec![prop("justify-content", "flex-start")],
            vec![prop("margin-bottom", "auto")],
        ),
        Alignment::Bottom => (
            vec![prop("justify-content", "flex-end")],
            vec![prop("margin-top", "auto")],
        ),
        Alignment::Right => (
            vec![prop("align-items", "flex-end")],
            vec![prop("align-self", "flex-end")],
        ),
        Alignment::Left => (
            vec![prop("align-items", "flex-start")],
            vec![prop("align-self", "flex-start")],
        ),
        Alignment::CenterX => (
            vec![prop("align-items", "center")],
            vec![prop("align-self", "center")],
        ),
        Alignment::CenterY => (
            vec![prop("justify-content", "center")],
            vec![prop("margin-top", "auto"), prop("margin-bottom", "auto")],
        ),
    }
}

fn grid_description(alignment: Alignment) -> (Vec<Rule>, Vec<Rule>) {
    match alignment {
        Alignment::Top => (
            vec![prop("justify-content", "flex-start")],
            vec![prop("justify-self", "start")],
        ),
        Alignment::Bottom => (
            vec![prop("justify-content", "flex-end")],
            vec![prop("justify-self", "end")],
        ),
        Alignment::Right => (
            vec![prop("align-items", "flex-end")],
            vec![prop("align-self", "end")],
        ),
        Alignment::Left => (
            vec![prop("align-items", "flex-start")],
            vec![prop("align-self", "start")],
        ),
        Alignment::CenterX => (
            vec![prop("align-items", "center")],
            vec![prop("align-self", "center")],
        ),
        Alignment::CenterY => (
            vec![prop("justify-content", "center")],
            vec![prop("justify-self", "center")],
        ),
    }
}

fn nearby(class: &str, z_index: &str, position: Vec<Rule>) -> Class {
    let mut rules = vec![
        prop("position", "absolute"),
        prop("z-index", z_index),
        prop("margin", "0 !important"),
        prop("pointer-events", "none"),
    ];
    rules.extend(position);
    rules.push(Rule::Child(
        format!(".{}", c::HEIGHT_FILL),
        vec![prop("height", "auto")],
    ));
    rules.push(Rule::Child(
        format!(".{}", c::WIDTH_FILL),
        vec![prop("width", "100%")],
    ));
    rules.push(Rule::AllChildren(
        format!(".{}", c::ANY),
        vec![prop("pointer-events", "auto")],
    ));
    Class::new(format!(".{}.{class}", c::ANY), rules)
}

fn dot(class: &str) -> String {
    format!(".{class}")
}

fn base_classes() -> Vec<Class> {
    let any = dot(c::ANY);
    let mut out = vec![
        Class::new(
            "html,body".to_string(),
            vec![
                prop("height", "100%"),
                prop("padding", "0"),
                prop("margin", "0"),
            ],
        ),
        Class::new(
            format!("{any}.{}", c::ROOT),
            vec![
                prop("width", "100%"),
                prop("height", "auto"),
                prop("min-height", "100%"),
                prop("z-index", "0"),
            ],
        ),
        // Element reset: every node is a non-shrinking flex row by default.
        Class::new(
            any.clone(),
            vec![
                prop("position", "relative"),
                prop("border", "none"),
                prop("flex-shrink", "0"),
                prop("display", "flex"),
                prop("flex-direction", "row"),
                prop("flex-basis", "auto"),
                prop("resize", "none"),
                prop("box-sizing", "border-box"),
                prop("margin", "0"),
                prop("padding", "0"),
                prop("border-width", "0"),
                prop("border-style", "solid"),
                prop("font-size", "inherit"),
                prop("color", "inherit"),
                prop("font-family", "inherit"),
                prop("line-height", "1"),
                prop("font-weight", "inherit"),
                prop("text-decoration", "none"),
                prop("font-style", "inherit"),
            ],
        ),
        Class::new(
            format!("{any}.{}", c::WRAPPED),
            vec![prop("flex-wrap", "wrap")],
        ),
        Class::new(
            format!("{any}.{}", c::NO_TEXT_SELECTION),
            vec![
                prop("-webkit-user-select", "none"),
                prop("user-select", "none"),
            ],
        ),
        Class::new(
            format!("{any}.{}", c::CURSOR_POINTER),
            vec![prop("cursor", "pointer")],
        ),
        Class::new(
            format!("{any}.{}", c::CURSOR_TEXT),
            vec![prop("cursor", "text")],
        ),
        Class::new(
            format!("{any}.{}", c::PASS_POINTER_EVENTS),
            vec![prop("pointer-events", "none !important")],
        ),
        Class::new(
            format!("{any}.{}", c::CAPTURE_POINTER_EVENTS),
            vec![prop("pointer-events", "auto !important")],
        ),
        Class::new(
            format!("{any}.{}", c::TRANSPARENT),
            vec![prop("opacity", "0")],
        ),
        Class::new(format!("{any}.{}", c::OPAQUE), vec![prop("opacity", "1")]),
        // Text
        Class::new(
            format!("{any}.{}", c::TEXT),
            vec![
                prop("white-space", "pre"),
                prop("display", "inline-block"),
            ],
        ),
        // Single element container
        Class::new(
            format!("{any}.{}", c::SINGLE),
            vec![
                prop("display", "flex"),
                prop("flex-direction", "column"),
                prop("white-space", "pre"),
                describe_alignment(el_description),
            ],
        ),
        // Row container
        Class::new(
            format!("{any}.{}", c::ROW),
            vec![
                prop("display", "flex"),
                prop("flex-direction", "row"),
                Rule::Child(
                    format!("{any}.{}", c::WIDTH_FILL),
                    vec![prop("flex-grow", "100000")],
                ),
                describe_alignment(row_description),
            ],
        ),
        Class::new(
            format!("{any}.{}.{}", c::ROW, c::SPACE_EVENLY),
            vec![prop("justify-content", "space-between")],
        ),
        // Column container
        Class::new(
            format!("{any}.{}", c::COLUMN),
            vec![
                prop("display", "flex"),
                prop("flex-direction", "column"),
                Rule::Child(
                    format!("{any}.{}", c::HEIGHT_FILL),
                    vec![prop("flex-grow", "100000")],
                ),
                describe_alignment(column_description),
            ],
        ),
        Class::new(
            format!("{any}.{}.{}", c::COLUMN, c::SPACE_EVENLY),
            vec![prop("justify-content", "space-between")],
        ),
        // Grid container
        Class::new(
            format!("{any}.{}", c::GRID),
            vec![
                Rule::Supports(
                    ("display".to_string(), "grid".to_string()),
                    vec![("display".to_string(), "grid".to_string())],
                ),
                describe_alignment(grid_description),
            ],
        ),
        // Page
        Class::new(
            format!("{any}.{}", c::PAGE),
            vec![
                prop("display", "block"),
                Rule::Child(
                    format!("{any}.{}", c::ALIGN_LEFT),
                    vec![prop("float", "left")],
                ),
                Rule::Child(
                    format!("{any}.{}", c::ALIGN_RIGHT),
                    vec![prop("float", "right")],
                ),
            ],
        ),
        // Paragraph
        Class::new(
            format!("{any}.{}", c::PARAGRAPH),
            vec![
                prop("display", "block"),
                prop("white-space", "normal"),
                prop("overflow-wrap", "break-word"),
                Rule::AllChildren(
                    dot(c::TEXT),
                    vec![
                        prop("display", "inline"),
                        prop("white-space", "normal"),
                    ],
                ),
                Rule::Child(
                    dot(c::SINGLE),
                    vec![prop("display", "inline")],
                ),
                Rule::Child(
                    dot(c::ROW),
                    vec![prop("display", "inline-flex")],
                ),
                Rule::Child(
                    dot(c::COLUMN),
                    vec![prop("display", "inline-flex")],
                ),
            ],
        ),
        // Nearby elements
        nearby(
            c::ABOVE,
            "20",
            vec![
                prop("bottom", "100%"),
                prop("left", "0"),
                prop("width", "100%"),
            ],
        ),
        nearby(
            c::BELOW,
            "20",
            vec![
                prop("top", "100%"),
                prop("left", "0"),
                prop("width", "100%"),
            ],
        ),
        nearby(
            c::ON_RIGHT,
            "20",
            vec![prop("left", "100%"), prop("top", "0"), prop("height", "100%")],
        ),
        nearby(
            c::ON_LEFT,
            "20",
            vec![prop("right", "100%"), prop("top", "0"), prop("height", "100%")],
        ),
        nearby(
            c::IN_FRONT,
            "20",
            vec![
                prop("top", "0"),
                prop("left", "0"),
                prop("width", "100%"),
                prop("height", "100%"),
            ],
        ),
        nearby(
            c::BEHIND,
            "0",
            vec![
                prop("top", "0"),
                prop("left", "0"),
                prop("width", "100%"),
                prop("height", "100%"),
            ],
        ),
        // Width / height behavior
        Class::new(
            format!("{any}.{}", c::WIDTH_CONTENT),
            vec![prop("width", "auto")],
        ),
        Class::new(
            format!("{any}.{}", c::WIDTH_FILL),
            vec![prop("width", "100%")],
        ),
        Class::new(
            format!("{any}.{}", c::HEIGHT_CONTENT),
            vec![prop("height", "auto")],
        ),
        Class::new(
            format!("{any}.{}", c::HEIGHT_FILL),
            vec![prop("height", "100%")],
        ),
        // Scroll / overflow
        Class::new(
            format!("{any}.{}", c::SCROLLBARS),
            vec![prop("overflow", "auto"), prop("flex-shrink", "1")],
        ),
        Class::new(
            format!("{any}.{}", c::SCROLLBARS_X),
            vec![prop("overflow-x", "auto"), prop("flex-shrink", "1")],
        ),
        Class::new(
            format!("{any}.{}", c::SCROLLBARS_Y),
            vec![prop("overflow-y", "auto"), prop("flex-shrink", "1")],
        ),
        Class::new(
            format!("{any}.{}", c::OVERFLOW_HIDDEN),
            vec![prop("overflow", "hidden")],
        ),
        // Border styles
        Class::new(
            format!("{any}.{}", c::BORDER_NONE),
            vec![prop("border-width", "0")],
        ),
        Class::new(
            format!("{any}.{}", c::BORDER_DASHED),
            vec![prop("border-style", "dashed")],
        ),
        Class::new(
            format!("{any}.{}", c::BORDER_DOTTED),
            vec![prop("border-style", "dotted")],
        ),
        Class::new(
            format!("{any}.{}", c::BORDER_SOLID),
            vec![prop("border-style", "solid")],
        ),
        // Text alignment and decoration
        Class::new(
            format!("{any}.{}", c::TEXT_LEFT),
            vec![prop("text-align", "left")],
        ),
        Class::new(
            format!("{any}.{}", c::TEXT_RIGHT),
            vec![prop("text-align", "right")],
        ),
        Class::new(
            format!("{any}.{}", c::TEXT_CENTER),
            vec![prop("text-align", "center")],
        ),
        Class::new(
            format!("{any}.{}", c::TEXT_JUSTIFY),
            vec![prop("text-align", "justify")],
        ),
        Class::new(
            format!("{any}.{}", c::TEXT_UNDERLINE),
            vec![
                prop("text-decoration", "underline"),
                prop("text-decoration-skip-ink", "auto"),
            ],
        ),
        Class::new(
            format!("{any}.{}", c::TEXT_STRIKE),
            vec![prop("text-decoration", "line-through")],
        ),
        Class::new(
            format!("{any}.{}", c::ITALIC),
            vec![prop("font-style", "italic")],
        ),
        // Input resets
        Class::new(
            format!("input.{}.{}", c::ANY, c::INPUT_TEXT),
            vec![
                prop("background", "transparent"),
                prop("border", "none"),
                prop("outline", "none"),
                prop("padding", "0"),
                prop("font-family", "inherit"),
                prop("font-size", "inherit"),
                prop("line-height", "1.05"),
            ],
        ),
        Class::new(
            format!("textarea.{}.{}", c::ANY, c::INPUT_MULTILINE),
            vec![
                prop("background", "transparent"),
                prop("border", "none"),
                prop("outline", "none"),
                prop("resize", "none"),
                prop("padding", "0"),
                prop("font-family", "inherit"),
                prop("font-size", "inherit"),
                prop("white-space", "pre-wrap"),
            ],
        ),
    ];
    // Font weight classes w1..w9 map straight onto the 100..900 scale.
    for weight in 1..=9u32 {
        out.push(Class::new(
            format!("{any}.w{weight}"),
            vec![prop("font-weight", &format!("{}", weight * 100))],
        ));
    }
    out
}

/// The rendered static sheet, built once.
pub fn base_rules() -> &'static str {
    static SHEET: OnceLock<String> = OnceLock::new();
    SHEET.get_or_init(|| render(&base_classes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rules_nonempty_and_cached() {
        let first = base_rules();
        let second = base_rules();
        assert!(!first.is_empty());
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_reset_rule_present() {
        let sheet = base_rules();
        assert!(sheet.contains("html,body{height:100%;padding:0;margin:0;}"));
        assert!(sheet.contains(".s{position:relative;"));
    }

    #[test]
    fn test_alignment_rules_generated_for_all_axes() {
        let sheet = base_rules();
        // Content alignment on the row container.
        assert!(sheet.contains(".s.r.ccx{justify-content:center;}"));
        assert!(sheet.contains(".s.r.cb{align-items:flex-end;}"));
        // Self alignment on a row child.
        assert!(sheet.contains(".s.r > .s.ar{margin-left:auto;}"));
        assert!(sheet.contains(".s.c > .s.cx{align-self:center;}"));
        // Every content class appears for both flex contexts.
        for alignment in ALIGNMENTS {
            assert!(sheet.contains(&format!(".s.r.{}", alignment.content_class())));
            assert!(sheet.contains(&format!(".s.c.{}", alignment.content_class())));
        }
    }

    #[test]
    fn test_nearby_positioning() {
        let sheet = base_rules();
        assert!(sheet.contains(".s.a{position:absolute;"));
        assert!(sheet.contains("bottom:100%;"));
        assert!(sheet.contains(".s.fr{position:absolute;"));
    }

    #[test]
    fn test_fill_growth_rules() {
        let sheet = base_rules();
        assert!(sheet.contains(".s.r > .s.wf{flex-grow:100000;}"));
        assert!(sheet.contains(".s.c > .s.hf{flex-grow:100000;}"));
    }

    #[test]
    fn test_grid_uses_supports_block() {
        let sheet = base_rules();
        assert!(sheet.contains("@supports (display:grid) {.s.g{display:grid;}"));
    }

    #[test]
    fn test_font_weight_classes() {
        let sheet = base_rules();
        assert!(sheet.contains(".s.w4{font-weight:400;}"));
        assert!(sheet.contains(".s.w7{font-weight:700;}"));
    }
}
