//! Dynamic style values
//!
//! Every style category that needs generated CSS is one [`Style`] variant.
//! A variant carries enough data to regenerate both its CSS rule block and
//! its class name deterministically, so identical values always land on the
//! same generated class and the stylesheet registry can dedup by name.

use crate::color::Color;
use crate::format::{float_class, float_css};
use crate::length::Length;
use crate::rules::{self, Class, Rule, prop};
use crate::sheet::classes;

/// Named font in a family stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Font {
    Serif,
    SansSerif,
    Monospace,
    Typeface(String),
    /// A typeface loaded from an external URL; the URL is carried for the
    /// document head, only the name enters the CSS stack.
    External { name: String, url: String },
}

impl Font {
    fn family_entry(&self) -> String {
        match self {
            Font::Serif => "serif".to_string(),
            Font::SansSerif => "sans-serif".to_string(),
            Font::Monospace => "monospace".to_string(),
            Font::Typeface(name) | Font::External { name, .. } => format!("\"{name}\""),
        }
    }

    /// Class-name fragment for this font.
    pub fn class_fragment(&self) -> String {
        match self {
            Font::Serif => "serif".to_string(),
            Font::SansSerif => "sans-serif".to_string(),
            Font::Monospace => "monospace".to_string(),
            Font::Typeface(name) | Font::External { name, .. } => name
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-"),
        }
    }
}

/// OpenType font-variant toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    /// Feature on: `"tag"`.
    Active(String),
    /// Feature explicitly off: `"tag" 0`.
    Off(String),
    /// Feature at an index: `"tag" n`.
    Indexed(String, u32),
}

impl Variant {
    pub fn feature_setting(&self) -> String {
        match self {
            Variant::Active(tag) => format!("\"{tag}\""),
            Variant::Off(tag) => format!("\"{tag}\" 0"),
            Variant::Indexed(tag, n) => format!("\"{tag}\" {n}"),
        }
    }

    pub fn class_fragment(&self) -> String {
        match self {
            Variant::Active(tag) => tag.clone(),
            Variant::Off(tag) => format!("{tag}-0"),
            Variant::Indexed(tag, n) => format!("{tag}-{n}"),
        }
    }
}

/// A box or text shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub offset: (f32, f32),
    pub blur: f32,
    pub size: f32,
    pub inset: bool,
}

impl Shadow {
    /// `[inset ]Xpx Ypx Bpx Spx color`
    pub fn format_box_shadow(&self) -> String {
        let body = format!(
            "{}px {}px {}px {}px {}",
            float_css(self.offset.0),
            float_css(self.offset.1),
            float_css(self.blur),
            float_css(self.size),
            self.color.format_css()
        );
        if self.inset {
            format!("inset {body}")
        } else {
            body
        }
    }

    /// `Xpx Ypx Bpx color`; text shadows have no spread term.
    pub fn format_text_shadow(&self) -> String {
        format!(
            "{}px {}px {}px {}",
            float_css(self.offset.0),
            float_css(self.offset.1),
            float_css(self.blur),
            self.color.format_css()
        )
    }

    pub fn box_class(&self) -> String {
        let base = format!(
            "{}-{}-{}-{}-{}",
            float_class(self.offset.0),
            float_class(self.offset.1),
            float_class(self.blur),
            float_class(self.size),
            self.color.format_class()
        );
        if self.inset {
            format!("{base}-ins")
        } else {
            base
        }
    }

    pub fn text_class(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            float_class(self.offset.0),
            float_class(self.offset.1),
            float_class(self.blur),
            self.color.format_class()
        )
    }
}

/// One transform attribute component before composition.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformComponent {
    MoveX(f32),
    MoveY(f32),
    MoveZ(f32),
    Rotate([f32; 3], f32),
    Scale([f32; 3]),
}

/// The composed transform state of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    Untransformed,
    /// Pure translation.
    Moved([f32; 3]),
    /// Translation + scale + axis/angle rotation.
    FullTransform {
        translate: [f32; 3],
        scale: [f32; 3],
        rotate: [f32; 3],
        angle: f32,
    },
}

impl Transformation {
    /// Fold one more component into the composed state.
    ///
    /// Translation-only stays in the cheap `Moved` form; the first scale or
    /// rotation promotes to `FullTransform`.
    #[must_use]
    pub fn compose(self, component: &TransformComponent) -> Transformation {
        use TransformComponent::*;
        match self {
            Transformation::Untransformed => match component {
                MoveX(x) => Transformation::Moved([*x, 0.0, 0.0]),
                MoveY(y) => Transformation::Moved([0.0, *y, 0.0]),
                MoveZ(z) => Transformation::Moved([0.0, 0.0, *z]),
                Rotate(axis, angle) => Transformation::FullTransform {
                    translate: [0.0, 0.0, 0.0],
                    scale: [1.0, 1.0, 1.0],
                    rotate: *axis,
                    angle: *angle,
                },
                Scale(factors) => Transformation::FullTransform {
                    translate: [0.0, 0.0, 0.0],
                    scale: *factors,
                    rotate: [0.0, 0.0, 1.0],
                    angle: 0.0,
                },
            },
            Transformation::Moved([x, y, z]) => match component {
                MoveX(nx) => Transformation::Moved([*nx, y, z]),
                MoveY(ny) => Transformation::Moved([x, *ny, z]),
                MoveZ(nz) => Transformation::Moved([x, y, *nz]),
                Rotate(axis, angle) => Transformation::FullTransform {
                    translate: [x, y, z],
                    scale: [1.0, 1.0, 1.0],
                    rotate: *axis,
                    angle: *angle,
                },
                Scale(factors) => Transformation::FullTransform {
                    translate: [x, y, z],
                    scale: *factors,
                    rotate: [0.0, 0.0, 1.0],
                    angle: 0.0,
                },
            },
            Transformation::FullTransform {
                translate,
                scale,
                rotate,
                angle,
            } => {
                let [tx, ty, tz] = translate;
                match component {
                    MoveX(nx) => Transformation::FullTransform {
                        translate: [*nx, ty, tz],
                        scale,
                        rotate,
                        angle,
                    },
                    MoveY(ny) => Transformation::FullTransform {
                        translate: [tx, *ny, tz],
                        scale,
                        rotate,
                        angle,
                    },
                    MoveZ(nz) => Transformation::FullTransform {
                        translate: [tx, ty, *nz],
                        scale,
                        rotate,
                        angle,
                    },
                    Rotate(axis, new_angle) => Transformation::FullTransform {
                        translate,
                        scale,
                        rotate: *axis,
                        angle: *new_angle,
                    },
                    Scale(factors) => Transformation::FullTransform {
                        translate,
                        scale: *factors,
                        rotate,
                        angle,
                    },
                }
            }
        }
    }

    /// CSS `transform` value, or None when untransformed.
    pub fn format_css(&self) -> Option<String> {
        match self {
            Transformation::Untransformed => None,
            Transformation::Moved([x, y, z]) => Some(format!(
                "translate3d({}px, {}px, {}px)",
                float_css(*x),
                float_css(*y),
                float_css(*z)
            )),
            Transformation::FullTransform {
                translate: [tx, ty, tz],
                scale: [sx, sy, sz],
                rotate: [rx, ry, rz],
                angle,
            } => Some(format!(
                "translate3d({}px, {}px, {}px) scale3d({}, {}, {}) rotate3d({}, {}, {}, {}rad)",
                float_css(*tx),
                float_css(*ty),
                float_css(*tz),
                float_css(*sx),
                float_css(*sy),
                float_css(*sz),
                float_css(*rx),
                float_css(*ry),
                float_css(*rz),
                float_css(*angle)
            )),
        }
    }

    /// Class name, or None when untransformed.
    pub fn class_name(&self) -> Option<String> {
        match self {
            Transformation::Untransformed => None,
            Transformation::Moved([x, y, z]) => Some(format!(
                "mv-{}-{}-{}",
                float_class(*x),
                float_class(*y),
                float_class(*z)
            )),
            Transformation::FullTransform {
                translate: [tx, ty, tz],
                scale: [sx, sy, sz],
                rotate: [rx, ry, rz],
                angle,
            } => Some(format!(
                "tfrm-{}-{}-{}-{}-{}-{}-{}-{}-{}-{}",
                float_class(*tx),
                float_class(*ty),
                float_class(*tz),
                float_class(*sx),
                float_class(*sy),
                float_class(*sz),
                float_class(*rx),
                float_class(*ry),
                float_class(*rz),
                float_class(*angle)
            )),
        }
    }
}

/// Pseudo-class wrapper for nested styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoClass {
    Hover,
    Focus,
    Active,
}

impl PseudoClass {
    pub fn suffix(self) -> &'static str {
        match self {
            PseudoClass::Hover => classes::HOVER,
            PseudoClass::Focus => classes::FOCUS,
            PseudoClass::Active => classes::ACTIVE,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            PseudoClass::Hover => ":hover",
            PseudoClass::Focus => ":focus",
            PseudoClass::Active => ":active",
        }
    }
}

/// A dynamic style value requiring CSS generation.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    /// Raw selector + property list, rendered verbatim.
    Raw {
        selector: String,
        props: Vec<(String, String)>,
    },
    FontFamily {
        name: String,
        fonts: Vec<Font>,
    },
    FontSize(u32),
    /// Single property keyed by class. The class field may embed combinators
    /// (e.g. `s.r > .wfp-5`) for child-scoped one-off rules.
    Single {
        class: String,
        prop: String,
        value: String,
    },
    /// Color-valued property keyed by class.
    Colored {
        class: String,
        prop: String,
        color: Color,
    },
    Spacing {
        class: String,
        x: f32,
        y: f32,
    },
    BorderWidth {
        class: String,
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    },
    Padding {
        class: String,
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    },
    GridTemplate {
        spacing: (Length, Length),
        columns: Vec<Length>,
        rows: Vec<Length>,
    },
    GridPosition {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
    Transform(Transformation),
    PseudoSelector {
        class: PseudoClass,
        styles: Vec<Style>,
    },
    Transparency {
        name: String,
        transparency: f32,
    },
    Shadows {
        name: String,
        shadow: String,
    },
    FontVariants {
        name: String,
        variants: Vec<Variant>,
    },
}

impl Style {
    /// Build a padding style with its canonical class name.
    pub fn padding(top: f32, right: f32, bottom: f32, left: f32) -> Style {
        Style::Padding {
            class: format!(
                "pad-{}-{}-{}-{}",
                float_class(top),
                float_class(right),
                float_class(bottom),
                float_class(left)
            ),
            top,
            right,
            bottom,
            left,
        }
    }

    /// Build a spacing style with its canonical class name.
    pub fn spacing(x: f32, y: f32) -> Style {
        Style::Spacing {
            class: format!("spc-{}-{}", float_class(x), float_class(y)),
            x,
            y,
        }
    }

    /// Build a border-width style with its canonical class name.
    pub fn border_width(top: f32, right: f32, bottom: f32, left: f32) -> Style {
        Style::BorderWidth {
            class: format!(
                "bw-{}-{}-{}-{}",
                float_class(top),
                float_class(right),
                float_class(bottom),
                float_class(left)
            ),
            top,
            right,
            bottom,
            left,
        }
    }

    /// The class name this style generates; the dedup key for the registry.
    pub fn class_name(&self) -> String {
        match self {
            Style::Raw { selector, .. } => selector.clone(),
            Style::FontFamily { name, .. } => name.clone(),
            Style::FontSize(size) => format!("font-size-{size}"),
            Style::Single { class, .. } => class.clone(),
            Style::Colored { class, .. } => class.clone(),
            Style::Spacing { class, .. } => class.clone(),
            Style::BorderWidth { class, .. } => class.clone(),
            Style::Padding { class, .. } => class.clone(),
            Style::GridTemplate {
                spacing,
                columns,
                rows,
            } => {
                let cols: Vec<String> = columns.iter().map(Length::format_class).collect();
                let rws: Vec<String> = rows.iter().map(Length::format_class).collect();
                format!(
                    "grid-rows-{}-cols-{}-space-x-{}-space-y-{}",
                    rws.join("-"),
                    cols.join("-"),
                    spacing.0.format_class(),
                    spacing.1.format_class()
                )
            }
            Style::GridPosition {
                row,
                col,
                width,
                height,
            } => format!("grid-pos-{row}-{col}-{width}-{height}"),
            Style::Transform(transformation) => {
                transformation.class_name().unwrap_or_default()
            }
            Style::PseudoSelector { class, styles } => {
                let suffix = class.suffix();
                styles
                    .iter()
                    .map(|style| format!("{}-{suffix}", style.class_name()))
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            Style::Transparency { name, .. } => name.clone(),
            Style::Shadows { name, .. } => name.clone(),
            Style::FontVariants { name, .. } => name.clone(),
        }
    }

    /// Render this style's CSS rules as compact text.
    pub fn render_css(&self) -> String {
        self.render_with(None)
    }

    fn render_with(&self, pseudo: Option<PseudoClass>) -> String {
        // Selector for a class-keyed style, with the pseudo suffix applied
        // both to the class name and as a real pseudo-class.
        let sel = |class: &str| -> String {
            match pseudo {
                None => format!(".{class}"),
                Some(p) => format!(".{class}-{}{}", p.suffix(), p.css()),
            }
        };

        match self {
            Style::Raw { selector, props } => {
                let rules = props
                    .iter()
                    .map(|(key, value)| prop(key, value))
                    .collect::<Vec<_>>();
                rules::render_class(&Class::new(selector.clone(), rules))
            }
            Style::FontFamily { name, fonts } => {
                let stack = fonts
                    .iter()
                    .map(Font::family_entry)
                    .collect::<Vec<_>>()
                    .join(", ");
                rules::render_class(&Class::new(sel(name), vec![prop("font-family", &stack)]))
            }
            Style::FontSize(size) => rules::render_class(&Class::new(
                sel(&format!("font-size-{size}")),
                vec![prop("font-size", &format!("{size}px"))],
            )),
            Style::Single { class, prop: key, value } => {
                rules::render_class(&Class::new(sel(class), vec![prop(key, value)]))
            }
            Style::Colored { class, prop: key, color } => rules::render_class(&Class::new(
                sel(class),
                vec![prop(key, &color.format_css())],
            )),
            Style::Spacing { class, x, y } => self.render_spacing(&sel(class), *x, *y),
            Style::BorderWidth {
                class,
                top,
                right,
                bottom,
                left,
            } => rules::render_class(&Class::new(
                sel(class),
                vec![prop(
                    "border-width",
                    &format!(
                        "{}px {}px {}px {}px",
                        float_css(*top),
                        float_css(*right),
                        float_css(*bottom),
                        float_css(*left)
                    ),
                )],
            )),
            Style::Padding {
                class,
                top,
                right,
                bottom,
                left,
            } => rules::render_class(&Class::new(
                sel(class),
                vec![prop(
                    "padding",
                    &format!(
                        "{}px {}px {}px {}px",
                        float_css(*top),
                        float_css(*right),
                        float_css(*bottom),
                        float_css(*left)
                    ),
                )],
            )),
            Style::GridTemplate {
                spacing,
                columns,
                rows,
            } => {
                let template_cols = columns
                    .iter()
                    .map(Length::format_css)
                    .collect::<Vec<_>>()
                    .join(" ");
                let template_rows = rows
                    .iter()
                    .map(Length::format_css)
                    .collect::<Vec<_>>()
                    .join(" ");
                let props = vec![
                    ("display".to_string(), "grid".to_string()),
                    ("grid-template-rows".to_string(), template_rows),
                    ("grid-template-columns".to_string(), template_cols),
                    (
                        "grid-row-gap".to_string(),
                        format!("{}", spacing.1.format_css()),
                    ),
                    (
                        "grid-column-gap".to_string(),
                        format!("{}", spacing.0.format_css()),
                    ),
                ];
                rules::render_class(&Class::new(
                    sel(&self.class_name()),
                    vec![Rule::Supports(
                        ("display".to_string(), "grid".to_string()),
                        props,
                    )],
                ))
            }
            Style::GridPosition {
                row,
                col,
                width,
                height,
            } => rules::render_class(&Class::new(
                sel(&self.class_name()),
                vec![
                    prop("grid-row", &format!("{row} / {}", row + height)),
                    prop("grid-column", &format!("{col} / {}", col + width)),
                ],
            )),
            Style::Transform(transformation) => {
                match (transformation.class_name(), transformation.format_css()) {
                    (Some(class), Some(value)) => rules::render_class(&Class::new(
                        sel(&class),
                        vec![prop("transform", &value)],
                    )),
                    _ => String::new(),
                }
            }
            Style::PseudoSelector { class, styles } => styles
                .iter()
                .map(|style| style.render_with(Some(*class)))
                .collect::<Vec<_>>()
                .concat(),
            Style::Transparency { name, transparency } => {
                let opacity = (1.0 - transparency).clamp(0.0, 1.0);
                rules::render_class(&Class::new(
                    sel(name),
                    vec![prop("opacity", &float_css(opacity))],
                ))
            }
            Style::Shadows { name, shadow } => {
                rules::render_class(&Class::new(sel(name), vec![prop("box-shadow", shadow)]))
            }
            Style::FontVariants { name, variants } => {
                let settings = variants
                    .iter()
                    .map(Variant::feature_setting)
                    .collect::<Vec<_>>()
                    .join(", ");
                rules::render_class(&Class::new(
                    sel(name),
                    vec![prop("font-feature-settings", &settings)],
                ))
            }
        }
    }

    fn render_spacing(&self, selector: &str, x: f32, y: f32) -> String {
        let any = format!(".{}", classes::ANY);
        let row = format!("{selector}.{}", classes::ROW);
        let wrapped_row = format!("{selector}.{}.{}", classes::WRAPPED, classes::ROW);
        let column = format!("{selector}.{}", classes::COLUMN);
        let page = format!("{selector}.{}", classes::PAGE);
        let paragraph = format!("{selector}.{}", classes::PARAGRAPH);
        let x_px = format!("{}px", float_css(x));
        let y_px = format!("{}px", float_css(y));
        let half_x = format!("{}px", float_css(x / 2.0));
        let half_y = format!("{}px", float_css(y / 2.0));

        let classes_list = vec![
            Class::new(
                row.clone(),
                vec![Rule::Child(
                    any.clone(),
                    vec![Rule::Adjacent(
                        any.clone(),
                        vec![prop("margin-left", &x_px)],
                    )],
                )],
            ),
            Class::new(
                wrapped_row,
                vec![Rule::Child(
                    any.clone(),
                    vec![prop("margin", &format!("{half_y} {half_x}"))],
                )],
            ),
            Class::new(
                column,
                vec![Rule::Child(
                    any.clone(),
                    vec![Rule::Adjacent(any.clone(), vec![prop("margin-top", &y_px)])],
                )],
            ),
            Class::new(
                page.clone(),
                vec![
                    Rule::Child(
                        any.clone(),
                        vec![Rule::Adjacent(any.clone(), vec![prop("margin-top", &y_px)])],
                    ),
                    Rule::Child(
                        format!(".{}", classes::ALIGN_LEFT),
                        vec![prop("margin-right", &x_px)],
                    ),
                    Rule::Child(
                        format!(".{}", classes::ALIGN_RIGHT),
                        vec![prop("margin-left", &x_px)],
                    ),
                ],
            ),
            Class::new(
                paragraph.clone(),
                vec![prop(
                    "line-height",
                    &format!("calc(1em + {}px)", float_css(y)),
                )],
            ),
            Class::new(
                format!("textarea.{}{selector}", classes::ANY),
                vec![
                    prop("line-height", &format!("calc(1em + {}px)", float_css(y))),
                    prop("height", &format!("calc(100% + {}px)", float_css(y))),
                ],
            ),
            Class::new(
                paragraph.clone(),
                vec![
                    Rule::Child(
                        format!(".{}", classes::ALIGN_LEFT),
                        vec![prop("margin-right", &x_px)],
                    ),
                    Rule::Child(
                        format!(".{}", classes::ALIGN_RIGHT),
                        vec![prop("margin-left", &x_px)],
                    ),
                ],
            ),
            Class::new(
                format!("{paragraph}::after"),
                vec![
                    prop("content", "''"),
                    prop("display", "block"),
                    prop("height", "0"),
                    prop("width", "0"),
                    prop("margin-top", &format!("{}px", float_css(-y / 2.0))),
                ],
            ),
            Class::new(
                format!("{paragraph}::before"),
                vec![
                    prop("content", "''"),
                    prop("display", "block"),
                    prop("height", "0"),
                    prop("width", "0"),
                    prop("margin-bottom", &format!("{}px", float_css(-y / 2.0))),
                ],
            ),
        ];
        rules::render(&classes_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hsl, rgb255};

    #[test]
    fn test_shadow_box_formatting() {
        let shadow = Shadow {
            color: hsl(0.0, 0.0, 0.93).unwrap(),
            offset: (0.0, 0.0),
            blur: 1.0,
            size: 1.0,
            inset: false,
        };
        assert_eq!(shadow.format_box_shadow(), "0px 0px 1px 1px hsl(0, 0%, 93%)");
        assert_eq!(shadow.format_text_shadow(), "0px 0px 1px hsl(0, 0%, 93%)");
    }

    #[test]
    fn test_shadow_inset_prefix() {
        let shadow = Shadow {
            color: rgb255(0.0, 0.0, 0.0).unwrap(),
            offset: (2.0, 3.0),
            blur: 4.0,
            size: 0.0,
            inset: true,
        };
        assert_eq!(shadow.format_box_shadow(), "inset 2px 3px 4px 0px rgb(0, 0, 0)");
        assert!(shadow.box_class().ends_with("-ins"));
    }

    #[test]
    fn test_transform_composition_promotes() {
        let t = Transformation::Untransformed
            .compose(&TransformComponent::MoveX(5.0))
            .compose(&TransformComponent::MoveY(-3.0));
        assert_eq!(t, Transformation::Moved([5.0, -3.0, 0.0]));

        let full = t.compose(&TransformComponent::Scale([2.0, 2.0, 1.0]));
        match full {
            Transformation::FullTransform { translate, scale, .. } => {
                assert_eq!(translate, [5.0, -3.0, 0.0]);
                assert_eq!(scale, [2.0, 2.0, 1.0]);
            }
            other => panic!("expected FullTransform, got {other:?}"),
        }
    }

    #[test]
    fn test_transform_css() {
        let moved = Transformation::Moved([1.0, 2.0, 0.0]);
        assert_eq!(
            moved.format_css().unwrap(),
            "translate3d(1px, 2px, 0px)"
        );
        assert_eq!(moved.class_name().unwrap(), "mv-100-200-0");

        let negative = Transformation::Moved([-1.0, 2.0, 0.0]);
        assert_eq!(negative.class_name().unwrap(), "mv-neg100-200-0");
        assert_ne!(negative.class_name(), moved.class_name());
    }

    #[test]
    fn test_padding_class_and_css() {
        let style = Style::padding(8.0, 8.0, 8.0, 8.0);
        assert_eq!(style.class_name(), "pad-800-800-800-800");
        assert_eq!(style.render_css(), ".pad-800-800-800-800{padding:8px 8px 8px 8px;}");
    }

    #[test]
    fn test_padding_fractional_values_stay_distinct() {
        let a = Style::padding(8.0, 8.0, 8.0, 8.0);
        let b = Style::padding(8.04, 8.0, 8.0, 8.0);
        assert_ne!(a.class_name(), b.class_name());
    }

    #[test]
    fn test_colored_render() {
        let style = Style::Colored {
            class: "bg-240-240-240-100".to_string(),
            prop: "background-color".to_string(),
            color: rgb255(240.0, 240.0, 240.0).unwrap(),
        };
        assert_eq!(
            style.render_css(),
            ".bg-240-240-240-100{background-color:rgb(240, 240, 240);}"
        );
    }

    #[test]
    fn test_pseudo_selector_suffixes_class_and_selector() {
        let style = Style::PseudoSelector {
            class: PseudoClass::Hover,
            styles: vec![Style::Colored {
                class: "fc-0-0-0-100".to_string(),
                prop: "color".to_string(),
                color: rgb255(0.0, 0.0, 0.0).unwrap(),
            }],
        };
        assert_eq!(style.class_name(), "fc-0-0-0-100-hv");
        assert_eq!(style.render_css(), ".fc-0-0-0-100-hv:hover{color:rgb(0, 0, 0);}");
    }

    #[test]
    fn test_grid_template_renders_under_supports() {
        use crate::length::{fill, px};
        let style = Style::GridTemplate {
            spacing: (px(10.0), px(10.0)),
            columns: vec![px(100.0), fill()],
            rows: vec![fill()],
        };
        let css = style.render_css();
        assert!(css.starts_with("@supports (display:grid) {"));
        assert!(css.contains("grid-template-columns:100px 1fr;"));
        assert!(css.contains("grid-template-rows:1fr;"));
        assert!(css.contains("grid-row-gap:10px;"));
    }

    #[test]
    fn test_grid_position() {
        let style = Style::GridPosition {
            row: 1,
            col: 2,
            width: 1,
            height: 1,
        };
        assert_eq!(style.class_name(), "grid-pos-1-2-1-1");
        assert_eq!(
            style.render_css(),
            ".grid-pos-1-2-1-1{grid-row:1 / 2;grid-column:2 / 3;}"
        );
    }

    #[test]
    fn test_transparency() {
        let style = Style::Transparency {
            name: "tr-25".to_string(),
            transparency: 0.25,
        };
        assert_eq!(style.render_css(), ".tr-25{opacity:0.75;}");
    }

    #[test]
    fn test_spacing_emits_row_and_column_rules() {
        let style = Style::spacing(8.0, 12.0);
        let css = style.render_css();
        assert!(css.contains(".spc-800-1200.r > .s + .s{margin-left:8px;}"));
        assert!(css.contains(".spc-800-1200.c > .s + .s{margin-top:12px;}"));
        assert!(css.contains("line-height:calc(1em + 12px);"));
    }

    #[test]
    fn test_font_variants() {
        let style = Style::FontVariants {
            name: "fv-sc-liga-0".to_string(),
            variants: vec![
                Variant::Active("smcp".to_string()),
                Variant::Off("liga".to_string()),
            ],
        };
        assert_eq!(
            style.render_css(),
            ".fv-sc-liga-0{font-feature-settings:\"smcp\", \"liga\" 0;}"
        );
    }
}
