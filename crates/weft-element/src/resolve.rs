//! Attribute resolution
//!
//! The pass that turns a node's ordered attribute list into DOM-ready
//! output: literal attributes, class names, the dynamic styles that need
//! CSS, and the flag field recording which categories were set.
//!
//! Dedup policy, fixed everywhere: the list is processed right-to-left and
//! a flag that is already present skips the attribute, so the *last*
//! attribute in source order wins for its category. Defaults prepended by a
//! calling component are therefore overridden by caller attributes without
//! any notion of specificity.

use weft_style::flags::{self, Field};
use weft_style::format::float_class;
use weft_style::length::Length;
use weft_style::sheet::classes;
use weft_style::style::{Style, Transformation};

use crate::attribute::{Attribute, Description, HAlign, Location, VAlign};
use crate::render::Element;

/// The layout context a node is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutContext {
    AsEl,
    AsRow,
    AsColumn,
    AsGrid,
    AsParagraph,
    AsPage,
}

impl LayoutContext {
    /// Base classes for this context, including its content-alignment
    /// defaults.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            LayoutContext::AsEl => &[classes::ANY, classes::SINGLE],
            LayoutContext::AsRow => &[
                classes::ANY,
                classes::ROW,
                classes::CONTENT_LEFT,
                classes::CONTENT_CENTER_Y,
            ],
            LayoutContext::AsColumn => &[
                classes::ANY,
                classes::COLUMN,
                classes::CONTENT_TOP,
                classes::CONTENT_LEFT,
            ],
            LayoutContext::AsGrid => &[classes::ANY, classes::GRID],
            LayoutContext::AsParagraph => &[
                classes::ANY,
                classes::PARAGRAPH,
                classes::CONTENT_LEFT,
                classes::CONTENT_CENTER_Y,
            ],
            LayoutContext::AsPage => &[classes::ANY, classes::PAGE],
        }
    }
}

/// Everything the resolution pass produces for one node.
#[derive(Debug)]
pub struct Gathered {
    pub node: String,
    pub attributes: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub styles: Vec<Style>,
    pub has: Field,
    pub nearby: Vec<(Location, Element)>,
}

/// Resolve an attribute list. Attributes are consumed; they are not
/// retained on the rendered node.
pub fn gather(context: LayoutContext, attrs: Vec<Attribute>) -> Gathered {
    let mut gathered = Gathered {
        node: "div".to_string(),
        attributes: Vec::new(),
        classes: Vec::new(),
        styles: Vec::new(),
        has: Field::NONE,
        nearby: Vec::new(),
    };
    let mut transform = Transformation::Untransformed;

    for attr in attrs.into_iter().rev() {
        match attr {
            Attribute::NoAttribute => {}
            Attribute::Attr(name, value) => {
                gathered.attributes.push((name, value));
            }
            Attribute::Describe(description) => {
                apply_description(&mut gathered, description);
            }
            Attribute::Class(flag, name) => {
                if !gathered.has.present(flag) {
                    gathered.has = gathered.has.add(flag);
                    gathered.classes.push(name.to_string());
                }
            }
            Attribute::StyleClass(flag, style) => {
                if !gathered.has.present(flag) {
                    gathered.has = gathered.has.add(flag);
                    gathered.classes.push(style.class_name());
                    gathered.styles.push(style);
                }
            }
            Attribute::AlignX(align) => {
                if !gathered.has.present(flags::X_ALIGN) {
                    gathered.has = gathered.has.add(flags::X_ALIGN);
                    gathered.has = match align {
                        HAlign::Right => gathered.has.add(flags::ALIGN_RIGHT),
                        HAlign::CenterX => gathered.has.add(flags::CENTER_X),
                        HAlign::Left => gathered.has,
                    };
                    gathered.classes.push(align_x_class(align).to_string());
                }
            }
            Attribute::AlignY(align) => {
                if !gathered.has.present(flags::Y_ALIGN) {
                    gathered.has = gathered.has.add(flags::Y_ALIGN);
                    gathered.has = match align {
                        VAlign::Bottom => gathered.has.add(flags::ALIGN_BOTTOM),
                        VAlign::CenterY => gathered.has.add(flags::CENTER_Y),
                        VAlign::Top => gathered.has,
                    };
                    gathered.classes.push(align_y_class(align).to_string());
                }
            }
            Attribute::Width(length) => {
                if !gathered.has.present(flags::WIDTH) {
                    gathered.has = gathered.has.add(flags::WIDTH);
                    apply_width(&mut gathered, &length);
                }
            }
            Attribute::Height(length) => {
                if !gathered.has.present(flags::HEIGHT) {
                    gathered.has = gathered.has.add(flags::HEIGHT);
                    apply_height(&mut gathered, &length);
                }
            }
            Attribute::Nearby(location, element) => {
                // Nearby children combine; an element can carry several,
                // including both behind and in-front layers.
                if location == Location::Behind {
                    gathered.has = gathered.has.add(flags::BEHIND);
                }
                gathered.nearby.push((location, element));
            }
            Attribute::TransformComponent(flag, component) => {
                if !gathered.has.present(flag) {
                    gathered.has = gathered.has.add(flag);
                    transform = transform.compose(&component);
                }
            }
        }
    }

    if let Some(class) = transform.class_name() {
        gathered.classes.push(class);
        gathered.styles.push(Style::Transform(transform));
    }

    // The reversed fold builds every list back-to-front; restore source
    // order for deterministic output.
    gathered.attributes.reverse();
    gathered.classes.reverse();
    gathered.styles.reverse();
    gathered.nearby.reverse();
    gathered
}

fn align_x_class(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => classes::ALIGN_LEFT,
        HAlign::CenterX => classes::CENTER_X,
        HAlign::Right => classes::ALIGN_RIGHT,
    }
}

fn align_y_class(align: VAlign) -> &'static str {
    match align {
        VAlign::Top => classes::ALIGN_TOP,
        VAlign::CenterY => classes::CENTER_Y,
        VAlign::Bottom => classes::ALIGN_BOTTOM,
    }
}

fn apply_description(gathered: &mut Gathered, description: Description) {
    match description {
        Description::Main => gathered.node = "main".to_string(),
        Description::Navigation => gathered.node = "nav".to_string(),
        Description::ContentInfo => gathered.node = "footer".to_string(),
        Description::Complementary => gathered.node = "aside".to_string(),
        Description::Heading(level) => {
            gathered.node = format!("h{}", level.clamp(1, 6));
        }
        Description::Paragraph => gathered.node = "p".to_string(),
        Description::Button => {
            gathered
                .attributes
                .push(("role".to_string(), "button".to_string()));
        }
        Description::Label(label) => {
            gathered
                .attributes
                .push(("aria-label".to_string(), label));
        }
        Description::LivePolite => {
            gathered
                .attributes
                .push(("aria-live".to_string(), "polite".to_string()));
        }
        Description::LiveAssertive => {
            gathered
                .attributes
                .push(("aria-live".to_string(), "assertive".to_string()));
        }
    }
}

fn apply_width(gathered: &mut Gathered, length: &Length) {
    match length {
        Length::Content => {
            gathered.has = gathered.has.add(flags::WIDTH_CONTENT);
            gathered.classes.push(classes::WIDTH_CONTENT.to_string());
        }
        Length::Fill(1) => {
            gathered.has = gathered.has.add(flags::WIDTH_FILL);
            gathered.classes.push(classes::WIDTH_FILL.to_string());
        }
        Length::Fill(portion) => {
            gathered.has = gathered.has.add(flags::WIDTH_FILL);
            gathered
                .classes
                .push(classes::WIDTH_FILL_PORTION.to_string());
            gathered.classes.push(format!("wfp-{portion}"));
            // Weighted grow against sibling fills inside a row.
            gathered.styles.push(Style::Single {
                class: format!(
                    "{}.{} > .wfp-{portion}",
                    classes::ANY,
                    classes::ROW
                ),
                prop: "flex-grow".to_string(),
                value: format!("{}", u64::from(*portion) * 100_000),
            });
        }
        Length::Px(n) => {
            let class = format!("width-px-{}", float_class(*n));
            gathered.classes.push(classes::WIDTH_EXACT.to_string());
            gathered.classes.push(class.clone());
            gathered.styles.push(Style::Single {
                class,
                prop: "width".to_string(),
                value: format!("{}px", weft_style::format::float_css(*n)),
            });
        }
        Length::Rem(n) => {
            let class = format!("width-rem-{}", float_class(*n));
            gathered.classes.push(classes::WIDTH_EXACT.to_string());
            gathered.classes.push(class.clone());
            gathered.styles.push(Style::Single {
                class,
                prop: "width".to_string(),
                value: format!("{}rem", weft_style::format::float_css(*n)),
            });
        }
        Length::Min(bound, inner) => {
            gathered.has = gathered.has.add(flags::WIDTH_BETWEEN);
            let class = format!("min-width-{bound}");
            gathered.classes.push(class.clone());
            gathered.styles.push(Style::Single {
                class,
                prop: "min-width".to_string(),
                value: format!("{bound}px"),
            });
            apply_width(gathered, inner);
        }
        Length::Max(bound, inner) => {
            gathered.has = gathered.has.add(flags::WIDTH_BETWEEN);
            let class = format!("max-width-{bound}");
            gathered.classes.push(class.clone());
            gathered.styles.push(Style::Single {
                class,
                prop: "max-width".to_string(),
                value: format!("{bound}px"),
            });
            apply_width(gathered, inner);
        }
    }
}

fn apply_height(gathered: &mut Gathered, length: &Length) {
    match length {
        Length::Content => {
            gathered.has = gathered.has.add(flags::HEIGHT_CONTENT);
            gathered.classes.push(classes::HEIGHT_CONTENT.to_string());
        }
        Length::Fill(1) => {
            gathered.has = gathered.has.add(flags::HEIGHT_FILL);
            gathered.classes.push(classes::HEIGHT_FILL.to_string());
        }
        Length::Fill(portion) => {
            gathered.has = gathered.has.add(flags::HEIGHT_FILL);
            gathered
                .classes
                .push(classes::HEIGHT_FILL_PORTION.to_string());
            gathered.classes.push(format!("hfp-{portion}"));
            gathered.styles.push(Style::Single {
                class: format!(
                    "{}.{} > .hfp-{portion}",
                    classes::ANY,
                    classes::COLUMN
                ),
                prop: "flex-grow".to_string(),
                value: format!("{}", u64::from(*portion) * 100_000),
            });
        }
        Length::Px(n) => {
            let class = format!("height-px-{}", float_class(*n));
            gathered.classes.push(classes::HEIGHT_EXACT.to_string());
            gathered.classes.push(class.clone());
            gathered.styles.push(Style::Single {
                class,
                prop: "height".to_string(),
                value: format!("{}px", weft_style::format::float_css(*n)),
            });
        }
        Length::Rem(n) => {
            let class = format!("height-rem-{}", float_class(*n));
            gathered.classes.push(classes::HEIGHT_EXACT.to_string());
            gathered.classes.push(class.clone());
            gathered.styles.push(Style::Single {
                class,
                prop: "height".to_string(),
                value: format!("{}rem", weft_style::format::float_css(*n)),
            });
        }
        Length::Min(bound, inner) => {
            gathered.has = gathered.has.add(flags::HEIGHT_BETWEEN);
            let class = format!("min-height-{bound}");
            gathered.classes.push(class.clone());
            gathered.styles.push(Style::Single {
                class,
                prop: "min-height".to_string(),
                value: format!("{bound}px"),
            });
            apply_height(gathered, inner);
        }
        Length::Max(bound, inner) => {
            gathered.has = gathered.has.add(flags::HEIGHT_BETWEEN);
            let class = format!("max-height-{bound}");
            gathered.classes.push(class.clone());
            gathered.styles.push(Style::Single {
                class,
                prop: "max-height".to_string(),
                value: format!("{bound}px"),
            });
            apply_height(gathered, inner);
        }
    }
}
