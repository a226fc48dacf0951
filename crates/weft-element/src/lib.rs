//! weft element layer
//!
//! The public face of the layout engine: layout constructors (`el`, `row`,
//! `column`, ...), pure attribute constructors (`padding`, `width`,
//! `background_color`, ...), and the responsive helpers. Everything here
//! composes the weft-style core; no CSS is generated in this crate beyond
//! handing styles to the registry.

pub mod attribute;
pub mod render;
pub mod resolve;
pub mod responsive;

pub use attribute::{Attribute, Description, HAlign, Location, VAlign};
pub use render::{Element, RenderedNode};
pub use resolve::{Gathered, LayoutContext};
pub use responsive::{
    Breakpoints, Device, DeviceClass, Orientation, WindowSize, classify_device, modular,
};
pub use weft_style::{
    Color, ColorError, Font, Length, PseudoClass, Shadow, Style, StyleRegistry, Variant, fill,
    hsl, hsla, maximum, minimum, px, rem, rgb, rgb255, rgba, rgba255,
};

use weft_style::flags;
use weft_style::format::{float_class, float_css};
use weft_style::sheet::classes;
use weft_style::style::TransformComponent;

// ---------------------------------------------------------------------------
// Layout constructors

/// The empty element.
pub fn none() -> Element {
    Element::Empty
}

/// A text leaf.
pub fn text(content: impl Into<String>) -> Element {
    Element::Text(content.into())
}

/// A single-child element. Sizes to its content unless told otherwise.
pub fn el(registry: &mut StyleRegistry, attrs: Vec<Attribute>, child: Element) -> Element {
    render_with_defaults(LayoutContext::AsEl, attrs, vec![child], registry)
}

/// A horizontal layout.
pub fn row(registry: &mut StyleRegistry, attrs: Vec<Attribute>, children: Vec<Element>) -> Element {
    render_with_defaults(LayoutContext::AsRow, attrs, children, registry)
}

/// A vertical layout.
pub fn column(
    registry: &mut StyleRegistry,
    attrs: Vec<Attribute>,
    children: Vec<Element>,
) -> Element {
    render_with_defaults(LayoutContext::AsColumn, attrs, children, registry)
}

/// Wrapped inline text layout.
pub fn paragraph(
    registry: &mut StyleRegistry,
    attrs: Vec<Attribute>,
    children: Vec<Element>,
) -> Element {
    let mut all = vec![
        width(fill()),
        height(weft_style::Length::Content),
        spacing(5.0),
    ];
    all.extend(attrs);
    render::render(LayoutContext::AsParagraph, all, children, registry)
}

/// A grid container; pair with [`grid_template`] and [`grid_cell`].
pub fn grid(
    registry: &mut StyleRegistry,
    attrs: Vec<Attribute>,
    children: Vec<Element>,
) -> Element {
    render_with_defaults(LayoutContext::AsGrid, attrs, children, registry)
}

fn render_with_defaults(
    context: LayoutContext,
    attrs: Vec<Attribute>,
    children: Vec<Element>,
    registry: &mut StyleRegistry,
) -> Element {
    // Defaults go first so any caller attribute for the same flag, being
    // later in source order, wins.
    let mut all = vec![
        width(weft_style::Length::Content),
        height(weft_style::Length::Content),
    ];
    all.extend(attrs);
    render::render(context, all, children, registry)
}

// ---------------------------------------------------------------------------
// Sizing and spacing

pub fn width(length: Length) -> Attribute {
    Attribute::Width(length)
}

pub fn height(length: Length) -> Attribute {
    Attribute::Height(length)
}

pub fn padding(all: f32) -> Attribute {
    Attribute::StyleClass(flags::PADDING, Style::padding(all, all, all, all))
}

pub fn padding_xy(x: f32, y: f32) -> Attribute {
    Attribute::StyleClass(flags::PADDING, Style::padding(y, x, y, x))
}

pub fn padding_each(top: f32, right: f32, bottom: f32, left: f32) -> Attribute {
    Attribute::StyleClass(flags::PADDING, Style::padding(top, right, bottom, left))
}

pub fn spacing(all: f32) -> Attribute {
    Attribute::StyleClass(flags::SPACING, Style::spacing(all, all))
}

pub fn spacing_xy(x: f32, y: f32) -> Attribute {
    Attribute::StyleClass(flags::SPACING, Style::spacing(x, y))
}

// ---------------------------------------------------------------------------
// Alignment

pub fn align_left() -> Attribute {
    Attribute::AlignX(HAlign::Left)
}

pub fn align_right() -> Attribute {
    Attribute::AlignX(HAlign::Right)
}

pub fn center_x() -> Attribute {
    Attribute::AlignX(HAlign::CenterX)
}

pub fn align_top() -> Attribute {
    Attribute::AlignY(VAlign::Top)
}

pub fn align_bottom() -> Attribute {
    Attribute::AlignY(VAlign::Bottom)
}

pub fn center_y() -> Attribute {
    Attribute::AlignY(VAlign::CenterY)
}

// ---------------------------------------------------------------------------
// Color and decoration

pub fn background_color(color: Color) -> Attribute {
    Attribute::StyleClass(
        flags::BG_COLOR,
        Style::Colored {
            class: format!("bg-{}", color.format_class()),
            prop: "background-color".to_string(),
            color,
        },
    )
}

pub fn font_color(color: Color) -> Attribute {
    Attribute::StyleClass(
        flags::FONT_COLOR,
        Style::Colored {
            class: format!("fc-{}", color.format_class()),
            prop: "color".to_string(),
            color,
        },
    )
}

pub fn border_color(color: Color) -> Attribute {
    Attribute::StyleClass(
        flags::BORDER_COLOR,
        Style::Colored {
            class: format!("bc-{}", color.format_class()),
            prop: "border-color".to_string(),
            color,
        },
    )
}

pub fn font_size(size: u32) -> Attribute {
    Attribute::StyleClass(flags::FONT_SIZE, Style::FontSize(size))
}

pub fn font_family(fonts: Vec<Font>) -> Attribute {
    let name = format!(
        "ff-{}",
        fonts
            .iter()
            .map(Font::class_fragment)
            .collect::<Vec<_>>()
            .join("-")
    );
    Attribute::StyleClass(flags::FONT_FAMILY, Style::FontFamily { name, fonts })
}

pub fn font_variants(variants: Vec<Variant>) -> Attribute {
    let name = format!(
        "fv-{}",
        variants
            .iter()
            .map(Variant::class_fragment)
            .collect::<Vec<_>>()
            .join("-")
    );
    Attribute::StyleClass(flags::FONT_VARIANT, Style::FontVariants { name, variants })
}

pub fn rounded(radius: f32) -> Attribute {
    Attribute::StyleClass(
        flags::BORDER_ROUND,
        Style::Single {
            class: format!("br-{}", float_class(radius)),
            prop: "border-radius".to_string(),
            value: format!("{}px", float_css(radius)),
        },
    )
}

pub fn border_width(all: f32) -> Attribute {
    Attribute::StyleClass(flags::BORDER_WIDTH, Style::border_width(all, all, all, all))
}

pub fn border_width_each(top: f32, right: f32, bottom: f32, left: f32) -> Attribute {
    Attribute::StyleClass(
        flags::BORDER_WIDTH,
        Style::border_width(top, right, bottom, left),
    )
}

pub fn shadow(shadow: Shadow) -> Attribute {
    Attribute::StyleClass(
        flags::SHADOWS,
        Style::Shadows {
            name: format!("shdw-{}", shadow.box_class()),
            shadow: shadow.format_box_shadow(),
        },
    )
}

pub fn text_shadow(shadow: Shadow) -> Attribute {
    Attribute::StyleClass(
        flags::TEXT_SHADOWS,
        Style::Single {
            class: format!("txt-shdw-{}", shadow.text_class()),
            prop: "text-shadow".to_string(),
            value: shadow.format_text_shadow(),
        },
    )
}

/// Opacity as 1 = fully opaque, 0 = invisible.
pub fn alpha(opacity: f32) -> Attribute {
    let transparency = (1.0 - opacity).clamp(0.0, 1.0);
    Attribute::StyleClass(
        flags::TRANSPARENCY,
        Style::Transparency {
            name: format!("tr-{}", float_class(transparency)),
            transparency,
        },
    )
}

pub fn transparent(on: bool) -> Attribute {
    if on { alpha(0.0) } else { alpha(1.0) }
}

// ---------------------------------------------------------------------------
// Transforms

pub fn move_up(distance: f32) -> Attribute {
    Attribute::TransformComponent(flags::MOVE_Y, TransformComponent::MoveY(-distance))
}

pub fn move_down(distance: f32) -> Attribute {
    Attribute::TransformComponent(flags::MOVE_Y, TransformComponent::MoveY(distance))
}

pub fn move_right(distance: f32) -> Attribute {
    Attribute::TransformComponent(flags::MOVE_X, TransformComponent::MoveX(distance))
}

pub fn move_left(distance: f32) -> Attribute {
    Attribute::TransformComponent(flags::MOVE_X, TransformComponent::MoveX(-distance))
}

/// Rotation around the z axis, in radians.
pub fn rotate(angle: f32) -> Attribute {
    Attribute::TransformComponent(
        flags::ROTATE,
        TransformComponent::Rotate([0.0, 0.0, 1.0], angle),
    )
}

pub fn scale(factor: f32) -> Attribute {
    Attribute::TransformComponent(flags::SCALE, TransformComponent::Scale([factor, factor, 1.0]))
}

// ---------------------------------------------------------------------------
// Behavior classes

pub fn pointer() -> Attribute {
    Attribute::Class(flags::CURSOR, classes::CURSOR_POINTER)
}

pub fn scrollbars() -> Attribute {
    Attribute::Class(flags::OVERFLOW, classes::SCROLLBARS)
}

pub fn clip() -> Attribute {
    Attribute::Class(flags::OVERFLOW, classes::OVERFLOW_HIDDEN)
}

// ---------------------------------------------------------------------------
// Nearby elements

pub fn above(element: Element) -> Attribute {
    Attribute::Nearby(Location::Above, element)
}

pub fn below(element: Element) -> Attribute {
    Attribute::Nearby(Location::Below, element)
}

pub fn on_right(element: Element) -> Attribute {
    Attribute::Nearby(Location::OnRight, element)
}

pub fn on_left(element: Element) -> Attribute {
    Attribute::Nearby(Location::OnLeft, element)
}

pub fn in_front(element: Element) -> Attribute {
    Attribute::Nearby(Location::InFront, element)
}

pub fn behind_content(element: Element) -> Attribute {
    Attribute::Nearby(Location::Behind, element)
}

// ---------------------------------------------------------------------------
// Semantics and escape hatches

pub fn describe(description: Description) -> Attribute {
    Attribute::Describe(description)
}

/// A literal DOM attribute, passed through untouched.
pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Attribute {
    Attribute::Attr(name.into(), value.into())
}

// ---------------------------------------------------------------------------
// Pseudo-class decorations

/// Styles applied while the pointer hovers the element.
///
/// Only style decorations survive the wrapping; non-style attributes in the
/// list are ignored.
pub fn hovered(decorations: Vec<Attribute>) -> Attribute {
    pseudo(PseudoClass::Hover, flags::HOVER, decorations)
}

/// Styles applied while the element has focus.
pub fn focused(decorations: Vec<Attribute>) -> Attribute {
    pseudo(PseudoClass::Focus, flags::FOCUS, decorations)
}

/// Styles applied while the element is pressed.
pub fn pressed(decorations: Vec<Attribute>) -> Attribute {
    pseudo(PseudoClass::Active, flags::ACTIVE, decorations)
}

fn pseudo(
    class: PseudoClass,
    flag: weft_style::Flag,
    decorations: Vec<Attribute>,
) -> Attribute {
    let styles: Vec<Style> = decorations
        .into_iter()
        .filter_map(|attr| match attr {
            Attribute::StyleClass(_, style) => Some(style),
            _ => None,
        })
        .collect();
    Attribute::StyleClass(flag, Style::PseudoSelector { class, styles })
}

// ---------------------------------------------------------------------------
// Grid

/// Declare the grid tracks and gutters of a grid container.
pub fn grid_template(
    spacing: (Length, Length),
    columns: Vec<Length>,
    rows: Vec<Length>,
) -> Attribute {
    Attribute::StyleClass(
        flags::GRID_TEMPLATE,
        Style::GridTemplate {
            spacing,
            columns,
            rows,
        },
    )
}

/// Place a child at a grid cell (1-based row/column, spans in cells).
pub fn grid_cell(row: u32, col: u32, width: u32, height: u32) -> Attribute {
    Attribute::StyleClass(
        flags::GRID_POSITION,
        Style::GridPosition {
            row,
            col,
            width,
            height,
        },
    )
}
