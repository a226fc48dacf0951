//! Attribute model
//!
//! Attributes are the closed set of decorations a component can attach to a
//! layout node. They are collected in source order, consumed exactly once by
//! the resolution pass, and never retained on the rendered node.

use weft_style::flags::Flag;
use weft_style::length::Length;
use weft_style::style::{Style, TransformComponent};

use crate::render::Element;

/// Horizontal self-alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    CenterX,
    Right,
}

/// Vertical self-alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    CenterY,
    Bottom,
}

/// Placement of an out-of-flow child relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Above,
    Below,
    OnRight,
    OnLeft,
    InFront,
    Behind,
}

/// Semantic description passed through to the DOM (role/ARIA or node name).
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    Main,
    Navigation,
    ContentInfo,
    Complementary,
    Heading(u8),
    Label(String),
    LivePolite,
    LiveAssertive,
    Button,
    Paragraph,
}

/// One decoration on a layout node.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// No-op placeholder; lets callers compose attributes conditionally.
    NoAttribute,
    /// Literal DOM attribute.
    Attr(String, String),
    /// Semantic/ARIA description.
    Describe(Description),
    /// A fixed class guarded by a flag.
    Class(Flag, &'static str),
    /// A dynamic style guarded by a flag; the interesting case.
    StyleClass(Flag, Style),
    AlignX(HAlign),
    AlignY(VAlign),
    Width(Length),
    Height(Length),
    /// Out-of-flow child at the given location.
    Nearby(Location, Element),
    /// One component of the node's transform; components compose.
    TransformComponent(Flag, TransformComponent),
}
