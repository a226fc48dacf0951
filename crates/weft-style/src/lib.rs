//! weft style core
//!
//! The style-computation half of the weft layout engine: a flag bitset for
//! style categories, algebraic value types (lengths, colors, shadows,
//! transforms) with deterministic CSS and class-name canonicalization, a
//! CSS rule IR with a compact emitter, the static base stylesheet, and the
//! per-render stylesheet registry.

pub mod color;
pub mod flags;
pub mod format;
pub mod length;
pub mod registry;
pub mod rules;
pub mod sheet;
pub mod style;

pub use color::{Color, ColorError, Notation, hsl, hsla, rgb, rgb255, rgba, rgba255};
pub use flags::{Field, Flag, flag};
pub use length::{Length, fill, maximum, minimum, px, rem};
pub use registry::{FocusStyle, RegistryOptions, SheetMode, StyleRegistry};
pub use style::{
    Font, PseudoClass, Shadow, Style, TransformComponent, Transformation, Variant,
};
