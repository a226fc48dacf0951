//! Length model
//!
//! Lengths are an algebraic type: fixed pixel/rem sizes, shrink-to-fit
//! content, proportional fill, and min/max wrappers around any other length.
//! Predicates recurse through the wrappers to the base case.

use crate::format::{float_class, float_css};

/// A width or height specification.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    /// Exact size in CSS pixels.
    Px(f32),
    /// Exact size in rem units.
    Rem(f32),
    /// Shrink to fit the content.
    Content,
    /// Fill the available space, weighted against sibling fills.
    Fill(u16),
    /// Lower-bounded (px) wrapper around another length.
    Min(u32, Box<Length>),
    /// Upper-bounded (px) wrapper around another length.
    Max(u32, Box<Length>),
}

/// Fill with the default portion of 1.
pub fn fill() -> Length {
    Length::Fill(1)
}

/// Pixel length.
pub fn px(n: f32) -> Length {
    Length::Px(n)
}

/// Rem length.
pub fn rem(n: f32) -> Length {
    Length::Rem(n)
}

/// Cap `inner` at `bound` pixels.
pub fn maximum(bound: u32, inner: Length) -> Length {
    Length::Max(bound, Box::new(inner))
}

/// Force `inner` to at least `bound` pixels.
pub fn minimum(bound: u32, inner: Length) -> Length {
    Length::Min(bound, Box::new(inner))
}

impl Length {
    /// True iff the base length (through any Min/Max wrappers) is a fill.
    pub fn is_fill(&self) -> bool {
        match self {
            Length::Fill(_) => true,
            Length::Min(_, inner) | Length::Max(_, inner) => inner.is_fill(),
            _ => false,
        }
    }

    /// True iff the base length is an exact pixel size.
    pub fn is_px(&self) -> bool {
        match self {
            Length::Px(_) => true,
            Length::Min(_, inner) | Length::Max(_, inner) => inner.is_px(),
            _ => false,
        }
    }

    /// True iff the base length is content-sized.
    pub fn is_content(&self) -> bool {
        match self {
            Length::Content => true,
            Length::Min(_, inner) | Length::Max(_, inner) => inner.is_content(),
            _ => false,
        }
    }

    /// True iff the length carries a Min or Max bound.
    pub fn is_constrained(&self) -> bool {
        matches!(self, Length::Min(..) | Length::Max(..))
    }

    /// CSS value for contexts that take a plain track size (grid templates).
    ///
    /// Fill becomes a `fr` track; bounded lengths become `minmax()`.
    pub fn format_css(&self) -> String {
        match self {
            Length::Px(n) => format!("{}px", float_css(*n)),
            Length::Rem(n) => format!("{}rem", float_css(*n)),
            Length::Content => "max-content".to_string(),
            Length::Fill(portion) => format!("{portion}fr"),
            Length::Min(bound, inner) => {
                format!("minmax({bound}px, {})", inner.format_css())
            }
            Length::Max(bound, inner) => {
                format!("minmax({}, {bound}px)", inner.format_css())
            }
        }
    }

    /// Class-name fragment for this length.
    pub fn format_class(&self) -> String {
        match self {
            Length::Px(n) => format!("px-{}", float_class(*n)),
            Length::Rem(n) => format!("rem-{}", float_class(*n)),
            Length::Content => "content".to_string(),
            Length::Fill(portion) => format!("fill-{portion}"),
            Length::Min(bound, inner) => format!("min-{bound}-{}", inner.format_class()),
            Length::Max(bound, inner) => format!("max-{bound}-{}", inner.format_class()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_recurse_through_wrappers() {
        assert!(minimum(10, Length::Fill(2)).is_fill());
        assert!(maximum(50, px(20.0)).is_px());
        assert!(minimum(5, maximum(10, Length::Content)).is_content());
        assert!(!Length::Content.is_constrained());
        assert!(minimum(10, fill()).is_constrained());
    }

    #[test]
    fn test_predicates_base_cases() {
        assert!(fill().is_fill());
        assert!(!fill().is_px());
        assert!(px(3.0).is_px());
        assert!(Length::Content.is_content());
    }

    #[test]
    fn test_track_css() {
        assert_eq!(px(20.0).format_css(), "20px");
        assert_eq!(rem(1.5).format_css(), "1.5rem");
        assert_eq!(Length::Content.format_css(), "max-content");
        assert_eq!(Length::Fill(2).format_css(), "2fr");
        assert_eq!(minimum(10, fill()).format_css(), "minmax(10px, 1fr)");
    }

    #[test]
    fn test_class_fragments() {
        assert_eq!(px(8.0).format_class(), "px-800");
        assert_eq!(px(8.04).format_class(), "px-804");
        assert_ne!(px(8.0).format_class(), px(8.04).format_class());
        assert_eq!(minimum(10, fill()).format_class(), "min-10-fill-1");
        assert_eq!(
            maximum(300, minimum(100, Length::Content)).format_class(),
            "max-300-min-100-content"
        );
    }
}
