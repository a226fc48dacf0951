//! Color model
//!
//! Colors are stored normalized (0-1 channels, 0-360 hue) but remember the
//! notation they were constructed from, so CSS output keeps the author's
//! convention. Channel bounds are checked at construction, before a color
//! can enter the style pipeline.

use crate::format::float_css;

/// The numeric convention a color literal was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    Hsl,
    Hsla,
    Rgb,
    Rgba,
    Rgb255,
    Rgba255,
}

/// A validated color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Hsla {
        hue: f32,
        saturation: f32,
        lightness: f32,
        alpha: f32,
        notation: Notation,
    },
    Rgba {
        red: f32,
        green: f32,
        blue: f32,
        alpha: f32,
        notation: Notation,
    },
}

/// Channel validation failure at color construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("{channel} channel {value} out of range {min}..={max} for {notation:?}")]
    ChannelOutOfRange {
        channel: &'static str,
        value: f32,
        min: f32,
        max: f32,
        notation: Notation,
    },
}

fn check(
    channel: &'static str,
    value: f32,
    min: f32,
    max: f32,
    notation: Notation,
) -> Result<f32, ColorError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(ColorError::ChannelOutOfRange {
            channel,
            value,
            min,
            max,
            notation,
        })
    }
}

/// `hsl(hue 0-360, saturation 0-1, lightness 0-1)`
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Result<Color, ColorError> {
    let n = Notation::Hsl;
    Ok(Color::Hsla {
        hue: check("hue", hue, 0.0, 360.0, n)?,
        saturation: check("saturation", saturation, 0.0, 1.0, n)?,
        lightness: check("lightness", lightness, 0.0, 1.0, n)?,
        alpha: 1.0,
        notation: n,
    })
}

/// `hsla(hue 0-360, saturation 0-1, lightness 0-1, alpha 0-1)`
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Result<Color, ColorError> {
    let n = Notation::Hsla;
    Ok(Color::Hsla {
        hue: check("hue", hue, 0.0, 360.0, n)?,
        saturation: check("saturation", saturation, 0.0, 1.0, n)?,
        lightness: check("lightness", lightness, 0.0, 1.0, n)?,
        alpha: check("alpha", alpha, 0.0, 1.0, n)?,
        notation: n,
    })
}

/// `rgb(r, g, b)` with 0-1 channels.
pub fn rgb(red: f32, green: f32, blue: f32) -> Result<Color, ColorError> {
    let n = Notation::Rgb;
    Ok(Color::Rgba {
        red: check("red", red, 0.0, 1.0, n)?,
        green: check("green", green, 0.0, 1.0, n)?,
        blue: check("blue", blue, 0.0, 1.0, n)?,
        alpha: 1.0,
        notation: n,
    })
}

/// `rgba(r, g, b, a)` with 0-1 channels.
pub fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Result<Color, ColorError> {
    let n = Notation::Rgba;
    Ok(Color::Rgba {
        red: check("red", red, 0.0, 1.0, n)?,
        green: check("green", green, 0.0, 1.0, n)?,
        blue: check("blue", blue, 0.0, 1.0, n)?,
        alpha: check("alpha", alpha, 0.0, 1.0, n)?,
        notation: n,
    })
}

/// `rgb255(r, g, b)` with 0-255 channels, stored pre-divided.
pub fn rgb255(red: f32, green: f32, blue: f32) -> Result<Color, ColorError> {
    let n = Notation::Rgb255;
    Ok(Color::Rgba {
        red: check("red", red, 0.0, 255.0, n)? / 255.0,
        green: check("green", green, 0.0, 255.0, n)? / 255.0,
        blue: check("blue", blue, 0.0, 255.0, n)? / 255.0,
        alpha: 1.0,
        notation: n,
    })
}

/// `rgba255(r, g, b, a)` with 0-255 channels and 0-1 alpha.
pub fn rgba255(red: f32, green: f32, blue: f32, alpha: f32) -> Result<Color, ColorError> {
    let n = Notation::Rgba255;
    Ok(Color::Rgba {
        red: check("red", red, 0.0, 255.0, n)? / 255.0,
        green: check("green", green, 0.0, 255.0, n)? / 255.0,
        blue: check("blue", blue, 0.0, 255.0, n)? / 255.0,
        alpha: check("alpha", alpha, 0.0, 1.0, n)?,
        notation: n,
    })
}

impl Color {
    /// CSS value for this color, in the notation it was constructed with.
    ///
    /// HSL renders saturation/lightness scaled to percent; RGB renders
    /// channels scaled to 0-255, whatever the internal storage.
    pub fn format_css(&self) -> String {
        match *self {
            Color::Hsla {
                hue,
                saturation,
                lightness,
                alpha,
                notation,
            } => {
                let s = (saturation * 100.0).round();
                let l = (lightness * 100.0).round();
                match notation {
                    Notation::Hsl => {
                        format!("hsl({}, {}%, {}%)", float_css(hue), float_css(s), float_css(l))
                    }
                    _ => format!(
                        "hsla({}, {}%, {}%, {})",
                        float_css(hue),
                        float_css(s),
                        float_css(l),
                        float_css(alpha)
                    ),
                }
            }
            Color::Rgba {
                red,
                green,
                blue,
                alpha,
                notation,
            } => {
                let r = (red * 255.0).round();
                let g = (green * 255.0).round();
                let b = (blue * 255.0).round();
                match notation {
                    Notation::Rgb | Notation::Rgb255 => {
                        format!("rgb({}, {}, {})", float_css(r), float_css(g), float_css(b))
                    }
                    _ => format!(
                        "rgba({}, {}, {}, {})",
                        float_css(r),
                        float_css(g),
                        float_css(b),
                        float_css(alpha)
                    ),
                }
            }
        }
    }

    /// Class-name fragment for this color.
    ///
    /// Fixed integer scaling keeps the fragment bounded: hue rounds as-is,
    /// saturation/lightness truncate at x100, rgb channels round at x255,
    /// alpha rounds at x100. HSL-stored fragments carry an `hsl-` marker so
    /// the two storage families can never collide on the same digits;
    /// distinct colors always yield distinct fragments.
    pub fn format_class(&self) -> String {
        match *self {
            Color::Hsla {
                hue,
                saturation,
                lightness,
                alpha,
                ..
            } => format!(
                "hsl-{}-{}-{}-{}",
                hue.round() as i64,
                (saturation * 100.0) as i64,
                (lightness * 100.0) as i64,
                (alpha * 100.0).round() as i64
            ),
            Color::Rgba {
                red,
                green,
                blue,
                alpha,
                ..
            } => format!(
                "{}-{}-{}-{}",
                (red * 255.0).round() as i64,
                (green * 255.0).round() as i64,
                (blue * 255.0).round() as i64,
                (alpha * 100.0).round() as i64
            ),
        }
    }
}
