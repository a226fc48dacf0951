//! Device classification and unit helpers
//!
//! Simple table lookups components may use before constructing attributes.
//! None of this feeds back into the style core.

use serde::{Deserialize, Serialize};

/// A window size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    Phone,
    Tablet,
    Desktop,
    BigDesktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub class: DeviceClass,
    pub orientation: Orientation,
}

/// Classify a window by the shorter and longer side breakpoint table.
pub fn classify_device(window: WindowSize) -> Device {
    let long = window.width.max(window.height);
    let short = window.width.min(window.height);

    let class = if short <= 600 {
        DeviceClass::Phone
    } else if long <= 1200 {
        DeviceClass::Tablet
    } else if long <= 1920 {
        DeviceClass::Desktop
    } else {
        DeviceClass::BigDesktop
    };

    let orientation = if window.width < window.height {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    };

    Device { class, orientation }
}

/// One value per device class.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints<T> {
    pub phone: T,
    pub tablet: T,
    pub desktop: T,
    pub big_desktop: T,
}

impl Device {
    /// Table lookup by device class.
    pub fn respond<'a, T>(&self, breakpoints: &'a Breakpoints<T>) -> &'a T {
        match self.class {
            DeviceClass::Phone => &breakpoints.phone,
            DeviceClass::Tablet => &breakpoints.tablet,
            DeviceClass::Desktop => &breakpoints.desktop,
            DeviceClass::BigDesktop => &breakpoints.big_desktop,
        }
    }
}

/// Modular type scale: `normal` at rescale 0, stepped by `ratio` above and
/// below.
pub fn modular(normal: f32, ratio: f32, rescale: i32) -> f32 {
    match rescale {
        0 => normal,
        n if n < 0 => normal * ratio.powi(n),
        n => normal * ratio.powi(n - 1) * ratio,
    }
}

/// Convert a point size (1pt = 4/3 px) to CSS pixels.
pub fn pt_to_px(points: f32) -> f32 {
    points * 4.0 / 3.0
}

/// Convert CSS pixels to rem at the given root font size.
pub fn px_to_rem(pixels: f32, root_font_size: f32) -> f32 {
    pixels / root_font_size
}
