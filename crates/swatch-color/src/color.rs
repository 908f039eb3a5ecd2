//! `sRGB` color with a fractional alpha channel.
//!
//! [CSS Color Level 4 § 4.1](https://www.w3.org/TR/css-color-4/#rgb-functions)

use std::fmt;

use serde::Serialize;

/// An `sRGB` color as found in computed styles.
///
/// Channels are integers in `0..=255`. Alpha is kept as the real number
/// from the `rgba()` notation, so `0.5` round-trips exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Opaque white. Used whenever nothing is known about a background.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Transparent black, the result of compositing two invisible layers.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// A color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// True when the alpha is exactly 1.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_opaque(self) -> bool {
        self.a == 1.0
    }

    /// True when the alpha is exactly 0. The channels are meaningless then.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }

    /// Perceived brightness using the broadcast luma weights (BT.601).
    ///
    /// Works on the gamma-encoded channels directly, so the result is in
    /// `0.0..=255.0` and only approximates perceived lightness.
    #[must_use]
    pub fn brightness(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// `rgb(r, g, b)` notation, dropping alpha. This is what the indicator
    /// paints with.
    #[must_use]
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Hex notation (#RRGGBB), dropping alpha.
    ///
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    #[must_use]
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Formats in the same notation computed styles use: `rgb()` when opaque,
/// `rgba()` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
