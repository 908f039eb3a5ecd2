//! [Compositing and Blending Level 1 § 5.1 Simple alpha compositing](https://www.w3.org/TR/compositing-1/#simplealphacompositing)
//!
//! "The formula for simple alpha compositing is
//!   co = Cs x αs + Cb x αb x (1 - αs)
//!   αo = αs + αb x (1 - αs)"
//!
//! `co` is premultiplied; dividing by `αo` gives the straight channel value.

use crate::color::Color;

/// Composite `top` over `bottom` ("source over").
///
/// Order matters: `top` is the layer nearer the viewer. When the combined
/// alpha is exactly zero the result is [`Color::TRANSPARENT`] since there is
/// nothing to divide by. Channels round half away from zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn blend(top: Color, bottom: Color) -> Color {
    let alpha = top.a + bottom.a * (1.0 - top.a);
    if alpha == 0.0 {
        return Color::TRANSPARENT;
    }

    let channel = |t: u8, b: u8| -> u8 {
        let premultiplied = f64::from(t) * top.a + f64::from(b) * bottom.a * (1.0 - top.a);
        (premultiplied / alpha).round().clamp(0.0, 255.0) as u8
    };

    Color {
        r: channel(top.r, bottom.r),
        g: channel(top.g, bottom.g),
        b: channel(top.b, bottom.b),
        a: alpha,
    }
}

impl Color {
    /// Composite `self` over `bottom`. Same as [`blend`]`(self, bottom)`.
    #[must_use]
    pub fn over(self, bottom: Self) -> Self {
        blend(self, bottom)
    }
}
