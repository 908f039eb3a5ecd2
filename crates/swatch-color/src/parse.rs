//! Parsing of computed `background-color` values.
//!
//! [CSSOM § 6.7.2 Serializing CSS Values](https://drafts.csswg.org/cssom/#serializing-css-values)
//!
//! "If the value is a color with an alpha of 1, serialize as `rgb(R, G, B)`;
//! otherwise `rgba(R, G, B, A)`."
//!
//! Computed styles always come back in that legacy comma form, so only
//! that form is recognized. Keywords, hex and the space-separated syntax
//! are treated as unknown.

use crate::color::Color;

/// Parse a computed background value, falling back to opaque white.
///
/// Accepts `rgb(r, g, b)` and `rgba(r, g, b, a)` anywhere in `value`; the
/// function name does not constrain the arity. Channels above 255 are
/// clamped, as is alpha to `0.0..=1.0`. An absent or unrecognized value
/// (including `transparent`) is opaque white, which stands for "no
/// information" rather than an error.
#[must_use]
pub fn parse_color(value: Option<&str>) -> Color {
    value.and_then(parse_rgb_function).unwrap_or(Color::WHITE)
}

/// Find and parse the first `rgb()`/`rgba()` in `value`.
///
/// Returns `None` when no occurrence parses.
#[must_use]
pub fn parse_rgb_function(value: &str) -> Option<Color> {
    value
        .match_indices("rgb")
        .find_map(|(start, _)| Cursor::new(&value.as_bytes()[start..]).rgb_function())
}

/// A byte cursor over the candidate function text.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consume `expected` if it is the next byte.
    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume bytes while `pred` holds and return them.
    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    /// `rgb` `a`? `(` channel sep channel sep channel (sep alpha)? `)`
    fn rgb_function(&mut self) -> Option<Color> {
        for &expected in b"rgb" {
            if !self.eat(expected) {
                return None;
            }
        }
        let _ = self.eat(b'a');
        if !self.eat(b'(') {
            return None;
        }

        let r = self.channel()?;
        self.separator()?;
        let g = self.channel()?;
        self.separator()?;
        let b = self.channel()?;

        let a = if self.separator().is_some() {
            self.alpha()?
        } else {
            // "If omitted, it defaults to 100%."
            1.0
        };

        self.eat(b')').then_some(Color::rgba(r, g, b, a))
    }

    /// A comma followed by any number of spaces.
    fn separator(&mut self) -> Option<()> {
        if !self.eat(b',') {
            return None;
        }
        let _ = self.take_while(|b| b == b' ');
        Some(())
    }

    /// One or more decimal digits, clamped to 255.
    fn channel(&mut self) -> Option<u8> {
        let digits = self.take_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            return None;
        }
        let value = digits.iter().fold(0u32, |acc, d| {
            acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
        });
        Some(u8::try_from(value).unwrap_or(u8::MAX))
    }

    /// A run of digits and dots, read as its longest decimal prefix
    /// (`1.2.3` reads as `1.2`), clamped to `0.0..=1.0`.
    fn alpha(&mut self) -> Option<f64> {
        let token = self.take_while(|b| b.is_ascii_digit() || b == b'.');
        let int_len = token.iter().take_while(|b| b.is_ascii_digit()).count();
        let mut end = int_len;
        if token.get(end) == Some(&b'.') {
            end += 1;
            end += token[end..].iter().take_while(|b| b.is_ascii_digit()).count();
        }
        let prefix = &token[..end];
        if !prefix.iter().any(u8::is_ascii_digit) {
            return None;
        }
        let text = std::str::from_utf8(prefix).ok()?;
        let value: f64 = text.parse().ok()?;
        Some(value.clamp(0.0, 1.0))
    }
}
