//! Color values, parsing and compositing for the swatch sampler.
//!
//! # Scope
//!
//! This crate implements:
//! - **Color values** - `sRGB` channels with a fractional alpha
//! - **Parsing** - the `rgb()`/`rgba()` form produced by computed styles,
//!   with an opaque white fallback for everything else
//! - **Compositing** - the "source over" operator from
//!   [Compositing and Blending Level 1](https://www.w3.org/TR/compositing-1/#porterduffcompositingoperators_srcover)
//!
//! Every function here is total: unusable input degrades to a defined
//! color instead of an error.

/// The [`Color`] value type and its formatting.
pub mod color;
/// Alpha compositing.
pub mod composite;
/// Parsing of computed `background-color` values.
pub mod parse;

pub use color::Color;
pub use composite::blend;
pub use parse::parse_color;
