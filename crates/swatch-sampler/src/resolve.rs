//! Ancestor-chain compositing.
//!
//! The visible color under an element is its own background composited
//! over whatever its ancestors show. Walking outward from the element:
//!
//! 1. Past the root element nothing is known, so the page is white.
//! 2. An opaque background hides everything behind it; stop there.
//! 3. A fully transparent background contributes nothing; skip it.
//! 4. A translucent background is composited over the rest of the chain.
//!
//! The walk is a loop rather than recursion. Translucent layers are
//! collected innermost first and then folded from the outermost inward,
//! which is the same as the recursive definition without the stack depth.

use serde::Serialize;
use swatch_color::parse::parse_rgb_function;
use swatch_color::{Color, blend};
use swatch_common::warning::warn_once;

use crate::surface::Surface;

/// What one element in the chain did to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    /// Opaque; the walk stopped here.
    Backdrop,
    /// Translucent; composited over the layers behind it.
    Blended,
    /// Fully transparent; ignored.
    Skipped,
}

/// One visited element and its parsed background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layer<N> {
    /// The element.
    pub node: N,
    /// Its background as parsed (white if unrecognized).
    pub color: Color,
    /// How it contributed.
    pub role: LayerRole,
}

/// The result of [`trace`]: the final color plus how it came about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<N> {
    /// The effective color, as [`resolve`] returns it.
    pub color: Color,
    /// Visited elements, innermost first.
    pub layers: Vec<Layer<N>>,
    /// True when no opaque layer was found and white filled in behind.
    pub white_fallback: bool,
}

/// The effective color of `node`, compositing its ancestors as needed.
///
/// `None` (a hit-test miss, or the walk leaving the root) is opaque white.
/// Every walk ends on an opaque backdrop, so the result is opaque up to
/// floating point error.
#[must_use]
pub fn resolve<S: Surface + ?Sized>(surface: &S, node: Option<S::Node>) -> Color {
    walk(surface, node, |_| {}).0
}

/// Like [`resolve`], but also reports every element visited.
#[must_use]
pub fn trace<S: Surface + ?Sized>(surface: &S, node: Option<S::Node>) -> Resolution<S::Node> {
    let mut layers = Vec::new();
    let (color, white_fallback) = walk(surface, node, |layer| layers.push(layer));
    Resolution {
        color,
        layers,
        white_fallback,
    }
}

/// Walk from `start` toward the root, reporting each visited layer.
///
/// Returns the composited color and whether the backdrop was the white
/// fallback.
fn walk<S, F>(surface: &S, start: Option<S::Node>, mut visit: F) -> (Color, bool)
where
    S: Surface + ?Sized,
    F: FnMut(Layer<S::Node>),
{
    // Translucent layers in walk order: each is in front of every later one.
    let mut translucent: Vec<Color> = Vec::new();
    let mut current = start;

    let (backdrop, white_fallback) = loop {
        let Some(node) = current else {
            break (Color::WHITE, true);
        };

        let color = background_of(surface, node);
        let role = if color.is_opaque() {
            LayerRole::Backdrop
        } else if color.is_transparent() {
            LayerRole::Skipped
        } else {
            LayerRole::Blended
        };
        visit(Layer { node, color, role });

        match role {
            LayerRole::Backdrop => break (color, false),
            LayerRole::Blended => translucent.push(color),
            LayerRole::Skipped => {}
        }
        current = surface.parent(node);
    };

    let color = translucent
        .iter()
        .rev()
        .fold(backdrop, |behind, &layer| blend(layer, behind));
    (color, white_fallback)
}

/// Parse an element's computed background, warning once per value that
/// isn't in `rgb()`/`rgba()` form.
fn background_of<S: Surface + ?Sized>(surface: &S, node: S::Node) -> Color {
    match surface.computed_background(node) {
        Some(value) => parse_rgb_function(value).unwrap_or_else(|| {
            warn_once(
                "resolve",
                &format!("unrecognized background `{value}`; treating it as opaque white"),
            );
            Color::WHITE
        }),
        None => {
            log::trace!("{node:?} has no computed background; treating it as opaque white");
            Color::WHITE
        }
    }
}
