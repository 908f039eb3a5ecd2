//! The floating color indicator, as state.
//!
//! Creating and styling the on-page widget is the host's job. This is the
//! part worth testing: which fill and icon it shows, where its center sits,
//! and how pointer samples update it.

use serde::Serialize;
use swatch_color::Color;
use swatch_dom::Viewport;

use crate::heuristic::PageTone;

/// Distance from the viewport's right and bottom edges.
pub const INDICATOR_MARGIN_PX: f64 = 10.0;

/// Diameter of the indicator's content box.
pub const INDICATOR_DIAMETER_PX: f64 = 40.0;

/// Border width around the content box.
pub const INDICATOR_BORDER_PX: f64 = 2.0;

/// A circular swatch pinned to the bottom-right corner.
///
/// It starts with the page tone's base fill and switches to sampled colors
/// as the pointer moves. The tone is decided once; an indicator recreated
/// after the host removed it keeps the tone it had.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Indicator {
    tone: PageTone,
    fill: Color,
}

impl Indicator {
    /// An indicator showing the base fill for `tone`.
    #[must_use]
    pub const fn new(tone: PageTone) -> Self {
        Self {
            tone,
            fill: tone.base_fill(),
        }
    }

    /// Center of the indicator's border box in viewport coordinates.
    #[must_use]
    pub fn center(viewport: Viewport) -> (f64, f64) {
        let half = INDICATOR_DIAMETER_PX / 2.0 + INDICATOR_BORDER_PX;
        (
            viewport.width - INDICATOR_MARGIN_PX - half,
            viewport.height - INDICATOR_MARGIN_PX - half,
        )
    }

    /// Show `color`. Returns whether the painted fill changed; alpha is
    /// never painted, so it doesn't count.
    pub fn track(&mut self, color: Color) -> bool {
        let changed = (self.fill.r, self.fill.g, self.fill.b) != (color.r, color.g, color.b);
        self.fill = color;
        changed
    }

    /// The tone chosen at creation.
    #[must_use]
    pub const fn tone(&self) -> PageTone {
        self.tone
    }

    /// The color currently shown.
    #[must_use]
    pub const fn fill(&self) -> Color {
        self.fill
    }

    /// The CSS `background-color` to paint: `rgb(r, g, b)`, alpha dropped.
    #[must_use]
    pub fn css_background(&self) -> String {
        self.fill.to_css_rgb()
    }

    /// The tone's emoji.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.tone.icon()
    }
}
