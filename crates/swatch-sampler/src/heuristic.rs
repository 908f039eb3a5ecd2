//! Page tone estimation.
//!
//! Lay a square grid over the viewport, resolve the color under every grid
//! point, and take the median brightness. The median rather than the mean
//! keeps a few large saturated blocks from flipping the result.

use serde::Serialize;
use swatch_color::Color;
use swatch_common::warning::warn_once;
use swatch_dom::Viewport;

/// Default grid spacing in CSS pixels.
pub const DEFAULT_STEP_PX: f64 = 100.0;

/// Midpoint of the `0..=255` brightness range.
pub const DARK_THRESHOLD: f64 = 128.0;

/// Whether a page reads as light or dark overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTone {
    /// Median brightness at or above the threshold.
    Light,
    /// Median brightness below the threshold.
    Dark,
}

impl PageTone {
    /// Classify a median brightness. No samples at all reads as light.
    #[must_use]
    pub fn from_median(median: Option<f64>, threshold: f64) -> Self {
        match median {
            Some(m) if m < threshold => Self::Dark,
            _ => Self::Light,
        }
    }

    /// True for [`PageTone::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The indicator fill before the first sample: black on dark pages,
    /// white on light ones.
    #[must_use]
    pub const fn base_fill(self) -> Color {
        match self {
            Self::Light => Color::WHITE,
            Self::Dark => Color::BLACK,
        }
    }

    /// Emoji shown in the indicator for this tone.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}\u{fe0f}", // ☀️
            Self::Dark => "\u{1f319}",         // 🌙
        }
    }
}

/// Outcome of one sampling pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSample {
    /// The classification.
    pub tone: PageTone,
    /// Median brightness, `None` when the viewport had no grid points.
    pub median: Option<f64>,
    /// Number of grid points sampled.
    pub samples: usize,
    /// The grid spacing actually used.
    pub step_px: f64,
}

/// Upper bound on grid points in one pass. A step small enough to exceed it
/// is treated like an unusable one.
pub const MAX_GRID_POINTS: u64 = 1 << 20;

/// Grid points covering `[0, width) × [0, height)` every `step` pixels,
/// starting at the origin, row by row.
///
/// `step` must be finite and positive; see [`normalize_step`].
pub fn grid_points(viewport: Viewport, step: f64) -> impl Iterator<Item = (f64, f64)> {
    let axis = move |extent: f64| {
        (0..axis_len(extent, step))
            .map(move |i| f64::from(i) * step)
            .take_while(move |&v| v < extent)
    };
    axis(viewport.height).flat_map(move |y| axis(viewport.width).map(move |x| (x, y)))
}

/// Number of grid points `grid_points` yields for `viewport`.
#[must_use]
pub fn grid_len(viewport: Viewport, step: f64) -> u64 {
    u64::from(axis_len(viewport.width, step)) * u64::from(axis_len(viewport.height, step))
}

/// Points along one axis: multiples of `step` below `extent`. The float to
/// int cast saturates, so NaN and negative extents give zero.
fn axis_len(extent: f64, step: f64) -> u32 {
    (extent / step).ceil() as u32
}

/// Replace an unusable grid spacing with [`DEFAULT_STEP_PX`]: zero,
/// negative, NaN, infinite, or so small that `viewport` would need more
/// than [`MAX_GRID_POINTS`] samples.
#[must_use]
pub fn normalize_step(step: f64, viewport: Viewport) -> f64 {
    if !(step.is_finite() && step > 0.0) {
        warn_once(
            "sample",
            &format!("grid step {step} is not a positive number; using {DEFAULT_STEP_PX}"),
        );
        return DEFAULT_STEP_PX;
    }
    let points = grid_len(viewport, step);
    if points > MAX_GRID_POINTS {
        warn_once(
            "sample",
            &format!(
                "grid step {step} needs {points} samples (limit {MAX_GRID_POINTS}); \
                 using {DEFAULT_STEP_PX}"
            ),
        );
        return DEFAULT_STEP_PX;
    }
    step
}

/// Sort `values` ascending and return the median: the middle value for an
/// odd count, the mean of the two middle values for an even one.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}
