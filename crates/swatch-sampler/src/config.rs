//! Sampler settings.

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::heuristic::{DARK_THRESHOLD, DEFAULT_STEP_PX};

/// Tunables for a [`Sampler`](crate::Sampler).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Grid spacing for page tone sampling, in CSS pixels. Smaller is more
    /// accurate and quadratically more expensive.
    pub step_px: f64,
    /// Color cache size; zero disables the cache.
    pub cache_capacity: usize,
    /// Median brightness below which a page counts as dark.
    pub dark_threshold: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            step_px: DEFAULT_STEP_PX,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            dark_threshold: DARK_THRESHOLD,
        }
    }
}
