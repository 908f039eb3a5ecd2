//! The sampler: hit-testing, caching and resolution behind two entry
//! points, [`Sampler::resolve_color_at`] and [`Sampler::is_page_dark`].

use swatch_color::Color;

use crate::cache::ColorCache;
use crate::config::SamplerConfig;
use crate::heuristic::{PageSample, PageTone, grid_points, median, normalize_step};
use crate::indicator::Indicator;
use crate::resolve::{Resolution, resolve, trace};
use crate::surface::Surface;

/// Resolves effective colors on a [`Surface`] and remembers them per
/// element.
///
/// The sampler owns its surface. Mutating the surface through
/// [`Sampler::surface_mut`] does not touch the cache; call
/// [`Sampler::forget`] or [`Sampler::invalidate_all`] for elements whose
/// background changed, or accept stale colors until the next page pass.
#[derive(Debug)]
pub struct Sampler<S: Surface> {
    surface: S,
    cache: ColorCache<S::Node>,
    config: SamplerConfig,
}

impl<S: Surface> Sampler<S> {
    /// A sampler with the default configuration.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, SamplerConfig::default())
    }

    /// A sampler with explicit settings.
    #[must_use]
    pub fn with_config(surface: S, config: SamplerConfig) -> Self {
        Self {
            surface,
            cache: ColorCache::new(config.cache_capacity),
            config,
        }
    }

    /// The page being sampled.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the page. Cached colors are not invalidated.
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the page back.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// The color cache, for inspection.
    #[must_use]
    pub const fn cache(&self) -> &ColorCache<S::Node> {
        &self.cache
    }

    /// The effective color at a viewport point.
    ///
    /// Hits are cached per element; a miss (no element under the point) is
    /// opaque white and isn't cached. With an unchanged page, repeated calls
    /// return the same color.
    pub fn resolve_color_at(&mut self, x: f64, y: f64) -> Color {
        let Some(node) = self.surface.hit_test(x, y) else {
            log::trace!("no element at ({x}, {y})");
            return Color::WHITE;
        };
        let surface = &self.surface;
        self.cache
            .get_or_insert_with(node, || resolve(surface, Some(node)))
    }

    /// Layer-by-layer breakdown of the color at a point. Never cached.
    #[must_use]
    pub fn trace_at(&self, x: f64, y: f64) -> Resolution<S::Node> {
        trace(&self.surface, self.surface.hit_test(x, y))
    }

    /// Sample the page on a `step_px` grid and classify it.
    ///
    /// The cache is cleared first so the pass reflects the page as it is
    /// now; the colors it resolves stay cached for pointer lookups.
    pub fn sample_page(&mut self, step_px: f64) -> PageSample {
        let viewport = self.surface.viewport_size();
        let step_px = normalize_step(step_px, viewport);
        self.cache.clear();

        let mut brightness: Vec<f64> = grid_points(viewport, step_px)
            .map(|(x, y)| self.resolve_color_at(x, y).brightness())
            .collect();
        let samples = brightness.len();
        let median = median(&mut brightness);
        let tone = PageTone::from_median(median, self.config.dark_threshold);

        log::debug!(
            "sampled {samples} points every {step_px}px: median brightness {median:?}, {tone:?} \
             (cache {} hits / {} misses)",
            self.cache.stats().hits,
            self.cache.stats().misses
        );

        PageSample {
            tone,
            median,
            samples,
            step_px,
        }
    }

    /// Whether the page's median brightness on a `step_px` grid is below
    /// the dark threshold. An empty viewport is not dark.
    pub fn is_page_dark(&mut self, step_px: f64) -> bool {
        self.sample_page(step_px).tone.is_dark()
    }

    /// Classify the page using the configured grid spacing.
    pub fn page_tone(&mut self) -> PageTone {
        self.sample_page(self.config.step_px).tone
    }

    /// An indicator for `tone`, already showing the color under its own
    /// center.
    pub fn create_indicator(&mut self, tone: PageTone) -> Indicator {
        let mut indicator = Indicator::new(tone);
        let (x, y) = Indicator::center(self.surface.viewport_size());
        let _ = indicator.track(self.resolve_color_at(x, y));
        indicator
    }

    /// Forget the cached color of one element. Returns whether it was cached.
    pub fn forget(&mut self, node: S::Node) -> bool {
        self.cache.forget(node)
    }

    /// Forget every cached color.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }
}
