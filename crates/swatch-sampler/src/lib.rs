//! Effective background color sampling for a rendered page.
//!
//! # Scope
//!
//! Given a point on screen, find the color a viewer actually sees there by
//! compositing the backgrounds of the topmost element and its ancestors,
//! and classify a whole page as light or dark by sampling a grid of such
//! points.
//!
//! ```text
//! point → hit test → element → ancestor chain → composited color
//!                                                   ↓
//!                                   brightness → median → page tone
//! ```
//!
//! The page itself is reached through the [`Surface`] trait; [`DomTree`]
//! implements it for in-memory scenes.
//!
//! # Model
//!
//! Only the ancestor chain of the topmost element counts. Siblings that
//! overlap without being ancestors, gradients, images, shadows and blend
//! modes other than "source over" are all ignored.
//!
//! [`DomTree`]: swatch_dom::DomTree

/// Color cache keyed by node identity.
pub mod cache;
/// Sampler settings.
pub mod config;
/// Grid sampling and light/dark classification.
pub mod heuristic;
/// State of the floating color indicator.
pub mod indicator;
/// Ancestor-chain compositing.
pub mod resolve;
/// The [`Sampler`] facade.
pub mod sampler;
/// The page seen through hit-testing and computed styles.
pub mod surface;

pub use cache::{CacheStats, ColorCache};
pub use config::SamplerConfig;
pub use heuristic::{PageSample, PageTone, grid_points, median};
pub use indicator::Indicator;
pub use resolve::{Layer, LayerRole, Resolution, resolve, trace};
pub use sampler::Sampler;
pub use surface::Surface;

pub use swatch_color::{Color, blend, parse_color};
pub use swatch_dom::Viewport;
