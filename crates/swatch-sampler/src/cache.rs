//! Resolved colors keyed by element.
//!
//! Nearby pointer positions and neighbouring grid samples usually land on
//! the same element, and resolving means walking its whole ancestor chain.
//! The cache stores the final color per element handle.
//!
//! Keys are [`Surface::Node`](crate::Surface::Node) handles, which never
//! own the element, so a removed element is not kept alive by sitting in
//! here. Nothing invalidates entries automatically: a background that
//! changes after its element was cached keeps reporting the old color
//! until [`ColorCache::forget`] or [`ColorCache::clear`] is called. The
//! sampler clears the cache at the start of every page sampling pass.

use std::collections::HashMap;
use std::hash::Hash;

use swatch_color::Color;

/// Default number of entries before the cache starts over.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Hit and miss counters since creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to resolve.
    pub misses: u64,
}

/// A bounded map from element handle to resolved color.
///
/// When an insert would exceed the capacity, every entry is dropped first.
/// A capacity of zero disables caching.
#[derive(Debug, Clone)]
pub struct ColorCache<K> {
    entries: HashMap<K, Color>,
    capacity: usize,
    stats: CacheStats,
}

impl<K: Copy + Eq + Hash> ColorCache<K> {
    /// An empty cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// The cached color for `key`, if present.
    #[must_use]
    pub fn get(&self, key: K) -> Option<Color> {
        self.entries.get(&key).copied()
    }

    /// Store `color` for `key`, making room by clearing if full.
    pub fn insert(&mut self, key: K, color: Color) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            log::debug!("color cache full at {} entries; clearing", self.entries.len());
            self.entries.clear();
        }
        let _ = self.entries.insert(key, color);
    }

    /// The cached color for `key`, or `resolve()`'s result, which is cached.
    pub fn get_or_insert_with(&mut self, key: K, resolve: impl FnOnce() -> Color) -> Color {
        if let Some(color) = self.get(key) {
            self.stats.hits += 1;
            return color;
        }
        self.stats.misses += 1;
        let color = resolve();
        self.insert(key, color);
        color
    }

    /// Drop the entry for `key` (its element was restyled or removed).
    /// Returns whether there was one.
    pub fn forget(&mut self, key: K) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries; zero means caching is off.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hit and miss counters.
    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl<K: Copy + Eq + Hash> Default for ColorCache<K> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
