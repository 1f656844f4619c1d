//! Content-keyed memoisation of telemetry merges
//!
//! Merging is pure, so a chart that re-renders with the same two series only
//! needs the previous result back. The cache keeps the most recent comparison
//! and a fingerprint of the inputs that produced it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

use super::{TelemetryComparison, merge};
use crate::types::{Channel, TelemetrySample};

/// Cached comparison with the fingerprint of its inputs
#[derive(Debug, Clone)]
pub struct MergeCacheEntry {
    /// Cached comparison
    pub comparison: Arc<TelemetryComparison>,
    /// Fingerprint of the inputs
    pub fingerprint: u64,
    /// Sample counts of the two input series
    pub input_lens: (usize, usize),
    /// When the comparison was computed
    pub computed_at: std::time::SystemTime,
}

impl MergeCacheEntry {
    pub fn new(
        comparison: Arc<TelemetryComparison>,
        fingerprint: u64,
        input_lens: (usize, usize),
    ) -> Self {
        Self { comparison, fingerprint, input_lens, computed_at: std::time::SystemTime::now() }
    }

    /// Check if this entry was computed from inputs with `fingerprint`
    pub fn is_valid(&self, fingerprint: u64) -> bool {
        self.fingerprint == fingerprint
    }

    /// Fingerprint match plus the cheap fields a 64-bit hash collision could hide
    fn matches(
        &self,
        fingerprint: u64,
        channel: Channel,
        driver_a: &str,
        driver_b: &str,
        input_lens: (usize, usize),
    ) -> bool {
        self.is_valid(fingerprint)
            && self.input_lens == input_lens
            && self.comparison.channel == channel
            && self.comparison.driver_a == driver_a
            && self.comparison.driver_b == driver_b
    }
}

/// Single-entry memo for [`merge`].
#[derive(Debug, Clone, Default)]
pub struct MergeCache {
    entry: Option<MergeCacheEntry>,
    hits: u64,
    misses: u64,
}

impl MergeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached comparison for these inputs, merging only when they changed.
    pub fn get_or_merge(
        &mut self,
        series_a: &[TelemetrySample],
        series_b: &[TelemetrySample],
        channel: Channel,
        driver_a: &str,
        driver_b: &str,
    ) -> Arc<TelemetryComparison> {
        let fingerprint = fingerprint(series_a, series_b, channel, driver_a, driver_b);
        let input_lens = (series_a.len(), series_b.len());

        if let Some(cached) = &self.entry {
            if cached.matches(fingerprint, channel, driver_a, driver_b, input_lens) {
                self.hits += 1;
                debug!(channel = %channel, driver_a, driver_b, "Using cached comparison");
                return Arc::clone(&cached.comparison);
            }
        }

        self.misses += 1;
        debug!(
            channel = %channel,
            driver_a,
            driver_b,
            len_a = series_a.len(),
            len_b = series_b.len(),
            "Computing fresh comparison"
        );

        let comparison = Arc::new(merge(series_a, series_b, channel, driver_a, driver_b));
        self.entry = Some(MergeCacheEntry::new(Arc::clone(&comparison), fingerprint, input_lens));
        comparison
    }

    /// Cached comparison if it was computed from inputs with `fingerprint`
    pub fn get_cached(&self, fingerprint: u64) -> Option<Arc<TelemetryComparison>> {
        self.entry
            .as_ref()
            .filter(|entry| entry.is_valid(fingerprint))
            .map(|entry| Arc::clone(&entry.comparison))
    }

    /// `(hits, misses)` since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

/// Hash of everything [`merge`] reads. Floats are hashed by bit pattern.
pub fn fingerprint(
    series_a: &[TelemetrySample],
    series_b: &[TelemetrySample],
    channel: Channel,
    driver_a: &str,
    driver_b: &str,
) -> u64 {
    let mut hasher = DefaultHasher::new();
    channel.hash(&mut hasher);
    driver_a.hash(&mut hasher);
    driver_b.hash(&mut hasher);
    for series in [series_a, series_b] {
        series.len().hash(&mut hasher);
        for sample in series {
            sample.distance.to_bits().hash(&mut hasher);
            sample.value.map(f64::to_bits).hash(&mut hasher);
        }
    }
    hasher.finish()
}
