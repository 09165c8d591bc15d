//! Call counting for predicates and transforms.
//!
//! Pipelines are observed through the [`Probe`] trait. Scenario code calls
//! the probe from inside every predicate and transform it installs, so a
//! counting probe reports exactly how much per-element work a pipeline
//! did. [`NoProbe`] compiles down to nothing and is what timing runs use.
//!
//! # Usage
//!
//! ```rust
//! use seqpipe_core::stats::{counted_predicate, CallCounter};
//!
//! let counter = CallCounter::new();
//! let is_even = counted_predicate(&counter, |x: &i32| *x % 2 == 0);
//! assert!(is_even(&4));
//! assert!(!is_even(&5));
//! assert_eq!(counter.get(), 2);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Hook invoked once per predicate or transform call.
pub trait Probe {
    /// A predicate was evaluated.
    fn on_predicate(&self);

    /// A transform was applied.
    fn on_transform(&self);
}

/// A probe that records nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoProbe;

impl Probe for NoProbe {
    #[inline(always)]
    fn on_predicate(&self) {}

    #[inline(always)]
    fn on_transform(&self) {}
}

impl<P: Probe + ?Sized> Probe for &P {
    #[inline]
    fn on_predicate(&self) {
        (**self).on_predicate();
    }

    #[inline]
    fn on_transform(&self) {
        (**self).on_transform();
    }
}

/// A monotonically increasing call counter.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: AtomicU64,
}

impl CallCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one call.
    #[inline]
    pub fn increment(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of calls recorded.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Resets the counter to zero.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}

/// Per-pipeline call counts, split by stage kind.
#[derive(Debug, Default)]
pub struct PipelineStats {
    /// Predicate evaluations.
    predicates: CallCounter,
    /// Transform applications.
    transforms: CallCounter,
}

impl PipelineStats {
    /// Creates a stats instance with both counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of predicate evaluations.
    #[must_use]
    pub fn predicate_calls(&self) -> u64 {
        self.predicates.get()
    }

    /// Returns the number of transform applications.
    #[must_use]
    pub fn transform_calls(&self) -> u64 {
        self.transforms.get()
    }

    /// Returns predicate and transform calls combined.
    #[must_use]
    pub fn total_calls(&self) -> u64 {
        self.predicate_calls() + self.transform_calls()
    }

    /// Resets both counters.
    pub fn reset(&self) {
        self.predicates.reset();
        self.transforms.reset();
    }

    /// Takes a point-in-time copy of the counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            predicate_calls: self.predicate_calls(),
            transform_calls: self.transform_calls(),
        }
    }
}

impl Probe for PipelineStats {
    #[inline]
    fn on_predicate(&self) {
        self.predicates.increment();
    }

    #[inline]
    fn on_transform(&self) {
        self.transforms.increment();
    }
}

/// A copy of [`PipelineStats`] counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Predicate evaluations.
    pub predicate_calls: u64,
    /// Transform applications.
    pub transform_calls: u64,
}

/// Wraps `predicate` so every call bumps `counter` first.
pub fn counted_predicate<'c, T: ?Sized, P>(
    counter: &'c CallCounter,
    predicate: P,
) -> impl Fn(&T) -> bool + 'c
where
    P: Fn(&T) -> bool + 'c,
{
    move |item: &T| {
        counter.increment();
        predicate(item)
    }
}

/// Wraps `transform` so every call bumps `counter` first.
pub fn counted_transform<'c, T, R, F>(counter: &'c CallCounter, transform: F) -> impl Fn(T) -> R + 'c
where
    F: Fn(T) -> R + 'c,
{
    move |item: T| {
        counter.increment();
        transform(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_basics() {
        let counter = CallCounter::new();
        counter.increment();
        counter.increment();
        assert_eq!(counter.get(), 2);
        counter.reset();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn stats_probe_counts_by_kind() {
        let stats = PipelineStats::new();
        stats.on_predicate();
        stats.on_predicate();
        stats.on_transform();

        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                predicate_calls: 2,
                transform_calls: 1,
            }
        );
        assert_eq!(stats.total_calls(), 3);

        stats.reset();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn probe_through_reference() {
        let stats = PipelineStats::new();
        let probe = &stats;
        probe.on_transform();
        assert_eq!(stats.transform_calls(), 1);
        NoProbe.on_predicate();
    }

    #[test]
    fn counted_transform_counts() {
        let counter = CallCounter::new();
        let double = counted_transform(&counter, |x: u32| x * 2);
        assert_eq!(double(4), 8);
        assert_eq!(double(5), 10);
        assert_eq!(counter.get(), 2);
    }
}
