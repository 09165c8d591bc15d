//! Record generation and source construction.
//!
//! [`RecordGenerator`] is an endless stream of records; callers cut it to
//! a fixed length with [`build_source`]. The random source is always
//! supplied by the caller, so a seeded generator yields the same source
//! on every run.

use crate::record::{Record, NAMES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// An infinite stream of records with ascending ids and random names.
///
/// Restarting the stream means building a new generator; ids always
/// begin at 1.
#[derive(Debug, Clone)]
pub struct RecordGenerator<R> {
    rng: R,
    last_id: u32,
}

impl<R: Rng> RecordGenerator<R> {
    /// Creates a generator drawing names from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng, last_id: 0 }
    }

    /// Returns the id assigned to the most recent record (0 before the first).
    #[must_use]
    pub fn last_id(&self) -> u32 {
        self.last_id
    }
}

impl RecordGenerator<StdRng> {
    /// Creates a generator with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Iterator for RecordGenerator<R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        // Ids wrap after u32::MAX; sources never get close.
        self.last_id = self.last_id.wrapping_add(1);
        let name = NAMES[self.rng.gen_range(0..NAMES.len())];
        Some(Record::new(self.last_id, name))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Builds a source collection of exactly `size` records.
///
/// The size is fixed; content depends on `rng`.
pub fn build_source<R: Rng>(size: usize, rng: R) -> Box<[Record]> {
    collect_source(RecordGenerator::new(rng), size)
}

/// Builds a reproducible source collection from `seed`.
#[must_use]
pub fn build_source_seeded(size: usize, seed: u64) -> Box<[Record]> {
    collect_source(RecordGenerator::seeded(seed), size)
}

/// Builds a source collection seeded from operating system entropy.
#[must_use]
pub fn build_source_from_entropy(size: usize) -> Box<[Record]> {
    collect_source(RecordGenerator::from_entropy(), size)
}

fn collect_source<R: Rng>(generator: RecordGenerator<R>, size: usize) -> Box<[Record]> {
    let source: Box<[Record]> = generator.take(size).collect();
    debug!(size = source.len(), "built source collection");
    source
}
