//! Fixture sources and configurations.
//!
//! Provides ready-made source collections for tests, from the four-record
//! example up to seeded sources of arbitrary size.

use seqpipe_core::{build_source_seeded, Record, ScenarioConfig};

/// Seed used by fixtures that need a "random" source.
pub const FIXTURE_SEED: u64 = 0x5EED_CAFE;

/// The four-record source used in end-to-end examples.
///
/// `[(1, taro), (2, foo), (3, taro), (4, taro)]`
#[must_use]
pub fn sample_source() -> Vec<Record> {
    source_from_names(&["taro", "foo", "taro", "taro"])
}

/// Builds a source whose names are `names`, with ids assigned from 1.
#[must_use]
pub fn source_from_names(names: &[&'static str]) -> Vec<Record> {
    names
        .iter()
        .zip(1u32..)
        .map(|(name, id)| Record::new(id, *name))
        .collect()
}

/// Builds a source of `size` records that all carry `name`.
#[must_use]
pub fn uniform_source(size: usize, name: &'static str) -> Vec<Record> {
    (1..=size as u32).map(|id| Record::new(id, name)).collect()
}

/// Builds a reproducible random source of `size` records.
#[must_use]
pub fn seeded_source(size: usize, seed: u64) -> Box<[Record]> {
    build_source_seeded(size, seed)
}

/// Common test configurations.
pub mod configs {
    use super::*;

    /// A seeded configuration over a small source.
    #[must_use]
    pub fn small() -> ScenarioConfig {
        ScenarioConfig::new().source_size(2_000).seed(FIXTURE_SEED)
    }

    /// The default configuration with a fixed seed.
    #[must_use]
    pub fn full_size() -> ScenarioConfig {
        ScenarioConfig::new().seed(FIXTURE_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_source_shape() {
        let source = sample_source();
        let pairs: Vec<(u32, &str)> = source.iter().map(|r| (r.id(), r.name())).collect();
        assert_eq!(pairs, vec![(1, "taro"), (2, "foo"), (3, "taro"), (4, "taro")]);
    }

    #[test]
    fn uniform_source_ids() {
        let source = uniform_source(5, "bar");
        assert_eq!(source.len(), 5);
        assert!(source.iter().all(|r| r.has_name("bar")));
        assert_eq!(source.last().map(|r| r.id()), Some(5));
    }

    #[test]
    fn small_config_builds_small_source() {
        let config = configs::small();
        assert_eq!(config.build_source().len(), 2_000);
        assert_eq!(config.build_source(), seeded_source(2_000, FIXTURE_SEED));
    }
}
