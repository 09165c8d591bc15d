//! Property-based test generators using proptest.
//!
//! Provides strategies for generating sources that keep the record
//! invariants: ids ascend from 1 and names come from the fixed label set.

use proptest::prelude::*;
use seqpipe_core::{Record, NAMES};

/// Strategy for generating a name label.
pub fn name_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(NAMES.to_vec())
}

/// Strategy for generating a single record with the given id.
pub fn record_strategy(id: u32) -> impl Strategy<Value = Record> {
    name_strategy().prop_map(move |name| Record::new(id, name))
}

/// Strategy for generating a source of `min_len..max_len` records.
pub fn source_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(name_strategy(), min_len..max_len).prop_map(|names| {
        names
            .into_iter()
            .zip(1u32..)
            .map(|(name, id)| Record::new(id, name))
            .collect()
    })
}

/// Strategy for a take count, sometimes larger than any generated source.
pub fn take_count_strategy(max: usize) -> impl Strategy<Value = usize> {
    0..=max
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn names_are_known(name in name_strategy()) {
            prop_assert!(NAMES.contains(&name));
        }

        #[test]
        fn source_ids_ascend_from_one(source in source_strategy(0, 64)) {
            for (i, record) in source.iter().enumerate() {
                prop_assert_eq!(record.id() as usize, i + 1);
            }
        }

        #[test]
        fn record_keeps_id(record in record_strategy(42)) {
            prop_assert_eq!(record.id(), 42);
        }
    }
}
