//! Benchmark utilities.

use rand::rngs::StdRng;
use rand::SeedableRng;
use seqpipe_core::{build_source, Record, ScenarioConfig};

/// Seed shared by every bench so runs are comparable.
pub const BENCH_SEED: u64 = 20_240_501;

/// Source sizes swept by size-parameterized benches.
pub const SOURCE_SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Configuration the scenario benches run with.
pub fn bench_config() -> ScenarioConfig {
    ScenarioConfig::new().seed(BENCH_SEED)
}

/// Builds the source collection once, before any timed iteration.
pub fn setup_source(size: usize) -> Box<[Record]> {
    build_source(size, StdRng::seed_from_u64(BENCH_SEED))
}

/// Generates a vector of `count` integers for combinator benches.
pub fn generate_numbers(count: usize) -> Vec<u64> {
    (0..count as u64).collect()
}
