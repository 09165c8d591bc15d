//! # seqpipe Core
//!
//! Two ways of composing `filter`/`map` pipelines over a bulk collection,
//! built so their cost can be compared side by side.
//!
//! This crate provides:
//! - A record generator and fixed-size source construction
//! - Lazy combinators: pull-based cursors that compute on demand
//! - Eager combinators: each stage fully materialized into an owned array
//! - A single consumption policy (first K, or everything twice) used by both
//! - The top-N and multi-stage scenarios, addressable through [`Scenario`]
//!
//! Timing and reporting are left to the caller; every entry point here is
//! a plain function that can be invoked any number of times.
//!
//! ## Example
//!
//! ```rust
//! use seqpipe_core::{filter_array, lazy, take_first, Consumer, EnumerableExt, Record};
//!
//! let source = [
//!     Record::new(1, "taro"),
//!     Record::new(2, "foo"),
//!     Record::new(3, "taro"),
//!     Record::new(4, "taro"),
//! ];
//! let mut consumer = Consumer::new();
//!
//! let lazy_ids = lazy(&source)
//!     .filter_lazy(|r| r.has_name("taro"))
//!     .map_lazy(|r| r.id());
//! assert_eq!(take_first(&lazy_ids, 2, &mut consumer), vec![1, 3]);
//!
//! let eager_ids = filter_array(&source, |r| r.has_name("taro")).map_array(|r| r.id());
//! assert_eq!(eager_ids.as_slice(), &[1, 3, 4]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod consume;
pub mod eager;
mod error;
pub mod generator;
pub mod lazy;
pub mod record;
pub mod scenario;
pub mod stats;

pub use config::ScenarioConfig;
pub use consume::{consume_all, consume_twice, take_first, Consumer};
pub use eager::{filter_array, map_array, to_array, Materialized};
pub use error::{CoreError, CoreResult};
pub use generator::{build_source, build_source_from_entropy, build_source_seeded, RecordGenerator};
pub use lazy::{filter_lazy, lazy, map_lazy, Cursor, Enumerable, EnumerableExt, LazySource};
pub use record::{Record, NAMES};
pub use scenario::{MultiStageOutcome, Scenario, ScenarioFamily, ScenarioOutcome};
pub use stats::{NoProbe, PipelineStats, Probe};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
