//! # seqpipe Testkit
//!
//! Test utilities for seqpipe.
//!
//! This crate provides:
//! - Fixture sources, hand-built and seeded
//! - Property-based test generators using proptest
//! - Instrumented predicates and transforms that count their calls
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seqpipe_testkit::prelude::*;
//!
//! #[test]
//! fn filter_counts() {
//!     let source = sample_source();
//!     let probe = Instrumented::new();
//!     // ... build a pipeline with probe.name_is("taro")
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod instrumented;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::instrumented::*;
}

pub use fixtures::*;
pub use generators::*;
pub use instrumented::*;
