//! Benchmark support for seqpipe.
//!
//! The benches themselves live under `benches/`; this crate only holds
//! the shared setup they use.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod utils;
