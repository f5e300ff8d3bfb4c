//! # invdex
//!
//! Builds a letter-bucketed inverted index (word → documents containing it)
//! over a list of text files, using a fixed pool of map threads and a fixed
//! pool of reduce threads on a single machine.
//!
//! ## Features
//!
//! - Deterministic document identifiers independent of thread scheduling
//! - Pluggable text analysis pipeline
//! - Two-phase barrier hand-off between heterogeneous worker pools
//! - Byte-identical output for any number of workers

pub mod analysis;
pub mod cli;
pub mod error;
pub mod parallel_index;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
