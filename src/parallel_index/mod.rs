//! Multi-threaded map/reduce construction of an inverted index.
//!
//! Map workers share a [`work_queue::WorkQueue`] of documents and append
//! per-document postings to a [`partial_list::PartialList`]. Reduce workers
//! split the partial list into contiguous slices, merge them into a
//! [`final_index::FinalIndex`] under one lock, and then share a queue of the
//! 26 letters to write one output file per non-empty bucket. Two
//! [`barrier::PhaseBarrier`]s separate the phases.

pub mod barrier;
pub mod config;
pub mod engine;
pub mod final_index;
pub mod manifest;
pub mod mapper;
pub mod metrics;
pub mod output;
pub mod partial_list;
pub mod reducer;
pub mod work_queue;

pub use config::PipelineConfig;
pub use engine::{IndexEngine, PipelineReport};
pub use manifest::Manifest;
pub use partial_list::{DocId, Posting};
