//! Counters collected while a pipeline run is in progress.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Point-in-time copy of the pipeline counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineMetrics {
    /// Documents read and tokenized.
    pub documents_mapped: u64,

    /// Documents skipped because they could not be read.
    pub documents_failed: u64,

    /// (word, document) postings appended to the partial list.
    pub postings_emitted: u64,

    /// Distinct words in the final index.
    pub words_indexed: u64,

    /// Output files written.
    pub letters_written: u64,

    /// Buckets skipped because their output file could not be written.
    pub letters_failed: u64,

    /// Letters with no indexed words (no file written).
    pub letters_empty: u64,
}

/// Thread-safe collector shared by every worker of a run.
#[derive(Debug)]
pub struct MetricsCollector {
    documents_mapped: AtomicU64,
    documents_failed: AtomicU64,
    postings_emitted: AtomicU64,
    words_indexed: AtomicU64,
    letters_written: AtomicU64,
    letters_failed: AtomicU64,
    letters_empty: AtomicU64,

    start_time: Instant,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    /// Create a new collector; elapsed time is measured from here.
    pub fn new() -> Self {
        Self {
            documents_mapped: AtomicU64::new(0),
            documents_failed: AtomicU64::new(0),
            postings_emitted: AtomicU64::new(0),
            words_indexed: AtomicU64::new(0),
            letters_written: AtomicU64::new(0),
            letters_failed: AtomicU64::new(0),
            letters_empty: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a document that was tokenized and emitted `postings` entries.
    pub fn record_document(&self, postings: usize) {
        self.documents_mapped.fetch_add(1, Ordering::Relaxed);
        self.postings_emitted
            .fetch_add(postings as u64, Ordering::Relaxed);
    }

    pub fn record_document_failure(&self) {
        self.documents_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_letter_written(&self, words: usize) {
        self.letters_written.fetch_add(1, Ordering::Relaxed);
        self.words_indexed.fetch_add(words as u64, Ordering::Relaxed);
    }

    /// Record a bucket whose file could not be written; its words still count
    /// as indexed.
    pub fn record_letter_failure(&self, words: usize) {
        self.letters_failed.fetch_add(1, Ordering::Relaxed);
        self.words_indexed.fetch_add(words as u64, Ordering::Relaxed);
    }

    pub fn record_letter_empty(&self) {
        self.letters_empty.fetch_add(1, Ordering::Relaxed);
    }

    /// Time since the collector was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Copy the current counter values.
    pub fn snapshot(&self) -> PipelineMetrics {
        PipelineMetrics {
            documents_mapped: self.documents_mapped.load(Ordering::Relaxed),
            documents_failed: self.documents_failed.load(Ordering::Relaxed),
            postings_emitted: self.postings_emitted.load(Ordering::Relaxed),
            words_indexed: self.words_indexed.load(Ordering::Relaxed),
            letters_written: self.letters_written.load(Ordering::Relaxed),
            letters_failed: self.letters_failed.load(Ordering::Relaxed),
            letters_empty: self.letters_empty.load(Ordering::Relaxed),
        }
    }
}
