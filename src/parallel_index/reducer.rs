//! Reduce phase: aggregate slices of the partial list into the final index,
//! then write one output file per letter.

use std::ops::Range;
use std::path::PathBuf;
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::parallel_index::barrier::PhaseBarrier;
use crate::parallel_index::final_index::{FinalIndex, LETTERS};
use crate::parallel_index::mapper::MapContext;
use crate::parallel_index::metrics::MetricsCollector;
use crate::parallel_index::output::{output_path, sorted_entries, write_entries};
use crate::parallel_index::partial_list::{DocId, Posting};
use crate::parallel_index::work_queue::WorkQueue;

/// State shared by the reduce workers.
#[derive(Debug)]
pub struct ReduceContext {
    /// Number of reduce workers (R).
    pub reducers: usize,

    /// Written once per reducer during aggregation, read-only afterwards.
    pub index: RwLock<FinalIndex>,

    /// Crossed by every reduce worker once its merge is done.
    pub merged: PhaseBarrier,

    /// Letters whose bucket has not been written yet.
    pub letters: WorkQueue<char>,

    /// Directory receiving the output files.
    pub output_dir: PathBuf,
}

impl ReduceContext {
    pub fn new(reducers: usize, output_dir: PathBuf) -> Self {
        Self {
            reducers,
            index: RwLock::new(FinalIndex::new()),
            merged: PhaseBarrier::new("reduce", reducers),
            letters: WorkQueue::new(LETTERS.to_vec()),
            output_dir,
        }
    }
}

/// Range of partial-list entries aggregated by reducer `ordinal`.
///
/// Every reducer gets `len / reducers` entries; the last one also takes the
/// remainder, so the ranges cover `0..len` without gaps or overlaps.
pub fn slice_bounds(len: usize, reducers: usize, ordinal: usize) -> Range<usize> {
    let chunk = len / reducers;
    let start = ordinal * chunk;
    let end = if ordinal + 1 == reducers {
        len
    } else {
        start + chunk
    };
    start..end
}

/// Group postings by word.
pub fn aggregate(postings: &[Posting]) -> AHashMap<String, Vec<DocId>> {
    let mut local: AHashMap<String, Vec<DocId>> = AHashMap::new();
    for posting in postings {
        local
            .entry(posting.word.clone())
            .or_default()
            .push(posting.doc_id);
    }
    local
}

/// One reduce worker thread.
pub struct ReduceWorker {
    ordinal: usize,
    map: Arc<MapContext>,
    reduce: Arc<ReduceContext>,
    metrics: Arc<MetricsCollector>,
}

impl ReduceWorker {
    pub fn new(
        ordinal: usize,
        map: Arc<MapContext>,
        reduce: Arc<ReduceContext>,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            ordinal,
            map,
            reduce,
            metrics,
        }
    }

    /// Wait for the map phase, aggregate, wait for every merge, then write.
    pub fn run(self) {
        self.map.wait_handoff();

        self.aggregate_slice();

        if self.reduce.merged.wait().is_leader() {
            info!(
                "Barrier '{}' released: {} distinct words",
                self.reduce.merged.name(),
                self.reduce.index.read().word_count()
            );
        }

        self.write_letters();
    }

    fn aggregate_slice(&self) {
        let local = {
            let postings = self.map.partial.read();
            let range = slice_bounds(postings.len(), self.reduce.reducers, self.ordinal);
            debug!(
                "reduce-{} aggregating postings {}..{}",
                self.ordinal, range.start, range.end
            );
            aggregate(&postings[range])
        };

        self.reduce.index.write().merge(local);
    }

    fn write_letters(&self) {
        let mut written = 0usize;

        while let Some(work) = self.reduce.letters.take() {
            let letter = *work.item;
            let entries = match self.reduce.index.read().bucket(letter) {
                Some(bucket) => sorted_entries(bucket),
                None => {
                    self.metrics.record_letter_empty();
                    continue;
                }
            };

            let path = output_path(&self.reduce.output_dir, letter);
            match write_entries(&path, &entries) {
                Ok(()) => {
                    self.metrics.record_letter_written(entries.len());
                    written += 1;
                }
                Err(e) => {
                    warn!("Skipping letter '{letter}' ({}): {e}", path.display());
                    self.metrics.record_letter_failure(entries.len());
                }
            }
        }

        debug!("reduce-{} wrote {written} files", self.ordinal);
    }
}
