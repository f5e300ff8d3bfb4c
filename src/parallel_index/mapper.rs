//! Map phase: turn documents into deduplicated (word, document) postings.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, info, warn};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::parallel_index::barrier::PhaseBarrier;
use crate::parallel_index::metrics::MetricsCollector;
use crate::parallel_index::partial_list::{DocId, PartialList, Posting};
use crate::parallel_index::work_queue::WorkQueue;

/// State shared by the map workers, plus the barrier that hands the
/// partial list over to the reduce workers.
#[derive(Debug)]
pub struct MapContext {
    /// Documents still to be mapped.
    pub documents: WorkQueue<PathBuf>,

    /// Postings emitted so far.
    pub partial: PartialList,

    /// Crossed by every map and every reduce worker.
    pub handoff: PhaseBarrier,
}

impl MapContext {
    /// Create the map context for `documents`, with a hand-off barrier of
    /// `parties` (map workers plus reduce workers).
    pub fn new(documents: Vec<PathBuf>, parties: usize) -> Self {
        Self {
            documents: WorkQueue::new(documents),
            partial: PartialList::new(),
            handoff: PhaseBarrier::new("map", parties),
        }
    }

    /// Wait until every map and reduce worker has arrived at the hand-off.
    ///
    /// Once this returns no map worker will touch the partial list again.
    pub fn wait_handoff(&self) {
        if self.handoff.wait().is_leader() {
            info!(
                "Barrier '{}' released: {} postings from {} documents",
                self.handoff.name(),
                self.partial.len(),
                self.documents.capacity()
            );
        }
    }
}

/// Read a document and analyze it into one posting per distinct word.
pub fn map_document(path: &Path, doc_id: DocId, analyzer: &dyn Analyzer) -> Result<Vec<Posting>> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    let mut seen = AHashSet::new();
    let mut postings = Vec::new();
    for token in analyzer.analyze(&content)? {
        if seen.insert(token.text.clone()) {
            postings.push(Posting::new(token.text, doc_id));
        }
    }

    Ok(postings)
}

/// One map worker thread.
pub struct MapWorker {
    ordinal: usize,
    context: Arc<MapContext>,
    analyzer: Arc<dyn Analyzer>,
    metrics: Arc<MetricsCollector>,
}

impl MapWorker {
    pub fn new(
        ordinal: usize,
        context: Arc<MapContext>,
        analyzer: Arc<dyn Analyzer>,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            ordinal,
            context,
            analyzer,
            metrics,
        }
    }

    /// Drain the document queue, then wait at the hand-off barrier.
    pub fn run(self) {
        let mut mapped = 0usize;

        while let Some(work) = self.context.documents.take() {
            match map_document(work.item, work.id, self.analyzer.as_ref()) {
                Ok(postings) => {
                    self.metrics.record_document(postings.len());
                    self.context.partial.append_batch(postings);
                    mapped += 1;
                }
                Err(e) => {
                    warn!(
                        "Skipping document {} ({}): {e}",
                        work.id,
                        work.item.display()
                    );
                    self.metrics.record_document_failure();
                }
            }
        }

        debug!("map-{} mapped {mapped} documents", self.ordinal);

        self.context.wait_handoff();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::TermAnalyzer;
    use tempfile::TempDir;

    fn words(postings: &[Posting]) -> Vec<&str> {
        let mut words: Vec<&str> = postings.iter().map(|p| p.word.as_str()).collect();
        words.sort_unstable();
        words
    }

    #[test]
    fn test_map_document_dedups_words() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fileB");
        fs::write(&path, "dog Dog DOG! bird").unwrap();

        let postings = map_document(&path, 2, &TermAnalyzer::new()).unwrap();
        assert_eq!(words(&postings), vec!["bird", "dog"]);
        assert!(postings.iter().all(|p| p.doc_id == 2));
    }

    #[test]
    fn test_punctuation_only_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("noise");
        fs::write(&path, "123 !!! ---").unwrap();

        let postings = map_document(&path, 1, &TermAnalyzer::new()).unwrap();
        assert!(postings.is_empty());
    }

    #[test]
    fn test_non_utf8_bytes_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1");
        fs::write(&path, b"caf\xe9 ok").unwrap();

        let postings = map_document(&path, 1, &TermAnalyzer::new()).unwrap();
        assert_eq!(words(&postings), vec!["caf", "ok"]);
    }

    #[test]
    fn test_missing_document_is_error() {
        let dir = TempDir::new().unwrap();
        let result = map_document(&dir.path().join("missing"), 1, &TermAnalyzer::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_worker_drains_queue_and_skips_failures() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good");
        fs::write(&good, "alpha beta").unwrap();
        let missing = dir.path().join("missing");

        let context = Arc::new(MapContext::new(vec![good, missing], 1));
        let metrics = Arc::new(MetricsCollector::new());
        MapWorker::new(
            0,
            Arc::clone(&context),
            Arc::new(TermAnalyzer::new()),
            Arc::clone(&metrics),
        )
        .run();

        assert!(context.documents.is_drained());
        assert_eq!(context.partial.len(), 2);
        assert!(context.partial.read().iter().all(|p| p.doc_id == 1));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.documents_mapped, 1);
        assert_eq!(snapshot.documents_failed, 1);
        assert_eq!(snapshot.postings_emitted, 2);
    }
}
