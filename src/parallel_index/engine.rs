//! Pipeline driver: spawns the map and reduce pools and joins them.

use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::analysis::analyzer::{Analyzer, TermAnalyzer};
use crate::error::{InvdexError, Result};
use crate::parallel_index::config::PipelineConfig;
use crate::parallel_index::manifest::Manifest;
use crate::parallel_index::mapper::{MapContext, MapWorker};
use crate::parallel_index::metrics::{MetricsCollector, PipelineMetrics};
use crate::parallel_index::reducer::{ReduceContext, ReduceWorker};

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Configuration the run used.
    pub config: PipelineConfig,

    /// Documents listed for the run.
    pub total_documents: usize,

    /// Counters collected by the workers.
    pub metrics: PipelineMetrics,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// Wall time from spawning the first worker to joining the last.
    pub elapsed_ms: u64,
}

/// Builds an inverted index with a fixed pool of map and reduce threads.
///
/// A run goes through these phases:
///
/// ```text
/// MAPPING -> (M+R barrier) -> AGGREGATING -> (R barrier) -> WRITING -> DONE
/// ```
///
/// Map workers drain the document queue into the partial list. Reduce
/// workers wait at the first barrier, merge their slice of the partial list
/// into the final index, wait at the second barrier, and then share the
/// work of writing the 26 letter files.
pub struct IndexEngine {
    config: PipelineConfig,
    analyzer: Arc<dyn Analyzer>,
}

impl IndexEngine {
    /// Create an engine using the default [`TermAnalyzer`].
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            analyzer: Arc::new(TermAnalyzer::new()),
        })
    }

    /// Replace the analyzer used by the map workers.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load a manifest and index the documents it lists.
    pub fn run_manifest<P: AsRef<Path>>(&self, manifest: P) -> Result<PipelineReport> {
        self.run(Manifest::load(manifest).into_documents())
    }

    /// Index `documents`; the document at position `i` (1-based) gets id `i`.
    ///
    /// Documents that cannot be read and letters whose file cannot be
    /// written are skipped. Failing to spawn or join a worker thread is an
    /// error; on a spawn failure the workers already started stay blocked at
    /// the first barrier, so callers are expected to exit the process.
    pub fn run(&self, documents: Vec<PathBuf>) -> Result<PipelineReport> {
        let started_at = Utc::now();
        let total_documents = documents.len();
        let metrics = Arc::new(MetricsCollector::new());

        let map = Arc::new(MapContext::new(documents, self.config.total_workers()));
        let reduce = Arc::new(ReduceContext::new(
            self.config.reduce_workers,
            self.config.output_dir.clone(),
        ));

        info!(
            "Indexing {total_documents} documents with {} map and {} reduce workers",
            self.config.map_workers, self.config.reduce_workers
        );

        let mut handles = Vec::with_capacity(self.config.total_workers());

        for ordinal in 0..self.config.map_workers {
            let worker = MapWorker::new(
                ordinal,
                Arc::clone(&map),
                Arc::clone(&self.analyzer),
                Arc::clone(&metrics),
            );
            handles.push(spawn_worker(format!("map-{ordinal}"), move || worker.run())?);
        }

        for ordinal in 0..self.config.reduce_workers {
            let worker = ReduceWorker::new(
                ordinal,
                Arc::clone(&map),
                Arc::clone(&reduce),
                Arc::clone(&metrics),
            );
            handles.push(spawn_worker(format!("reduce-{ordinal}"), move || {
                worker.run()
            })?);
        }

        for (name, handle) in handles {
            handle.join().map_err(|e| {
                InvdexError::thread_join(format!("{name}: {}", panic_message(&*e)))
            })?;
            debug!("Joined {name}");
        }

        let report = PipelineReport {
            config: self.config.clone(),
            total_documents,
            metrics: metrics.snapshot(),
            started_at,
            elapsed_ms: metrics.elapsed().as_millis() as u64,
        };

        info!(
            "Indexed {} words from {} documents into {} files in {} ms",
            report.metrics.words_indexed,
            report.metrics.documents_mapped,
            report.metrics.letters_written,
            report.elapsed_ms
        );

        Ok(report)
    }
}

impl std::fmt::Debug for IndexEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexEngine")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

fn spawn_worker<F>(name: String, body: F) -> Result<(String, JoinHandle<()>)>
where
    F: FnOnce() + Send + 'static,
{
    let handle = thread::Builder::new()
        .name(name.clone())
        .spawn(body)
        .map_err(|e| InvdexError::thread_spawn(format!("{name}: {e}")))?;
    Ok((name, handle))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenStream;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_engine_rejects_zero_workers() {
        assert!(IndexEngine::new(PipelineConfig::new(0, 2)).is_err());
        assert!(IndexEngine::new(PipelineConfig::new(2, 0)).is_err());
    }

    #[test]
    fn test_engine_debug() {
        let engine = IndexEngine::new(PipelineConfig::new(1, 1)).unwrap();
        let debug = format!("{engine:?}");
        assert!(debug.contains("term"));
        assert_eq!(engine.config().map_workers, 1);
    }

    #[test]
    fn test_run_two_documents() {
        let dir = TempDir::new().unwrap();
        let file_a = dir.path().join("fileA");
        let file_b = dir.path().join("fileB");
        fs::write(&file_a, "Cat dog").unwrap();
        fs::write(&file_b, "dog dog bird").unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let engine = IndexEngine::new(PipelineConfig::new(2, 3).with_output_dir(&out)).unwrap();
        let report = engine.run(vec![file_a, file_b]).unwrap();

        assert_eq!(fs::read_to_string(out.join("b.txt")).unwrap(), "bird:[2]\n");
        assert_eq!(fs::read_to_string(out.join("c.txt")).unwrap(), "cat:[1]\n");
        assert_eq!(fs::read_to_string(out.join("d.txt")).unwrap(), "dog:[1 2]\n");
        assert_eq!(fs::read_dir(&out).unwrap().count(), 3);

        assert_eq!(report.total_documents, 2);
        assert_eq!(report.metrics.documents_mapped, 2);
        assert_eq!(report.metrics.postings_emitted, 4);
        assert_eq!(report.metrics.words_indexed, 3);
        assert_eq!(report.metrics.letters_written, 3);
        assert_eq!(report.metrics.letters_empty, 23);
    }

    struct ReversingAnalyzer {
        terms: TermAnalyzer,
    }

    impl Analyzer for ReversingAnalyzer {
        fn analyze(&self, text: &str) -> Result<TokenStream> {
            let tokens = self.terms.analyze(text)?.map(|token| {
                let reversed: String = token.text.chars().rev().collect();
                token.with_text(reversed)
            });
            Ok(Box::new(tokens))
        }

        fn name(&self) -> &'static str {
            "reversing"
        }
    }

    #[test]
    fn test_run_with_custom_analyzer() {
        let dir = TempDir::new().unwrap();
        let file_a = dir.path().join("fileA");
        let file_b = dir.path().join("fileB");
        fs::write(&file_a, "Cat dog").unwrap();
        fs::write(&file_b, "dog bird").unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let engine = IndexEngine::new(PipelineConfig::new(2, 2).with_output_dir(&out))
            .unwrap()
            .with_analyzer(Arc::new(ReversingAnalyzer {
                terms: TermAnalyzer::new(),
            }));
        assert!(format!("{engine:?}").contains("reversing"));

        let report = engine.run(vec![file_a, file_b]).unwrap();

        assert_eq!(fs::read_to_string(out.join("t.txt")).unwrap(), "tac:[1]\n");
        assert_eq!(fs::read_to_string(out.join("g.txt")).unwrap(), "god:[1 2]\n");
        assert_eq!(fs::read_to_string(out.join("d.txt")).unwrap(), "drib:[2]\n");
        assert!(!out.join("c.txt").exists());
        assert!(!out.join("b.txt").exists());
        assert_eq!(report.metrics.words_indexed, 3);
    }

    #[test]
    fn test_report_serializes() {
        let dir = TempDir::new().unwrap();
        let engine =
            IndexEngine::new(PipelineConfig::new(1, 1).with_output_dir(dir.path())).unwrap();
        let report = engine.run(Vec::new()).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_documents"], 0);
        assert_eq!(json["metrics"]["letters_written"], 0);
        assert_eq!(json["config"]["map_workers"], 1);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(&*payload), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(&*payload), "bang");
        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(&*payload), "worker panicked");
    }
}
