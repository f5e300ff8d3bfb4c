//! Configuration for the map/reduce indexing pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InvdexError, Result};

/// Configuration for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of map worker threads (M).
    pub map_workers: usize,

    /// Number of reduce worker threads (R).
    pub reduce_workers: usize,

    /// Directory receiving one `<letter>.txt` file per non-empty bucket.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            map_workers: num_cpus::get(),
            reduce_workers: num_cpus::get(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with explicit worker counts.
    pub fn new(map_workers: usize, reduce_workers: usize) -> Self {
        Self {
            map_workers,
            reduce_workers,
            ..Default::default()
        }
    }

    /// Set the number of map workers.
    pub fn with_map_workers(mut self, map_workers: usize) -> Self {
        self.map_workers = map_workers;
        self
    }

    /// Set the number of reduce workers.
    pub fn with_reduce_workers(mut self, reduce_workers: usize) -> Self {
        self.reduce_workers = reduce_workers;
        self
    }

    /// Set the output directory.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    /// Number of parties at the map/reduce hand-off barrier (M + R).
    pub fn total_workers(&self) -> usize {
        self.map_workers + self.reduce_workers
    }

    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.map_workers == 0 {
            return Err(InvdexError::invalid_config(
                "map worker count must be at least 1",
            ));
        }
        if self.reduce_workers == 0 {
            return Err(InvdexError::invalid_config(
                "reduce worker count must be at least 1",
            ));
        }
        Ok(())
    }
}
