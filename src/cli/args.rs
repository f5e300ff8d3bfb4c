//! Command line argument parsing for the invdex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::parallel_index::config::PipelineConfig;

/// invdex - build a letter-bucketed inverted index with map/reduce threads
#[derive(Parser, Debug, Clone)]
#[command(name = "invdex")]
#[command(about = "Build an inverted index over a list of documents with map/reduce worker threads")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct InvdexArgs {
    /// Number of map worker threads
    #[arg(value_name = "MAP_WORKERS")]
    pub map_workers: usize,

    /// Number of reduce worker threads
    #[arg(value_name = "REDUCE_WORKERS")]
    pub reduce_workers: usize,

    /// Manifest file: a document count followed by that many document paths
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Directory that receives the <letter>.txt files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a run summary on stdout when indexing finishes
    #[arg(long)]
    pub summary: bool,

    /// Summary format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl InvdexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// Pipeline configuration described by these arguments.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(self.map_workers, self.reduce_workers)
            .with_output_dir(&self.output_dir)
    }
}

/// Output formats for the run summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
