//! Command implementation for the invdex CLI.

use log::debug;

use crate::cli::args::InvdexArgs;
use crate::cli::output::output_report;
use crate::error::Result;
use crate::parallel_index::engine::IndexEngine;

/// Run the indexing pipeline described by `args`.
pub fn execute_command(args: InvdexArgs) -> Result<()> {
    let config = args.pipeline_config();
    debug!("Pipeline configuration: {config:?}");

    let engine = IndexEngine::new(config)?;
    let report = engine.run_manifest(&args.manifest)?;

    if args.summary {
        output_report(&report, &args)?;
    }

    Ok(())
}
