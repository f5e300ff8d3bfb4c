//! Output formatting for the run summary.

use crate::cli::args::{InvdexArgs, OutputFormat};
use crate::error::Result;
use crate::parallel_index::engine::PipelineReport;

/// Print a run report in the format selected on the command line.
pub fn output_report(report: &PipelineReport, args: &InvdexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", render_human(report));
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(report, args.pretty)?);
            Ok(())
        }
    }
}

/// Render a report as aligned `label: value` lines.
pub fn render_human(report: &PipelineReport) -> String {
    let metrics = &report.metrics;
    let rows = [
        ("Documents listed", report.total_documents.to_string()),
        ("Documents mapped", metrics.documents_mapped.to_string()),
        ("Documents skipped", metrics.documents_failed.to_string()),
        ("Postings emitted", metrics.postings_emitted.to_string()),
        ("Words indexed", metrics.words_indexed.to_string()),
        ("Files written", metrics.letters_written.to_string()),
        ("Files skipped", metrics.letters_failed.to_string()),
        ("Elapsed (ms)", report.elapsed_ms.to_string()),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{label:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a report as JSON.
pub fn render_json(report: &PipelineReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
