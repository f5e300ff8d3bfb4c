//! Output phase: sort one bucket and write it as `<letter>.txt`.
//!
//! Each line has the form `word:[id1 id2 ... idN]`. Lines are ordered by
//! descending number of documents, then alphabetically; identifiers within
//! a line are ascending.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parallel_index::final_index::Bucket;
use crate::parallel_index::partial_list::DocId;

/// A word and the sorted identifiers of the documents containing it.
pub type IndexEntry = (String, Vec<DocId>);

/// Ordering of output lines: longer identifier lists first, ties broken by
/// ascending word.
pub fn compare_entries(a: &IndexEntry, b: &IndexEntry) -> Ordering {
    b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0))
}

/// Copy a bucket into output order.
pub fn sorted_entries(bucket: &Bucket) -> Vec<IndexEntry> {
    let mut entries: Vec<IndexEntry> = bucket
        .iter()
        .map(|(word, doc_ids)| {
            let mut doc_ids = doc_ids.clone();
            doc_ids.sort_unstable();
            (word.clone(), doc_ids)
        })
        .collect();

    entries.sort_by(compare_entries);
    entries
}

/// Render one output line, without the trailing newline.
pub fn format_entry(word: &str, doc_ids: &[DocId]) -> String {
    let ids: Vec<String> = doc_ids.iter().map(|id| id.to_string()).collect();
    format!("{word}:[{}]", ids.join(" "))
}

/// Path of the output file for `letter` inside `output_dir`.
pub fn output_path(output_dir: &Path, letter: char) -> PathBuf {
    output_dir.join(format!("{letter}.txt"))
}

/// Create (or truncate) `path` and write `entries` to it, one per line.
pub fn write_entries(path: &Path, entries: &[IndexEntry]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (word, doc_ids) in entries {
        writeln!(writer, "{}", format_entry(word, doc_ids))?;
    }
    writer.flush()?;
    Ok(())
}
