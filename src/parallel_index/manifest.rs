//! Input manifest: the ordered list of documents to index.
//!
//! The manifest is a whitespace-separated text file whose first token is the
//! document count `N`, followed by `N` document paths. The order of the paths
//! fixes the document identifiers: the document at 1-based position `i`
//! receives identifier `i`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// The ordered document list read from a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    documents: Vec<PathBuf>,
}

impl Manifest {
    /// Parse manifest text.
    ///
    /// A missing or malformed count yields an empty manifest. A count larger
    /// than the number of listed paths keeps the paths that are present;
    /// tokens after the `N`-th path are ignored.
    pub fn parse(content: &str) -> Self {
        let mut tokens = content.split_whitespace();

        let declared = match tokens.next() {
            Some(token) => match token.parse::<usize>() {
                Ok(count) => count,
                Err(e) => {
                    warn!("Manifest document count '{token}' is not a valid count: {e}");
                    return Self::default();
                }
            },
            None => {
                warn!("Manifest is empty; no documents to index");
                return Self::default();
            }
        };

        let documents: Vec<PathBuf> = tokens.take(declared).map(PathBuf::from).collect();
        if documents.len() < declared {
            warn!(
                "Manifest declares {declared} documents but lists {}",
                documents.len()
            );
        }

        Self { documents }
    }

    /// Read and parse a manifest file.
    ///
    /// A manifest that cannot be read is reported and treated as empty, so
    /// the pipeline still runs to completion and produces no index.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let manifest = Self::parse(&content);
                debug!(
                    "Loaded manifest {} with {} documents",
                    path.display(),
                    manifest.len()
                );
                manifest
            }
            Err(e) => {
                warn!("Failed to read manifest {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Documents in manifest order.
    pub fn documents(&self) -> &[PathBuf] {
        &self.documents
    }

    /// Consume the manifest, returning the documents in manifest order.
    pub fn into_documents(self) -> Vec<PathBuf> {
        self.documents
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the manifest lists no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
