//! Intermediate (word, document) pairs produced by the map workers.

use parking_lot::{RwLock, RwLockReadGuard};

/// Identifier of a document: its 1-based position in the manifest.
pub type DocId = usize;

/// One word occurring in one document.
///
/// A document contributes at most one posting per distinct word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Posting {
    pub word: String,
    pub doc_id: DocId,
}

impl Posting {
    pub fn new<S: Into<String>>(word: S, doc_id: DocId) -> Self {
        Self {
            word: word.into(),
            doc_id,
        }
    }
}

/// Append-only collection of postings shared by all map workers.
///
/// Map workers append whole per-document batches under the write lock.
/// Once the map phase has been closed by the hand-off barrier the list is
/// only read, so reduce workers share the read lock without contention.
#[derive(Debug, Default)]
pub struct PartialList {
    entries: RwLock<Vec<Posting>>,
}

impl PartialList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every posting of one document while holding the lock once.
    pub fn append_batch(&self, batch: Vec<Posting>) {
        if batch.is_empty() {
            return;
        }
        self.entries.write().extend(batch);
    }

    /// Read access to all postings.
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<Posting>> {
        self.entries.read()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
