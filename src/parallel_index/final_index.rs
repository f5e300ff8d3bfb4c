//! The inverted index assembled by the reduce workers.
//!
//! Words are bucketed by their leading character. Within a bucket each word
//! maps to the identifiers of the documents containing it. The pipeline
//! wraps a [`FinalIndex`] in a single lock: reduce workers merge under the
//! write side, and once every merge has finished the output writers only
//! read.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::parallel_index::partial_list::DocId;

/// The 26 bucket keys, in alphabetical order.
pub const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Word to document identifiers, for the words of one bucket.
pub type Bucket = AHashMap<String, Vec<DocId>>;

/// Leading character to bucket.
#[derive(Debug, Default)]
pub struct FinalIndex {
    buckets: BTreeMap<char, Bucket>,
}

impl FinalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one reducer's local aggregation into the index.
    ///
    /// A new word takes its identifier list as-is. A known word gets the
    /// new identifiers appended; callers merge disjoint slices of the
    /// postings, so no identifier is ever appended twice for a word.
    pub fn merge(&mut self, local: AHashMap<String, Vec<DocId>>) {
        for (word, doc_ids) in local {
            let Some(letter) = word.chars().next() else {
                continue;
            };
            self.buckets
                .entry(letter)
                .or_default()
                .entry(word)
                .or_default()
                .extend(doc_ids);
        }
    }

    /// Words whose leading character is `letter`.
    pub fn bucket(&self, letter: char) -> Option<&Bucket> {
        self.buckets.get(&letter)
    }

    /// Leading characters that have at least one word.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.buckets.keys().copied()
    }

    /// Total number of distinct words.
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(|b| b.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
