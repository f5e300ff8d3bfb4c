//! Default analyzer used by the map workers.
//!
//! Splits on whitespace, strips every non-letter character, folds to
//! lowercase and drops tokens left empty. Every word it produces is a
//! non-empty run of `a-z`.
//!
//! ```
//! use invdex::analysis::analyzer::analyzer::Analyzer;
//! use invdex::analysis::analyzer::term::TermAnalyzer;
//!
//! let analyzer = TermAnalyzer::new();
//! let words: Vec<_> = analyzer
//!     .analyze("Don't PANIC -- 42!")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["dont", "panic"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::alphabetic::AlphabeticFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// The word-extraction analyzer: whitespace, alphabetic, lowercase, remove-empty.
pub struct TermAnalyzer {
    inner: PipelineAnalyzer,
}

impl TermAnalyzer {
    /// Create a new term analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(AlphabeticFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("term");

        TermAnalyzer { inner: analyzer }
    }
}

impl Default for TermAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for TermAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "term"
    }
}

impl std::fmt::Debug for TermAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
