//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the complete text processing pipeline a map worker runs
//! over each document:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Words
//! ```
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use invdex::analysis::analyzer::analyzer::Analyzer;
//! use invdex::analysis::token::{Token, TokenStream};
//! use invdex::error::Result;
//!
//! struct CommaAnalyzer;
//!
//! impl Analyzer for CommaAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text
//!             .split(',')
//!             .enumerate()
//!             .map(|(i, w)| Token::new(w.trim(), i))
//!             .collect();
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "comma"
//!     }
//! }
//!
//! let words: Vec<_> = CommaAnalyzer.analyze("a, b").unwrap().map(|t| t.text).collect();
//! assert_eq!(words, vec!["a", "b"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can be shared by
/// every map worker behind an `Arc`.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// Tokens returned here are indexed verbatim; an analyzer that wants a
    /// token dropped must remove it from the stream rather than stop it.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
