//! Text analysis module for invdex.
//!
//! Turns raw document text into the words the map workers index. The
//! pipeline is a tokenizer followed by an ordered chain of token filters,
//! wrapped behind the [`Analyzer`] trait so the indexing engine never depends
//! on a concrete splitting rule.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
