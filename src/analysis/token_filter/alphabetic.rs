//! Alphabetic filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that removes every character that is not an ASCII letter.
///
/// Characters are removed wherever they occur in the token, not only at the
/// edges: `"don't"` becomes `"dont"` and `"4x4"` becomes `"xx"`. A token
/// left with no characters is marked as stopped.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    /// Create a new alphabetic filter.
    pub fn new() -> Self {
        AlphabeticFilter
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                if token.text.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return token;
                }

                let letters: String = token
                    .text
                    .chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .collect();
                if letters.is_empty() {
                    token.with_text(letters).stop()
                } else {
                    token.with_text(letters)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_alphabetic_filter() {
        let filter = AlphabeticFilter::new();
        let tokens = vec![
            Token::new("hello,", 0),
            Token::new("don't", 1),
            Token::new("123", 2),
            Token::new("!!!", 3),
            Token::new("a1b2c3", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 5);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "dont");
        assert!(result[2].is_stopped());
        assert!(result[2].is_empty());
        assert!(result[3].is_stopped());
        assert_eq!(result[4].text, "abc");
    }

    #[test]
    fn test_non_ascii_letters_are_removed() {
        let filter = AlphabeticFilter::new();
        let tokens = vec![Token::new("café", 0), Token::new("日本", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "caf");
        assert!(result[1].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphabeticFilter::new().name(), "alphabetic");
    }
}
