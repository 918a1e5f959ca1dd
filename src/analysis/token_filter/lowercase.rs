//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use kea_analysis::analysis::token_filter::Filter;
//! use kea_analysis::analysis::token_filter::lowercase::LowercaseFilter;
//! use kea_analysis::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercase `text` one character at a time.
///
/// Each character maps to exactly one character: when the full Unicode
/// mapping expands (`'İ'` to `"i\u{307}"`), only its first character is kept.
/// The character count of the text never changes.
pub fn simple_lowercase(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// A filter that converts tokens to lowercase.
///
/// Lowercasing is locale-insensitive and uses [`simple_lowercase`].
/// Positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            token.text = simple_lowercase(&token.text);
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::with_offsets("Hello", 0, 0, 5),
            Token::new("WORLD", 1),
            Token::new("Ärger", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[0].end_offset, 5);
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "ärger");
    }

    #[test]
    fn test_lowercase_keeps_character_count() {
        assert_eq!(simple_lowercase("İSTANBUL"), "istanbul");
        assert_eq!(simple_lowercase("İ").chars().count(), 1);
        assert_eq!(simple_lowercase("ΣΟΦΙΑ"), "σοφια");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
