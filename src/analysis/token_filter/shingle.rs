//! Shingle (word n-gram) filter implementation.
//!
//! Groups consecutive tokens into overlapping windows of exactly `size`
//! tokens, sliding by one. Windows shorter than `size` at the end of the
//! input are never emitted, and unigrams are not passed through.
//!
//! # Examples
//!
//! ```
//! use kea_analysis::analysis::token_filter::Filter;
//! use kea_analysis::analysis::token_filter::shingle::ShingleFilter;
//! use kea_analysis::analysis::token::Token;
//!
//! let filter = ShingleFilter::new(2).unwrap();
//! let tokens = vec![
//!     Token::new("quick", 0),
//!     Token::new("brown", 1),
//!     Token::new("fox", 2),
//! ];
//!
//! let shingles: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(shingles, vec!["quick brown", "brown fox"]);
//! ```

use std::collections::VecDeque;
use std::iter;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{KeaError, Result};

/// Separator placed between the words of a shingle.
pub const TOKEN_SEPARATOR: char = ' ';

/// A filter that emits fixed-size word n-grams.
///
/// A shingle takes the position and start offset of its first token and the
/// end offset of its last token. Only the last `size` tokens are buffered, so
/// the output stays as lazy as the input.
#[derive(Clone, Debug)]
pub struct ShingleFilter {
    size: usize,
}

impl ShingleFilter {
    /// Create a new shingle filter emitting windows of `size` tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is less than 2.
    pub fn new(size: usize) -> Result<Self> {
        if size < 2 {
            return Err(KeaError::analysis(format!(
                "shingle size must be at least 2, got {size}"
            )));
        }
        Ok(ShingleFilter { size })
    }

    /// Get the number of tokens per shingle.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Filter for ShingleFilter {
    fn filter(&self, mut tokens: TokenStream) -> Result<TokenStream> {
        let size = self.size;
        let mut window: VecDeque<Token> = VecDeque::with_capacity(size);

        Ok(Box::new(iter::from_fn(move || {
            loop {
                let token = tokens.next()?;
                if window.len() == size {
                    window.pop_front();
                }
                window.push_back(token);
                if window.len() == size {
                    return Some(join_window(&window));
                }
            }
        })))
    }

    fn name(&self) -> &'static str {
        "shingle"
    }
}

/// Join a full window into one shingle token.
fn join_window(window: &VecDeque<Token>) -> Token {
    let first = &window[0];
    let last = &window[window.len() - 1];

    let mut text = String::with_capacity(window.iter().map(|t| t.text.len() + 1).sum());
    for (i, token) in window.iter().enumerate() {
        if i > 0 {
            text.push(TOKEN_SEPARATOR);
        }
        text.push_str(&token.text);
    }

    Token::with_offsets(text, first.position, first.start_offset, last.end_offset)
}
