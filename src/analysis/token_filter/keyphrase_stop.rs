//! Keyphrase candidate stop filter.
//!
//! Decides whether a candidate term survives for keyphrase scoring. The rule
//! depends on the arity `n` of the chain the filter sits in:
//!
//! - `n == 1`: the candidate is a single word. It is rejected when it is a stop
//!   word, when it is a single character, or when it consists of digits only.
//! - `n >= 2`: the candidate is `n` space-joined words. It is rejected when the
//!   first word is a begin stop word or the last word is an end stop word.
//!   Interior words are never checked.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kea_analysis::analysis::stop_words::StopWordSets;
//! use kea_analysis::analysis::token_filter::keyphrase_stop::{KeyphraseStopFilter, RejectReason};
//!
//! let stop_words = Arc::new(StopWordSets::english());
//!
//! let unigrams = KeyphraseStopFilter::new(1, stop_words.clone()).unwrap();
//! assert!(unigrams.accept("quick"));
//! assert_eq!(unigrams.evaluate("42"), Some(RejectReason::Numeric));
//!
//! let bigrams = KeyphraseStopFilter::new(2, stop_words).unwrap();
//! assert!(bigrams.accept("quick brown"));
//! assert_eq!(bigrams.evaluate("the quick"), Some(RejectReason::BeginStopWord));
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::analysis::stop_words::{PhrasePosition, StopWordSets};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::shingle::TOKEN_SEPARATOR;
use crate::error::{KeaError, Result};

/// Pattern matching candidates made of ASCII decimal digits only.
const NUMERIC_PATTERN: &str = r"^[0-9]+$";

/// Why a candidate was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The single-word candidate is a stop word.
    StopWord,
    /// The single-word candidate has exactly one character.
    SingleCharacter,
    /// The single-word candidate consists of decimal digits only.
    Numeric,
    /// The phrase starts with a stop word.
    BeginStopWord,
    /// The phrase ends with a stop word.
    EndStopWord,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectReason::StopWord => "stop word",
            RejectReason::SingleCharacter => "single character",
            RejectReason::Numeric => "numeric",
            RejectReason::BeginStopWord => "begins with stop word",
            RejectReason::EndStopWord => "ends with stop word",
        };
        f.write_str(reason)
    }
}

/// A filter that drops tokens which are not keyphrase candidates.
///
/// Tokens are expected to be lowercase already. Accepted tokens pass through
/// unchanged, with their positions and offsets.
#[derive(Clone, Debug)]
pub struct KeyphraseStopFilter {
    n: usize,
    stop_words: Arc<StopWordSets>,
    numeric: Arc<Regex>,
}

impl KeyphraseStopFilter {
    /// Create a new filter for candidates of `n` words.
    ///
    /// # Errors
    ///
    /// Returns [`KeaError::Configuration`] if `n` is 0.
    pub fn new(n: usize, stop_words: Arc<StopWordSets>) -> Result<Self> {
        if n == 0 {
            return Err(KeaError::configuration("n must be at least 1"));
        }
        let numeric = Regex::new(NUMERIC_PATTERN)
            .map_err(|e| KeaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(KeyphraseStopFilter {
            n,
            stop_words,
            numeric: Arc::new(numeric),
        })
    }

    /// Get the number of words per candidate.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get the stop word sets consulted by this filter.
    pub fn stop_words(&self) -> &Arc<StopWordSets> {
        &self.stop_words
    }

    /// Check whether `candidate` survives the filter.
    pub fn accept(&self, candidate: &str) -> bool {
        self.evaluate(candidate).is_none()
    }

    /// Classify `candidate`, returning the reason it is rejected, if any.
    ///
    /// For phrases the begin check runs first, so a phrase that both starts
    /// and ends with a stop word reports [`RejectReason::BeginStopWord`].
    pub fn evaluate(&self, candidate: &str) -> Option<RejectReason> {
        if self.n == 1 {
            if self.stop_words.is_stop_word(candidate) {
                return Some(RejectReason::StopWord);
            }
            if candidate.chars().count() == 1 {
                return Some(RejectReason::SingleCharacter);
            }
            if self.numeric.is_match(candidate) {
                return Some(RejectReason::Numeric);
            }
            return None;
        }

        let mut words = candidate.split(TOKEN_SEPARATOR);
        let first = words.next().unwrap_or_default();
        let last = words.next_back().unwrap_or(first);

        if self.stop_words.contains_at(PhrasePosition::Begin, first) {
            Some(RejectReason::BeginStopWord)
        } else if self.stop_words.contains_at(PhrasePosition::End, last) {
            Some(RejectReason::EndStopWord)
        } else {
            None
        }
    }
}

impl Filter for KeyphraseStopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filter = self.clone();
        Ok(Box::new(tokens.filter(move |token| {
            match filter.evaluate(&token.text) {
                Some(reason) => {
                    log::trace!("rejected candidate {:?}: {reason}", token.text);
                    false
                }
                None => true,
            }
        })))
    }

    fn name(&self) -> &'static str {
        "keyphrase_stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn filter(n: usize, words: &[&str]) -> KeyphraseStopFilter {
        KeyphraseStopFilter::new(n, Arc::new(StopWordSets::from_words(words))).unwrap()
    }

    #[test]
    fn test_zero_arity_is_rejected() {
        let result = KeyphraseStopFilter::new(0, Arc::new(StopWordSets::english()));
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_unigram_rules() {
        let filter = filter(1, &["the"]);

        assert_eq!(filter.evaluate("the"), Some(RejectReason::StopWord));
        assert_eq!(filter.evaluate("x"), Some(RejectReason::SingleCharacter));
        assert_eq!(filter.evaluate("7"), Some(RejectReason::SingleCharacter));
        assert_eq!(filter.evaluate("é"), Some(RejectReason::SingleCharacter));
        assert_eq!(filter.evaluate("123"), Some(RejectReason::Numeric));
        assert_eq!(filter.evaluate("007"), Some(RejectReason::Numeric));
        assert_eq!(filter.evaluate("a5"), None);
        assert_eq!(filter.evaluate("3.14"), None);
        assert_eq!(filter.evaluate("fox"), None);
    }

    #[test]
    fn test_single_character_stop_word_reports_stop_word() {
        let filter = filter(1, &["a"]);
        assert_eq!(filter.evaluate("a"), Some(RejectReason::StopWord));
    }

    #[test]
    fn test_unigram_ignores_phrase_rules() {
        // A single word is checked against the general set only
        let filter = filter(1, &["of"]);
        assert!(filter.accept("ministry"));
        assert!(!filter.accept("of"));
    }

    #[test]
    fn test_phrase_rules() {
        let filter = filter(3, &["the", "of"]);

        assert_eq!(filter.evaluate("the quick brown"), Some(RejectReason::BeginStopWord));
        assert_eq!(filter.evaluate("quick brown of"), Some(RejectReason::EndStopWord));
        assert_eq!(filter.evaluate("the quick of"), Some(RejectReason::BeginStopWord));
        assert_eq!(filter.evaluate("quick the brown"), None);
        assert_eq!(filter.evaluate("quick of brown"), None);
    }

    #[test]
    fn test_phrase_checks_first_and_last_word() {
        let filter = filter(4, &["of"]);

        assert_eq!(filter.evaluate("strategy ministry of defence"), None);
        assert_eq!(filter.evaluate("head ministry defence of"), Some(RejectReason::EndStopWord));
        assert_eq!(filter.evaluate("of head ministry defence"), Some(RejectReason::BeginStopWord));
    }

    #[test]
    fn test_phrase_structural_rules_do_not_apply() {
        let filter = filter(2, &[]);
        assert!(filter.accept("x 42"));
        assert!(filter.accept("123 456"));
    }

    #[test]
    fn test_filter_drops_rejected_tokens() {
        let filter = filter(2, &["the"]);
        let tokens = vec![
            Token::with_offsets("the quick", 0, 0, 9),
            Token::with_offsets("quick brown", 1, 4, 15),
            Token::with_offsets("brown fox", 2, 10, 19),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "quick brown");
        assert_eq!(result[0].position, 1);
        assert_eq!(result[1].text, "brown fox");
    }

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(RejectReason::BeginStopWord.to_string(), "begins with stop word");
        assert_eq!(RejectReason::Numeric.to_string(), "numeric");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(filter(1, &[]).name(), "keyphrase_stop");
    }
}
