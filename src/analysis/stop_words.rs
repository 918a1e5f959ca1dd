//! Stop word sets for keyphrase candidate filtering.
//!
//! A [`StopWordSets`] holds three lookup sets derived together from one word
//! list:
//!
//! - the general set, consulted for single-word candidates
//! - the begin set, consulted for the first word of a phrase
//! - the end set, consulted for the last word of a phrase
//!
//! The sets are built once and never mutated afterwards, so a single instance
//! can be shared behind an `Arc` by every analyzer and thread.
//!
//! # Examples
//!
//! ```
//! use kea_analysis::analysis::stop_words::{PhrasePosition, StopWordSets};
//!
//! let sets = StopWordSets::from_words(["of", " the "]);
//! assert!(sets.is_stop_word("the"));
//! assert!(sets.contains_at(PhrasePosition::Begin, "of"));
//! assert!(sets.contains_at(PhrasePosition::End, "of"));
//! assert!(!sets.is_stop_word("ministry"));
//! ```

use std::fs;
use std::path::Path;

use ahash::AHashSet;

use crate::analysis::token_filter::lowercase::simple_lowercase;
use crate::error::{KeaError, Result};

/// Default English stop words.
///
/// Lucene's English stop words extended with conjunctions, prepositions,
/// pronouns, anomalous verbs and modal verbs.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    // Lucene stop words
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
    // conjunctions
    "after", "although", "because", "before", "even", "how", "lest", "once", "since", "than",
    "though", "till", "unless", "until", "when", "what", "whatever", "whenever", "where",
    "whereas", "wherever", "whether", "which", "whichever", "while", "who", "whose", "why",
    // prepositions
    "about", "above", "across", "ago", "below", "beside", "besides", "from", "off", "onto",
    "over", "past", "through", "toward", "towards", "under",
    // pronouns
    "he", "her", "hers", "herself", "him", "himself", "his", "i", "its", "itself", "me", "mine",
    "my", "myself", "our", "ours", "ourselves", "she", "theirs", "them", "themselves", "us", "we",
    "you", "your", "yours", "yourself", "yourselves",
    // anomalous verbs
    "been", "became", "become", "began", "begin", "begun", "came", "come", "coming", "did",
    "didn't", "do", "don't", "does", "doesn't", "doing", "done", "gave", "get", "getting", "give",
    "given", "go", "gone", "got", "gotten", "had", "have", "keep", "kept", "knew", "know", "known",
    "leave", "left", "let", "went", "were",
    // modal verbs
    "can", "cannot", "can't", "could", "couldn't", "made", "make", "ought", "said", "say", "send",
    "sent", "shall", "should", "shouldn't", "take", "taken", "tell", "think", "thought", "told",
    "took", "would", "wouldn't",
];

/// Where a word sits inside a multi-word candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhrasePosition {
    /// First word of the phrase.
    Begin,
    /// Last word of the phrase.
    End,
}

/// The three stop word sets used by keyphrase filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWordSets {
    words: AHashSet<String>,
    begin: AHashSet<String>,
    end: AHashSet<String>,
}

impl StopWordSets {
    /// Build the sets from the default English stop word list.
    pub fn english() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }

    /// Build the sets from a list of words.
    ///
    /// Each word is trimmed and lowercased; entries that are empty after
    /// trimming are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sets = StopWordSets::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word = simple_lowercase(word);
            sets.begin.insert(word.clone());
            sets.end.insert(word.clone());
            sets.words.insert(word);
        }
        log::debug!("built stop word sets with {} words", sets.len());
        sets
    }

    /// Build the sets from a comma-separated inline list such as `"foo, bar"`.
    pub fn parse_inline(list: &str) -> Self {
        Self::from_words(list.split(','))
    }

    /// Build the sets from a newline-delimited file.
    ///
    /// The whole file is read eagerly and the handle is closed before the
    /// sets are built.
    ///
    /// # Errors
    ///
    /// Returns [`KeaError::Configuration`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            KeaError::configuration(format!(
                "failed to read stop words file {}: {e}",
                path.display()
            ))
        })?;
        log::debug!("loaded stop words from {}", path.display());
        Ok(Self::from_words(content.lines()))
    }

    /// Check if a word is in the general set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Check if a word disqualifies a phrase when it occupies `position`.
    pub fn contains_at(&self, position: PhrasePosition, word: &str) -> bool {
        match position {
            PhrasePosition::Begin => self.begin.contains(word),
            PhrasePosition::End => self.end.contains(word),
        }
    }

    /// Get the number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if there are no stop words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
