//! Keyphrase candidate analyzer.
//!
//! # Pipeline
//!
//! 1. UnicodeWordTokenizer (Unicode word boundaries)
//! 2. LowercaseFilter
//! 3. ShingleFilter (only when `n >= 2`, exactly `n` words per shingle)
//! 4. KeyphraseStopFilter
//!
//! # Examples
//!
//! ```
//! use kea_analysis::analysis::analyzer::KeyphraseAnalyzer;
//!
//! let analyzer = KeyphraseAnalyzer::new(2).unwrap();
//! let candidates = analyzer.candidates("the quick brown fox").unwrap();
//!
//! assert_eq!(candidates, vec!["quick brown", "brown fox"]);
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::stop_words::StopWordSets;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::keyphrase_stop::KeyphraseStopFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::shingle::ShingleFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::config::KeyphraseConfig;
use crate::error::Result;

/// An analyzer producing keyphrase candidates of exactly `n` words.
///
/// The stop word sets are shared through an `Arc` and never mutated, so an
/// analyzer can be cloned freely and used from many threads at once.
#[derive(Clone)]
pub struct KeyphraseAnalyzer {
    stop_filter: Arc<KeyphraseStopFilter>,
    inner: PipelineAnalyzer,
}

impl KeyphraseAnalyzer {
    /// Create an analyzer for `n`-word candidates using the default English
    /// stop words.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_stop_words(n, Arc::new(StopWordSets::english()))
    }

    /// Create an analyzer for `n`-word candidates with the given stop words.
    pub fn with_stop_words(n: usize, stop_words: Arc<StopWordSets>) -> Result<Self> {
        Self::with_tokenizer(n, Arc::new(UnicodeWordTokenizer::new()), stop_words)
    }

    /// Create an analyzer that splits text with a custom tokenizer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `n` is 0.
    pub fn with_tokenizer(
        n: usize,
        tokenizer: Arc<dyn Tokenizer>,
        stop_words: Arc<StopWordSets>,
    ) -> Result<Self> {
        let stop_filter = Arc::new(KeyphraseStopFilter::new(n, stop_words)?);

        let mut inner =
            PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(LowercaseFilter::new()));
        if n >= 2 {
            inner = inner.add_filter(Arc::new(ShingleFilter::new(n)?));
        }
        let inner = inner
            .add_filter(stop_filter.clone())
            .with_name(format!("keyphrase_{n}"));

        log::debug!(
            "created keyphrase analyzer: n={n}, {} stop words, tokenizer={}",
            stop_filter.stop_words().len(),
            inner.tokenizer().name()
        );

        Ok(KeyphraseAnalyzer { stop_filter, inner })
    }

    /// Create an analyzer from a configuration.
    ///
    /// Any stop word file is read here, before the analyzer is returned.
    pub fn from_config(config: &KeyphraseConfig) -> Result<Self> {
        config.validate()?;
        let stop_words = config.load_stop_words()?;
        Self::with_stop_words(config.n, Arc::new(stop_words))
    }

    /// Get the number of words per candidate.
    pub fn n(&self) -> usize {
        self.stop_filter.n()
    }

    /// Get the stop word sets used by this analyzer.
    pub fn stop_words(&self) -> &Arc<StopWordSets> {
        self.stop_filter.stop_words()
    }

    /// Check whether an already normalized candidate would be accepted.
    pub fn accept(&self, candidate: &str) -> bool {
        self.stop_filter.accept(candidate)
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    /// Analyze `text` and collect the accepted candidates in input order.
    pub fn candidates(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }

    /// Analyze many texts in parallel.
    ///
    /// The result holds one candidate list per input text, in input order.
    pub fn candidates_batch<S>(&self, texts: &[S]) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.candidates(text.as_ref()))
            .collect()
    }
}

impl Analyzer for KeyphraseAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "keyphrase"
    }
}

impl std::fmt::Debug for KeyphraseAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyphraseAnalyzer")
            .field("n", &self.n())
            .field("inner", &self.inner)
            .finish()
    }
}
