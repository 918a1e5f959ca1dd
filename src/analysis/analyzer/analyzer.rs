//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer and filters to transform raw text into the
//! tokens consumed downstream:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`KeyphraseAnalyzer`](super::keyphrase::KeyphraseAnalyzer) - Keyphrase candidate extraction
//!
//! # Examples
//!
//! ```
//! use kea_analysis::analysis::analyzer::{Analyzer, KeyphraseAnalyzer};
//!
//! let analyzer = KeyphraseAnalyzer::new(1).unwrap();
//! let tokens: Vec<_> = analyzer.analyze("The Quick Fox").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "quick");
//! assert_eq!(tokens[1].text, "fox");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve many threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
