//! # kea-analysis
//!
//! Keyphrase candidate filtering for text analysis pipelines.
//!
//! ## Features
//!
//! - Word-boundary tokenization and lowercasing
//! - Fixed-length word n-grams (shingles)
//! - Position-aware stop word rules for single words and phrases
//! - Rejection of single-character and purely numeric terms
//! - JSON configuration with inline or file-based stop word lists

pub mod analysis;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, KeyphraseAnalyzer, PipelineAnalyzer};
    pub use crate::analysis::stop_words::{PhrasePosition, StopWordSets};
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::token_filter::{Filter, KeyphraseStopFilter, RejectReason};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::config::KeyphraseConfig;
    pub use crate::error::{KeaError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
