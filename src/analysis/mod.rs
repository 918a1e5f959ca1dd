//! Text analysis module for kea-analysis.
//!
//! This module provides tokenization, token filters and the analyzers that
//! chain them into keyphrase candidate pipelines.

pub mod analyzer;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use stop_words::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
