//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod keyphrase;
mod pipeline;

pub use analyzer::Analyzer;
pub use keyphrase::KeyphraseAnalyzer;
pub use pipeline::PipelineAnalyzer;
