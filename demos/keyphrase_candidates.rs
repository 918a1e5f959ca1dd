//! Example demonstrating keyphrase candidate extraction.
//!
//! Run with `RUST_LOG=trace` to see why each candidate is rejected.

use std::sync::Arc;

use kea_analysis::analysis::analyzer::KeyphraseAnalyzer;
use kea_analysis::analysis::stop_words::StopWordSets;
use kea_analysis::config::KeyphraseConfig;
use kea_analysis::error::Result;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Keyphrase Candidate Examples ===\n");

    let text = "The Ministry of Defence announced 42 new contracts for autonomous \
                vehicle research and machine learning systems in 2024.";
    println!("Text: {text}\n");

    // Example 1: Default English stop words, one to three words per candidate
    println!("1. Default stop words:");
    let stop_words = Arc::new(StopWordSets::english());
    for n in 1..=3 {
        let analyzer = KeyphraseAnalyzer::with_stop_words(n, stop_words.clone())?;
        println!("   n={n}: {:?}", analyzer.candidates(text)?);
    }

    // Example 2: Custom stop words from a JSON configuration
    println!("\n2. Custom stop words:");
    let config = KeyphraseConfig::from_json_str(r#"{ "n": 2, "stopwords": "of,for,and,in,the" }"#)?;
    let analyzer = KeyphraseAnalyzer::from_config(&config)?;
    println!("   config: {config:?}");
    println!("   n=2: {:?}", analyzer.candidates(text)?);

    // Example 3: Checking single candidates directly
    println!("\n3. Individual decisions (n=2):");
    for candidate in ["machine learning", "the ministry", "research and", "of defence"] {
        println!("   {candidate:<18} -> {}", analyzer.accept(candidate));
    }

    Ok(())
}
