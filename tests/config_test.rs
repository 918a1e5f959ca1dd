//! Integration tests for building analyzers from configuration.

use std::fs;
use std::io::Write;

use kea_analysis::error::Result;
use kea_analysis::prelude::*;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_stop_words_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "ministry")?;
    writeln!(file, "  Defence  ")?;

    let config = KeyphraseConfig::new(1).with_stopwords_file(file.path());
    let analyzer = KeyphraseAnalyzer::from_config(&config)?;

    assert_eq!(analyzer.stop_words().len(), 2);
    assert_eq!(analyzer.candidates("Ministry of Defence")?, vec!["of"]);

    Ok(())
}

#[test]
fn test_config_from_json_file() -> Result<()> {
    let dir = TempDir::new()?;
    let words_path = dir.path().join("stopwords.txt");
    fs::write(&words_path, "of\nthe\n")?;

    let config_path = dir.path().join("kea.json");
    let json = serde_json::json!({
        "n": 2,
        "stopwordsFile": words_path,
    });
    fs::write(&config_path, json.to_string())?;

    let config = KeyphraseConfig::from_json_file(&config_path)?;
    let analyzer = KeyphraseAnalyzer::from_config(&config)?;

    assert_eq!(analyzer.n(), 2);
    assert_eq!(
        analyzer.candidates("the ministry of defence budget")?,
        vec!["defence budget"]
    );

    Ok(())
}

#[test]
fn test_inline_list_wins_over_unreadable_file() -> Result<()> {
    let dir = TempDir::new()?;
    let config = KeyphraseConfig::from_json_str(&format!(
        r#"{{ "n": 1, "stopwords": "foo,bar", "stopwordsFile": {:?} }}"#,
        dir.path().join("missing.txt")
    ))?;

    let analyzer = KeyphraseAnalyzer::from_config(&config)?;

    assert_eq!(analyzer.candidates("foo baz bar")?, vec!["baz"]);

    Ok(())
}

#[test]
fn test_construction_fails_on_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let config = KeyphraseConfig::new(2).with_stopwords_file(dir.path().join("missing.txt"));

    let err = KeyphraseAnalyzer::from_config(&config).unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_construction_fails_on_zero_arity() {
    let config = KeyphraseConfig::from_json_str(r#"{ "n": 0 }"#).unwrap();

    assert!(KeyphraseAnalyzer::from_config(&config).unwrap_err().is_configuration());
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();

    let err = KeyphraseConfig::from_json_file(dir.path().join("kea.json")).unwrap_err();

    assert!(err.is_configuration());
}
