//! Configuration for keyphrase candidate analysis.
//!
//! A [`KeyphraseConfig`] names the candidate arity `n` and, optionally, a
//! replacement stop word list given either inline or as a file. It
//! deserializes from JSON using the keys `n`, `stopwords` and
//! `stopwordsFile`:
//!
//! ```
//! use kea_analysis::config::KeyphraseConfig;
//!
//! let config = KeyphraseConfig::from_json_str(r#"{ "n": 2, "stopwords": "foo,bar" }"#).unwrap();
//! assert_eq!(config.n, 2);
//!
//! let stop_words = config.load_stop_words().unwrap();
//! assert!(stop_words.is_stop_word("bar"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::StopWordSets;
use crate::error::{KeaError, Result};

/// Configuration for a keyphrase analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyphraseConfig {
    /// Number of words per candidate (must be >= 1).
    pub n: usize,

    /// Comma-separated replacement stop words.
    /// Takes precedence over `stopwords_file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<String>,

    /// Path to a newline-delimited replacement stop word file.
    /// Only read when `stopwords` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords_file: Option<PathBuf>,
}

impl KeyphraseConfig {
    /// Create a configuration for `n`-word candidates with default stop words.
    pub fn new(n: usize) -> Self {
        KeyphraseConfig {
            n,
            stopwords: None,
            stopwords_file: None,
        }
    }

    /// Set an inline, comma-separated stop word list.
    pub fn with_stopwords<S: Into<String>>(mut self, stopwords: S) -> Self {
        self.stopwords = Some(stopwords.into());
        self
    }

    /// Set a stop word file.
    pub fn with_stopwords_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.stopwords_file = Some(path.into());
        self
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| KeaError::configuration(format!("invalid configuration: {e}")))
    }

    /// Read and parse a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            KeaError::configuration(format!(
                "failed to read configuration file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Check that the configuration can build an analyzer.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(KeaError::configuration("n must be at least 1"));
        }
        Ok(())
    }

    /// Build the stop word sets this configuration asks for.
    ///
    /// The inline list wins over the file; the file is not touched when an
    /// inline list is present. With neither, the default English list is used.
    pub fn load_stop_words(&self) -> Result<StopWordSets> {
        match (&self.stopwords, &self.stopwords_file) {
            (Some(inline), _) => {
                log::debug!("using inline stop words");
                Ok(StopWordSets::parse_inline(inline))
            }
            (None, Some(path)) => StopWordSets::from_file(path),
            (None, None) => {
                log::debug!("using default English stop words");
                Ok(StopWordSets::english())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keys() {
        let config = KeyphraseConfig::from_json_str(
            r#"{ "n": 3, "stopwords": "a,b", "stopwordsFile": "/tmp/words.txt" }"#,
        )
        .unwrap();

        assert_eq!(config.n, 3);
        assert_eq!(config.stopwords.as_deref(), Some("a,b"));
        assert_eq!(config.stopwords_file, Some(PathBuf::from("/tmp/words.txt")));
    }

    #[test]
    fn test_from_json_defaults() {
        let config = KeyphraseConfig::from_json_str(r#"{ "n": 1 }"#).unwrap();
        assert_eq!(config, KeyphraseConfig::new(1));
    }

    #[test]
    fn test_missing_or_invalid_n() {
        assert!(KeyphraseConfig::from_json_str("{}").unwrap_err().is_configuration());
        assert!(
            KeyphraseConfig::from_json_str(r#"{ "n": -1 }"#)
                .unwrap_err()
                .is_configuration()
        );
        assert!(KeyphraseConfig::new(0).validate().unwrap_err().is_configuration());
        assert!(KeyphraseConfig::new(1).validate().is_ok());
    }

    #[test]
    fn test_inline_takes_precedence_over_file() {
        let config = KeyphraseConfig::new(1)
            .with_stopwords("foo")
            .with_stopwords_file("/nonexistent/stopwords.txt");

        let sets = config.load_stop_words().unwrap();
        assert_eq!(sets.len(), 1);
        assert!(sets.is_stop_word("foo"));
    }

    #[test]
    fn test_unreadable_file() {
        let config = KeyphraseConfig::new(1).with_stopwords_file("/nonexistent/stopwords.txt");
        assert!(config.load_stop_words().unwrap_err().is_configuration());
    }

    #[test]
    fn test_defaults_without_overrides() {
        let sets = KeyphraseConfig::new(2).load_stop_words().unwrap();
        assert_eq!(sets, StopWordSets::english());
    }

    #[test]
    fn test_serialize_round_trip_keys() {
        let config = KeyphraseConfig::new(2).with_stopwords_file("words.txt");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"n":2,"stopwordsFile":"words.txt"}"#);
    }
}
