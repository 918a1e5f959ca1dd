//! Error types for the kea-analysis library.
//!
//! All errors are represented by the [`KeaError`] enum. Configuration problems
//! are fatal and surface when an analyzer is constructed; filtering itself
//! never fails on a per-token basis.
//!
//! # Examples
//!
//! ```
//! use kea_analysis::error::{KeaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KeaError::configuration("n must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for kea-analysis operations.
#[derive(Error, Debug)]
pub enum KeaError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (unreadable stop word source, invalid arity, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Analysis-related errors (invalid tokenizer or filter parameters)
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with KeaError.
pub type Result<T> = std::result::Result<T, KeaError>;

impl KeaError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        KeaError::Configuration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KeaError::Analysis(msg.into())
    }

    /// Check whether this error was raised while building a configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, KeaError::Configuration(_))
    }
}
