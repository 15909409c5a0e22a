//! Core error types
//!
//! Analysis itself never fails: every degraded path falls back to an empty
//! table or an identity segmentation. These errors surface only from loading
//! lexicons and models, and from strict validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Manifest or resource file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid TOML for the lexicon schema
    #[error("invalid lexicon manifest: {0}")]
    Toml(#[from] toml::de::Error),

    /// Resource file is not valid JSON for its table shape
    #[error("invalid resource file {path}: {source}")]
    Json {
        /// Resource file that failed to parse
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// Manifest parsed but violates the schema rules
    #[error("invalid lexicon: {0}")]
    Invalid(String),

    /// Sandhi entries whose expansion would recurse into themselves
    #[error("sandhi table contains cyclic entries: {}", .0.join(", "))]
    SandhiCycle(Vec<String>),

    /// No built-in lexicon with this name or code
    #[error("unknown lexicon: {0}")]
    UnknownLexicon(String),
}

/// Errors raised by statistical segmentation engines
///
/// These never reach the analyzer: [`crate::engines::Segmenter::segment`]
/// converts them into an identity segmentation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Model artifact could not be read
    #[error("failed to read model {path}: {source}")]
    Io {
        /// Model file that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Model artifact was rejected by its loader
    #[error("failed to load model {path}: {reason}")]
    Load {
        /// Model file that failed to load
        path: PathBuf,
        /// Loader message
        reason: String,
    },

    /// Model artifact is malformed
    #[error("malformed model at line {line}: {reason}")]
    Format {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Model artifact contained no usable entries
    #[error("model contains no entries")]
    EmptyModel,

    /// Runtime failure while segmenting a word
    #[error("segmentation failed: {0}")]
    Segmentation(String),
}

/// Umbrella error for the core crate
#[derive(Debug, Error)]
pub enum Error {
    /// Lexicon loading or validation error
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// Statistical engine error
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Invalid analyzer configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandhi_cycle_display_lists_keys() {
        let error = LexiconError::SandhiCycle(vec!["ab".to_string(), "ba".to_string()]);
        assert_eq!(
            error.to_string(),
            "sandhi table contains cyclic entries: ab, ba"
        );
    }

    #[test]
    fn test_engine_format_display() {
        let error = EngineError::Format {
            line: 3,
            reason: "missing count".to_string(),
        };
        assert_eq!(error.to_string(), "malformed model at line 3: missing count");
    }

    #[test]
    fn test_umbrella_conversion() {
        let error: Error = LexiconError::UnknownLexicon("xx".to_string()).into();
        assert!(matches!(error, Error::Lexicon(LexiconError::UnknownLexicon(_))));
        assert_eq!(error.to_string(), "unknown lexicon: xx");
    }
}
