//! API error types

use thiserror::Error;
use vibhaga_core::LexiconError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Lexicon could not be loaded
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Analyzer could not be built
    #[error("analyzer error: {0}")]
    Core(#[from] vibhaga_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Request or response (de)serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
