//! Data Transfer Objects for the serving boundary

use serde::{Deserialize, Serialize};

/// Analysis request
///
/// A missing `word` field deserializes to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Word or sentence to analyse
    #[serde(default)]
    pub word: String,
}

impl AnalyzeRequest {
    /// Create a request
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// Analysis response
///
/// Serializes as `{"input": ..., "output": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    /// Analysis produced
    Success {
        /// Trimmed input text
        input: String,
        /// Rendered analysis
        output: String,
    },
    /// Request rejected
    Failure {
        /// User-facing message
        error: String,
    },
}

impl AnalyzeResponse {
    /// Successful response
    pub fn success(input: impl Into<String>, output: impl Into<String>) -> Self {
        AnalyzeResponse::Success {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Error response
    pub fn error(message: impl Into<String>) -> Self {
        AnalyzeResponse::Failure {
            error: message.into(),
        }
    }

    /// Whether an analysis was produced
    pub fn is_success(&self) -> bool {
        matches!(self, AnalyzeResponse::Success { .. })
    }

    /// Rendered analysis, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            AnalyzeResponse::Success { output, .. } => Some(output),
            AnalyzeResponse::Failure { .. } => None,
        }
    }
}
