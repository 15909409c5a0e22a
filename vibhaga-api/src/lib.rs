//! Public API for vibhaga morphological analysis
//!
//! This crate provides a stable interface over the analyzer and the request
//! contract of the serving boundary: a request carries a `word` field, blank
//! input is rejected with a user-facing message, and anything else is
//! analysed in sentence mode.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use vibhaga_core::{Analysis, Analyzer, WordAnalysis};

// Re-export key types
pub use config::{Config, ConfigBuilder, LexiconSource, DEFAULT_LEXICON};
pub use dto::{AnalyzeRequest, AnalyzeResponse};
pub use error::ApiError;

/// Request handler wrapping one analyzer
#[derive(Debug)]
pub struct MorphologyService {
    analyzer: Analyzer,
}

impl MorphologyService {
    /// Create a service with the default configuration (built-in Telugu)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a service for a built-in lexicon
    pub fn with_lexicon(name: &str) -> Result<Self> {
        let config = Config::builder().lexicon(name).build()?;
        Self::with_config(config)
    }

    /// Create a service with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let analyzer = config.build_analyzer()?;
        log::debug!(
            "Serving lexicon {} with engines {:?}",
            analyzer.lexicon().code(),
            analyzer.segmenters().names()
        );
        Ok(Self { analyzer })
    }

    /// Wrap an existing analyzer
    pub fn from_analyzer(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    /// The underlying analyzer
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Message returned for blank requests
    pub fn empty_input_message(&self) -> String {
        let name = self.analyzer.lexicon().name();
        format!("Please enter {} {name} word or sentence.", indefinite_article(name))
    }

    /// Answer one request
    ///
    /// Blank input yields an error response and performs no analysis.
    pub fn handle(&self, request: &AnalyzeRequest) -> AnalyzeResponse {
        let input = request.word.trim();
        if input.is_empty() {
            return AnalyzeResponse::error(self.empty_input_message());
        }

        let output = self.analyzer.analyze_sentence(input).to_string();
        AnalyzeResponse::success(input, output)
    }

    /// Answer one JSON-encoded request with a JSON-encoded response
    pub fn handle_json(&self, request: &str) -> Result<String> {
        let request: AnalyzeRequest = serde_json::from_str(request)?;
        Ok(serde_json::to_string(&self.handle(&request))?)
    }

    /// Analyse text in sentence mode
    pub fn analyze(&self, text: &str) -> Analysis {
        self.analyzer.analyze_sentence(text)
    }

    /// Analyse a single word
    pub fn analyze_word(&self, word: &str) -> WordAnalysis {
        self.analyzer.analyze_word(word)
    }
}

// Convenience functions

/// Analyse text with the default configuration
pub fn analyze_text(text: &str) -> Result<String> {
    let service = MorphologyService::new()?;
    Ok(service.analyze(text).to_string())
}

/// Analyse one word with the default configuration
pub fn analyze_word(word: &str) -> Result<String> {
    let service = MorphologyService::new()?;
    Ok(service.analyze_word(word).to_string())
}

/// "an" before a vowel letter, otherwise "a"
fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
