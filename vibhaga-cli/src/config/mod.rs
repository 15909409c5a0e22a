//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use vibhaga_core::DEFAULT_MAX_SANDHI_DEPTH;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load a configuration file if one was given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Built-in lexicon used when none is given
    pub default_lexicon: String,

    /// Consult statistical engines before the literal fallback
    pub statistical_fallback: bool,

    /// Bound on nested sandhi expansion
    pub max_sandhi_depth: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_lexicon: vibhaga_api::DEFAULT_LEXICON.to_string(),
            statistical_fallback: false,
            max_sandhi_depth: DEFAULT_MAX_SANDHI_DEPTH,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}
