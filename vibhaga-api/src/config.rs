//! High-level configuration API

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ApiError, Result};
use vibhaga_core::{
    get_lexicon, load_lexicon, Analyzer, Lexicon, Models, Segmenters, DEFAULT_MAX_SANDHI_DEPTH,
};

/// Code of the lexicon used when none is configured
pub const DEFAULT_LEXICON: &str = "te";

/// Where the lexicon comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Built-in lexicon by name or code
    Builtin(String),
    /// TOML manifest on disk
    Manifest(PathBuf),
}

impl Default for LexiconSource {
    fn default() -> Self {
        LexiconSource::Builtin(DEFAULT_LEXICON.to_string())
    }
}

/// High-level configuration for morphological analysis
#[derive(Debug, Clone)]
pub struct Config {
    lexicon: LexiconSource,
    statistical_fallback: bool,
    morfessor_model: Option<PathBuf>,
    bpe_model: Option<PathBuf>,
    max_sandhi_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: LexiconSource::default(),
            statistical_fallback: false,
            morfessor_model: None,
            bpe_model: None,
            max_sandhi_depth: DEFAULT_MAX_SANDHI_DEPTH,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configured lexicon source
    pub fn lexicon(&self) -> &LexiconSource {
        &self.lexicon
    }

    /// Whether statistical engines back the literal fallback
    pub fn statistical_fallback(&self) -> bool {
        self.statistical_fallback
    }

    /// Bound on nested sandhi expansion
    pub fn max_sandhi_depth(&self) -> usize {
        self.max_sandhi_depth
    }

    /// Load the configured lexicon
    pub fn load_lexicon(&self) -> Result<Arc<Lexicon>> {
        match &self.lexicon {
            LexiconSource::Builtin(name) => Ok(get_lexicon(name)?),
            LexiconSource::Manifest(path) => Ok(Arc::new(load_lexicon(path)?)),
        }
    }

    /// Build an analyzer for this configuration
    pub fn build_analyzer(&self) -> Result<Analyzer> {
        let lexicon = self.load_lexicon()?;

        let mut builder = Analyzer::builder(Arc::clone(&lexicon))
            .statistical_fallback(self.statistical_fallback)
            .max_sandhi_depth(self.max_sandhi_depth);

        if self.statistical_fallback {
            builder = builder.segmenters(Segmenters::from_models(&self.models(&lexicon)));
        }

        Ok(builder.build()?)
    }

    /// Lexicon-declared models with command-line overrides applied
    fn models(&self, lexicon: &Lexicon) -> Models {
        let mut models = lexicon.models().clone();
        if let Some(path) = &self.morfessor_model {
            models.morfessor = Some(path.clone());
        }
        if let Some(path) = &self.bpe_model {
            models.bpe = Some(path.clone());
        }
        models
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Use a built-in lexicon by name or code
    pub fn lexicon(mut self, name: impl Into<String>) -> Self {
        self.config.lexicon = LexiconSource::Builtin(name.into());
        self
    }

    /// Load the lexicon from a manifest
    pub fn lexicon_manifest(mut self, path: impl AsRef<Path>) -> Self {
        self.config.lexicon = LexiconSource::Manifest(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable the statistical fallback stage
    pub fn statistical_fallback(mut self, enabled: bool) -> Self {
        self.config.statistical_fallback = enabled;
        self
    }

    /// Override the Morfessor model declared by the lexicon
    pub fn morfessor_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.morfessor_model = Some(path.into());
        self
    }

    /// Override the BPE tokenizer declared by the lexicon
    pub fn bpe_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.bpe_model = Some(path.into());
        self
    }

    /// Bound nested sandhi expansion
    pub fn max_sandhi_depth(mut self, depth: usize) -> Self {
        self.config.max_sandhi_depth = depth;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if let LexiconSource::Builtin(name) = &self.config.lexicon {
            if name.trim().is_empty() {
                return Err(ApiError::Config("lexicon name must not be empty".into()));
            }
        }

        if self.config.max_sandhi_depth == 0 {
            return Err(ApiError::Config(
                "max_sandhi_depth must be greater than 0".into(),
            ));
        }

        Ok(self.config)
    }
}
