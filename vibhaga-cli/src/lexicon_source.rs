//! Lexicon source management for CLI

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;
use vibhaga_api::{Config, LexiconSource, MorphologyService};

/// Options selecting the lexicon and the analyzer settings
#[derive(Debug, Args, Default)]
pub struct LexiconArgs {
    /// Built-in lexicon by name or code
    #[arg(short, long, value_name = "NAME", conflicts_with = "lexicon_config")]
    pub lexicon: Option<String>,

    /// Lexicon manifest (TOML)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub lexicon_config: Option<PathBuf>,

    /// Back the literal fallback with statistical engines
    #[arg(long)]
    pub statistical_fallback: bool,

    /// Morfessor segmentation listing (overrides the manifest)
    #[arg(long, value_name = "FILE")]
    pub morfessor_model: Option<PathBuf>,

    /// BPE tokenizer file (overrides the manifest)
    #[arg(long, value_name = "FILE")]
    pub bpe_model: Option<PathBuf>,

    /// Maximum nesting of sandhi expansions
    #[arg(long, value_name = "N")]
    pub max_sandhi_depth: Option<usize>,
}

impl LexiconArgs {
    /// Lexicon selected by the flags, falling back to the configured default
    pub fn source(&self, config: &CliConfig) -> LexiconSource {
        match (&self.lexicon_config, &self.lexicon) {
            (Some(path), _) => LexiconSource::Manifest(path.clone()),
            (None, Some(name)) => LexiconSource::Builtin(name.clone()),
            (None, None) => LexiconSource::Builtin(config.analysis.default_lexicon.clone()),
        }
    }

    /// Analysis configuration with flags taking precedence over the file
    pub fn api_config(&self, config: &CliConfig) -> Result<Config> {
        let mut builder = match self.source(config) {
            LexiconSource::Builtin(name) => Config::builder().lexicon(name),
            LexiconSource::Manifest(path) => Config::builder().lexicon_manifest(path),
        };

        builder = builder
            .statistical_fallback(self.statistical_fallback || config.analysis.statistical_fallback)
            .max_sandhi_depth(
                self.max_sandhi_depth
                    .unwrap_or(config.analysis.max_sandhi_depth),
            );

        if let Some(path) = &self.morfessor_model {
            builder = builder.morfessor_model(path);
        }
        if let Some(path) = &self.bpe_model {
            builder = builder.bpe_model(path);
        }

        Ok(builder.build()?)
    }

    /// Build the analysis service
    pub fn service(&self, config: &CliConfig) -> Result<MorphologyService> {
        let api_config = self.api_config(config)?;
        log::info!("Using lexicon {}", display_name(api_config.lexicon()));
        Ok(MorphologyService::with_config(api_config)?)
    }
}

/// Get the display name for a lexicon source
pub fn display_name(source: &LexiconSource) -> String {
    match source {
        LexiconSource::Builtin(name) => format!("Built-in: {name}"),
        LexiconSource::Manifest(path) => format!("External: {}", path.display()),
    }
}
