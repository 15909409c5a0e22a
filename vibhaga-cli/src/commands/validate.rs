//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use vibhaga_core::{load_lexicon_strict, BpeSegmenter, EngineError, Lexicon, MorfessorSegmenter};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon manifest to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub lexicon_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating lexicon manifest: {}",
            self.lexicon_config.display()
        );

        match self.check() {
            Ok((lexicon, models)) => {
                println!("✓ Manifest is valid!");
                println!("  Lexicon code: {}", lexicon.code());
                println!("  Lexicon name: {}", lexicon.name());
                println!("  Prefixes: {}", lexicon.prefixes().len());
                println!("  Suffixes: {}", lexicon.suffixes().len());
                println!("  Sandhi entries: {}", lexicon.sandhi().len());
                println!("  Roots: {}", lexicon.root_count());
                println!("  Known words: {}", lexicon.known_word_count());
                for model in models {
                    println!("  {model}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Manifest is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }

    fn check(&self) -> Result<(Lexicon, Vec<String>)> {
        let lexicon = load_lexicon_strict(&self.lexicon_config)?;
        let models = check_models(&lexicon)?;
        Ok((lexicon, models))
    }
}

/// Load every declared model, describing each one
fn check_models(lexicon: &Lexicon) -> Result<Vec<String>, EngineError> {
    let models = lexicon.models();
    let mut summary = Vec::new();

    if let Some(path) = &models.morfessor {
        let model = MorfessorSegmenter::from_file(path)?;
        summary.push(format!("Morfessor model: {} morphs", model.morph_count()));
    }
    if let Some(path) = &models.bpe {
        let model = BpeSegmenter::from_file(path)?;
        summary.push(format!("BPE model: {} tokens", model.vocab_size()));
    }

    Ok(summary)
}
