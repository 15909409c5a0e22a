//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Lexicon code for the new manifest
    #[arg(long, value_name = "CODE", required = true)]
    pub code: String,

    /// Human-readable lexicon name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating lexicon manifest template...");
        println!("  Lexicon code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Manifest template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the manifest to add affixes, roots and sandhi entries");
        println!("2. Validate your manifest:");
        println!(
            "   vibhaga validate --lexicon-config {}",
            self.output.display()
        );
        println!("3. Use it for analysis:");
        println!(
            "   vibhaga analyze -i input.txt --lexicon-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template manifest content
    fn generate_template(&self) -> String {
        let name = self.name.as_deref().unwrap_or("Custom Lexicon");
        format!(
            r#"# Lexicon manifest for {name}

[metadata]
code = "{code}"
name = "{name}"

# Affixes are tried longest first; equal lengths keep this order
[affixes]
prefixes = []
suffixes = []

[roots]
# Roots recognised as whole words
known = []
# Words always analysed as a single root
words = []

# Fused surface forms and their components, e.g.
# "surface" = ["first", "second"]
[sandhi]

# Optional JSON resource files, relative to this manifest
[resources]
# prefixes = "prefixes.json"
# suffixes = "suffixes.json"
# sandhi_rules = "sandhi_rules.json"
# known_roots = "known_roots.json"

# Optional statistical models, used with --statistical-fallback
[models]
# morfessor = "morfessor.txt"
# bpe = "tokenizer.json"
"#,
            code = self.code,
        )
    }
}
