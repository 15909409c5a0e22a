//! Configuration structures and validation
//!
//! This module defines the TOML schema for lexicon manifests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub affixes: Affixes,
    #[serde(default)]
    pub roots: Roots,
    /// Surface word to ordered components
    #[serde(default)]
    pub sandhi: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub models: Models,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Inline affix lists, in source order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Affixes {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// Inline root and known-word sets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roots {
    /// Known roots
    #[serde(default)]
    pub known: Vec<String>,
    /// Known whole words, always analysed as a single root
    #[serde(default)]
    pub words: Vec<String>,
}

/// Optional JSON resource files, relative to the manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resources {
    pub prefixes: Option<PathBuf>,
    pub suffixes: Option<PathBuf>,
    pub sandhi_rules: Option<PathBuf>,
    pub known_roots: Option<PathBuf>,
}

/// Optional statistical model artifacts, relative to the manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Models {
    pub morfessor: Option<PathBuf>,
    pub bpe: Option<PathBuf>,
}

impl LexiconConfig {
    /// Parse a manifest from TOML text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        if self.metadata.name.trim().is_empty() {
            return Err("metadata.name must not be empty".to_string());
        }

        if self.affixes.prefixes.iter().any(String::is_empty) {
            return Err("affixes.prefixes contains an empty string".to_string());
        }

        if self.affixes.suffixes.iter().any(String::is_empty) {
            return Err("affixes.suffixes contains an empty string".to_string());
        }

        let mut keys: Vec<&String> = self.sandhi.keys().collect();
        keys.sort();
        for key in keys {
            if self.sandhi[key].iter().any(String::is_empty) {
                return Err(format!("sandhi entry '{key}' has an empty component"));
            }
        }

        Ok(())
    }
}
