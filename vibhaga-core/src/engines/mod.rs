//! Statistical segmentation engines
//!
//! Engines propose a subword split for words the rule cascade could not
//! decompose. They are consumed, never trained, and sit behind a
//! degrade-to-identity contract: a caller of [`Segmenter::segment`] sees
//! either a split into two or more pieces or the word itself.

pub mod bpe;
pub mod morfessor;

use std::fmt;
use std::path::Path;

use crate::error::EngineError;
use crate::lexicon::Models;

pub use bpe::BpeSegmenter;
pub use morfessor::MorfessorSegmenter;

/// A model-driven word segmenter
pub trait Segmenter: Send + Sync {
    /// Engine name used in logs
    fn name(&self) -> &str;

    /// Segment `word`, reporting failures
    fn try_segment(&self, word: &str) -> Result<Vec<String>, EngineError>;

    /// Segment `word`, never failing
    ///
    /// Returns at least two non-empty pieces, or `[word]` when the engine
    /// declines or fails. Failures are logged.
    fn segment(&self, word: &str) -> Vec<String> {
        match self.try_segment(word) {
            Ok(pieces) => {
                let pieces: Vec<String> = pieces.into_iter().filter(|p| !p.is_empty()).collect();
                if pieces.len() > 1 {
                    pieces
                } else {
                    vec![word.to_string()]
                }
            }
            Err(e) => {
                log::warn!("{} failed on '{word}': {e}", self.name());
                vec![word.to_string()]
            }
        }
    }
}

/// The configured engines, consulted in order
#[derive(Default)]
pub struct Segmenters {
    engines: Vec<Box<dyn Segmenter>>,
}

impl Segmenters {
    /// No engines
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the engines a lexicon declares: Morfessor first, then BPE
    ///
    /// An artifact that cannot be loaded disables its engine with a warning.
    pub fn from_models(models: &Models) -> Self {
        let mut segmenters = Self::new();

        if let Some(path) = &models.morfessor {
            if let Some(engine) = load_engine(path, MorfessorSegmenter::from_file) {
                segmenters.push(Box::new(engine));
            }
        }

        if let Some(path) = &models.bpe {
            if let Some(engine) = load_engine(path, BpeSegmenter::from_file) {
                segmenters.push(Box::new(engine));
            }
        }

        segmenters
    }

    /// Append an engine
    pub fn push(&mut self, engine: Box<dyn Segmenter>) {
        self.engines.push(engine);
    }

    /// Names of the loaded engines, in order
    pub fn names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name()).collect()
    }

    /// Number of loaded engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether no engine is loaded
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// First genuine multi-piece split offered by any engine
    pub fn segment(&self, word: &str) -> Option<Vec<String>> {
        self.engines
            .iter()
            .map(|engine| engine.segment(word))
            .find(|pieces| pieces.len() > 1)
    }
}

impl fmt::Debug for Segmenters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmenters")
            .field("engines", &self.names())
            .finish()
    }
}

fn load_engine<T, F>(path: &Path, load: F) -> Option<T>
where
    F: FnOnce(&Path) -> Result<T, EngineError>,
{
    match load(path) {
        Ok(engine) => Some(engine),
        Err(e) => {
            log::warn!("Model {} unavailable, engine disabled: {e}", path.display());
            None
        }
    }
}
