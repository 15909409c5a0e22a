//! Byte-pair-encoding segmenter
//!
//! Wraps a trained `tokenizers` artifact (`tokenizer.json`), such as a BPE or
//! SentencePiece model exported from Hugging Face. Word-boundary markers are
//! removed from the produced tokens. A split whose pieces do not spell the
//! word exactly is rejected.

use std::fmt;
use std::path::Path;

use tokenizers::Tokenizer;

use super::Segmenter;
use crate::error::EngineError;

/// Word-boundary marker used by SentencePiece-style vocabularies
pub const WORD_BOUNDARY: char = '▁';

/// Subword segmenter backed by a trained tokenizer
pub struct BpeSegmenter {
    tokenizer: Tokenizer,
}

impl BpeSegmenter {
    /// Load a `tokenizer.json` artifact
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let tokenizer = Tokenizer::from_file(path).map_err(|e| EngineError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let segmenter = Self::from_tokenizer(tokenizer);
        if segmenter.vocab_size() == 0 {
            return Err(EngineError::EmptyModel);
        }

        log::debug!(
            "Loaded BPE tokenizer {} ({} tokens)",
            path.display(),
            segmenter.vocab_size()
        );
        Ok(segmenter)
    }

    /// Wrap an already built tokenizer
    pub fn from_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Vocabulary size, added tokens included
    pub fn vocab_size(&self) -> usize {
        self.tokenizer.get_vocab_size(true)
    }
}

impl fmt::Debug for BpeSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BpeSegmenter")
            .field("vocab_size", &self.vocab_size())
            .finish()
    }
}

/// Strip boundary markers and spaces from tokens, dropping empty pieces
fn clean_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| token.replace(WORD_BOUNDARY, "").replace(' ', ""))
        .filter(|piece| !piece.is_empty())
        .collect()
}

impl Segmenter for BpeSegmenter {
    fn name(&self) -> &str {
        "bpe"
    }

    fn try_segment(&self, word: &str) -> Result<Vec<String>, EngineError> {
        let encoding = self
            .tokenizer
            .encode(word, false)
            .map_err(|e| EngineError::Segmentation(e.to_string()))?;

        let pieces = clean_tokens(encoding.get_tokens());
        if pieces.concat() != word {
            return Err(EngineError::Segmentation(format!(
                "tokens {pieces:?} do not spell '{word}'"
            )));
        }

        Ok(pieces)
    }
}
