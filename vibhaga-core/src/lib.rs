//! Rule-driven morphological analysis
//!
//! This crate splits words of a morphologically rich language into labeled
//! parts: prefixes, roots, suffixes and reduplicated stems. Analysis is a
//! fixed priority cascade over an immutable lexicon, optionally backed by
//! statistical segmentation models for words the rules cannot decompose.
//!
//! # Architecture
//!
//! - **Lexicon**: prefix and suffix lists, the sandhi table and the
//!   root/known-word sets, loaded from a TOML manifest or an embedded lexicon
//! - **Analyzer**: the decision cascade and the sandhi resolver
//! - **Engines**: Morfessor-style and BPE segmenters behind one trait
//! - **Tokenizer**: sentence splitting that keeps delimiters in place
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vibhaga_core::{Analyzer, Lexicon};
//!
//! let lexicon = Lexicon::builder()
//!     .prefixes(["un"])
//!     .suffixes(["ing", "ed"])
//!     .roots(["play"])
//!     .known_words(["it"])
//!     .build();
//! let analyzer = Analyzer::new(Arc::new(lexicon));
//!
//! assert_eq!(
//!     analyzer.analyze_word("unplayed").to_string(),
//!     "un_Prefix + play_Root + ed_Suffix"
//! );
//! assert_eq!(
//!     analyzer.analyze("play it.", true).to_string(),
//!     "play_Root it_Root."
//! );
//! ```

pub mod analyzer;
pub mod engines;
pub mod error;
pub mod lexicon;
pub mod reduplication;
pub mod segment;
pub mod tokenizer;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerConfig, DEFAULT_MAX_SANDHI_DEPTH};
pub use engines::{BpeSegmenter, MorfessorSegmenter, Segmenter, Segmenters};
pub use error::{EngineError, Error, LexiconError, Result};
pub use lexicon::{
    builtin_lexicons, get_lexicon, load_lexicon, load_lexicon_strict, AffixList, Lexicon,
    LexiconBuilder, LexiconConfig, Models, SandhiTable,
};
pub use reduplication::is_reduplication;
pub use segment::{Analysis, Role, Segment, Token, WordAnalysis, SEGMENT_SEPARATOR};
